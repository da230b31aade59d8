//! Style policy for Radio Lattice.
//!
//! This crate turns a group's visual treatment and layout direction into
//! concrete presentation values:
//!
//! - **Policy**: [`resolve_style`] and [`StylePolicy`] map `(style, axis)` to a
//!   [`StyleConfiguration`](style::StyleConfiguration)
//! - **Geometry**: [`ItemLayout`](resolve::ItemLayout) places the indicator, texts and
//!   separator of one row
//! - **Overrides**: host adjustments applied once at resolve time
//! - **Configuration**: overrides and group settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use radio_lattice_style::prelude::*;
//!
//! let config = resolve_style(GroupStyle::Standard, Axis::Vertical);
//! assert!(config.separator_visible);
//!
//! let row = ItemLayout::resolve(&config, ContentShape::TITLE_ONLY);
//! assert_eq!(row.content_height, 30.0);
//! ```

pub mod config;
pub mod resolve;
pub mod style;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use resolve::{StylePolicy, resolve_style};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::AppearanceConfig;
    pub use crate::resolve::{
        ContentShape, ItemLayout, StyleCache, StylePolicy, metrics, resolve_item_layout,
        resolve_style,
    };
    pub use crate::style::{Axis, Distribution, GroupStyle, StyleConfiguration, StyleOverrides};
    pub use crate::theme::RadioPalette;
    pub use crate::types::{Color, FontSpec, FontWeight, Point, Rect, Size};
}
