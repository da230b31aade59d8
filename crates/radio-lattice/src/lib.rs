//! Radio Lattice - headless radio-button groups.
//!
//! A [`RadioGroup`] holds an ordered list of [`RadioItem`]s, keeps at most
//! one of them selected, and resolves how the group should look for a
//! chosen [`GroupStyle`](prelude::GroupStyle) and [`Axis`](prelude::Axis).
//! Drawing is left to a [`GroupRenderer`]; the core hands it plain colors,
//! fonts and rectangles.
//!
//! This is the umbrella crate that also re-exports the core and style APIs.
//!
//! # Example
//!
//! ```
//! use radio_lattice::prelude::*;
//!
//! let items = vec![RadioItem::new("Light"), RadioItem::new("Dark")];
//! let mut group = RadioGroup::new(items, GroupStyle::Standard, Axis::Horizontal)?;
//!
//! group.select(0)?;
//! let layout = group.layout(315.0);
//! assert_eq!(layout.hit_test(Point::new(200.0, 10.0)), Some(1));
//! # Ok::<(), radio_lattice::Error>(())
//! ```

pub use radio_lattice_core::*;

/// Style policy module.
pub mod style {
    pub use radio_lattice_style::*;
}

pub mod appearance;
pub mod controller;
pub mod debug;
pub mod group;
pub mod item;
pub mod layout;
pub mod prelude;
pub mod render;

mod error;

pub use appearance::ItemAppearance;
pub use controller::{NO_SELECTION, SelectionController};
pub use debug::GroupTreeDebug;
pub use error::{Error, Result};
pub use group::RadioGroup;
pub use item::RadioItem;
pub use layout::{GroupLayout, RowFrame};
pub use render::{GroupRenderer, RowVisual};
