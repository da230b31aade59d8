//! Prelude module for Radio Lattice.
//!
//! ```
//! use radio_lattice::prelude::*;
//! ```
//!
//! This provides access to:
//! - Groups and items (`RadioGroup`, `RadioItem`, `SelectionController`)
//! - Signal/slot system (`Signal`, `ConnectionId`)
//! - Style policy (`GroupStyle`, `Axis`, `StyleConfiguration`, `resolve_style`)
//! - Geometry and color types (`Point`, `Size`, `Rect`, `Color`)

// ============================================================================
// Groups
// ============================================================================

pub use crate::{
    Error, GroupLayout, GroupRenderer, GroupTreeDebug, ItemAppearance, NO_SELECTION, RadioGroup,
    RadioItem, RowFrame, RowVisual, SelectionController,
};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use radio_lattice_core::{ConnectionId, Property, Signal, TreeFormatOptions, TreeStyle};

// ============================================================================
// Style
// ============================================================================

pub use radio_lattice_style::prelude::*;
