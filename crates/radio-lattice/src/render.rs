//! The seam between a group and whatever draws it.
//!
//! A [`GroupRenderer`] receives plain data: the resolved configuration, the
//! group's size, and one [`RowVisual`] per item in order. It never sees the
//! selection controller; gestures come back through
//! [`RadioGroup::select`](crate::RadioGroup::select).

use radio_lattice_style::style::StyleConfiguration;
use radio_lattice_style::types::Size;

use crate::appearance::ItemAppearance;
use crate::item::RadioItem;
use crate::layout::RowFrame;

/// Everything needed to draw one row.
#[derive(Debug, Clone, Copy)]
pub struct RowVisual<'a> {
    /// The item's texts.
    pub item: &'a RadioItem,
    /// Where the row sits and how its content is arranged.
    pub row: &'a RowFrame,
    /// Selection-dependent colors.
    pub appearance: &'a ItemAppearance,
    /// The group's resolved configuration.
    pub config: &'a StyleConfiguration,
}

/// Draws a radio group.
///
/// Implementations may render to a GPU surface, a terminal, an
/// accessibility tree or a test recorder.
pub trait GroupRenderer {
    /// Called once before any row.
    fn begin_group(&mut self, _config: &StyleConfiguration, _size: Size) {}

    /// Draw one row.
    fn draw_row(&mut self, row: RowVisual<'_>);

    /// Called once after the last row.
    fn end_group(&mut self) {}
}
