//! Built-in palettes.

mod palette;

pub use palette::RadioPalette;
