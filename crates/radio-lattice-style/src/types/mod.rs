//! Value types shared by the style policy and renderers.

mod color;
mod font;
mod geometry;

pub use color::Color;
pub use font::{FontSpec, FontWeight};
pub use geometry::{Point, Rect, Size};
