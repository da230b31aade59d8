//! Font-related types.

use std::fmt;

/// Font weight, typically ranging from 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal/regular weight (400).
    pub const REGULAR: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::REGULAR => write!(f, "regular"),
            Self::MEDIUM => write!(f, "medium"),
            Self(other) => write!(f, "{other}"),
        }
    }
}

/// A system font at a given size and weight.
///
/// Family selection is left to the renderer; the policy only decides
/// size and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl FontSpec {
    /// Line height as a multiple of the point size.
    pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

    /// Create a font spec.
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    /// Estimated height of one line of text in this font.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.size * Self::LINE_HEIGHT_FACTOR
    }

    /// Same weight at a different size.
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt {}", self.size, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_display() {
        assert_eq!(FontWeight::MEDIUM.to_string(), "medium");
        assert_eq!(FontWeight(450).to_string(), "450");
    }

    #[test]
    fn font_line_height() {
        let font = FontSpec::new(10.0, FontWeight::REGULAR);
        assert!((font.line_height() - 12.0).abs() < f32::EPSILON);
        assert_eq!(font.with_size(13.0).weight, FontWeight::REGULAR);
        assert_eq!(font.to_string(), "10pt regular");
    }
}
