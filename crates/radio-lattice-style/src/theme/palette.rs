//! Color palette definitions.

use crate::types::Color;

/// The colors a radio group draws with.
///
/// The style policy picks entries out of a palette; it never invents colors
/// of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioPalette {
    /// Accent shared by the selected title and the selected indicator.
    pub accent: Color,

    /// Primary text color, used for unselected titles.
    pub label: Color,
    /// Secondary text color, used for subtitles and details.
    pub secondary_label: Color,
    /// Faint outline color, used for unselected indicator rings.
    pub quaternary_label: Color,

    /// Screen background behind the group.
    pub background: Color,
    /// Card fill for grouped rows.
    pub card: Color,

    /// Hairline separator color.
    pub separator: Color,
}

impl RadioPalette {
    /// Create the light palette.
    pub const fn light() -> Self {
        Self {
            accent: Color::from_rgb8(0x00, 0x7A, 0xFF),

            label: Color::from_rgb8(0x00, 0x00, 0x00),
            secondary_label: Color::from_rgba8(0x3C, 0x3C, 0x43, 0x99),
            quaternary_label: Color::from_rgba8(0x3C, 0x3C, 0x43, 0x2E),

            background: Color::from_rgb8(0xF2, 0xF2, 0xF7),
            card: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            separator: Color::from_rgba8(0x3C, 0x3C, 0x43, 0x4A),
        }
    }

    /// Create the dark palette.
    pub const fn dark() -> Self {
        Self {
            // Accent is slightly brighter for dark backgrounds
            accent: Color::from_rgb8(0x0A, 0x84, 0xFF),

            label: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            secondary_label: Color::from_rgba8(0xEB, 0xEB, 0xF5, 0x99),
            quaternary_label: Color::from_rgba8(0xEB, 0xEB, 0xF5, 0x2E),

            background: Color::from_rgb8(0x00, 0x00, 0x00),
            card: Color::from_rgb8(0x1C, 0x1C, 0x1E),

            separator: Color::from_rgba8(0x54, 0x54, 0x58, 0x99),
        }
    }
}

impl Default for RadioPalette {
    fn default() -> Self {
        Self::light()
    }
}
