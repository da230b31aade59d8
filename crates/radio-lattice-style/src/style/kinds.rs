//! The inputs of the style policy.

use std::fmt;

use radio_lattice_core::logging::targets;

/// Visual treatment of a radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupStyle {
    /// Flat list rows on the screen background, separated by hairlines.
    #[default]
    Standard,
    /// Self-contained rounded cards.
    Grouped,
}

impl GroupStyle {
    /// Parse a style name.
    ///
    /// Names are matched case-insensitively. Unknown names resolve to
    /// [`GroupStyle::Standard`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "grouped" => Self::Grouped,
            "standard" => Self::Standard,
            other => {
                tracing::debug!(
                    target: targets::STYLE,
                    style = other,
                    "unknown group style, falling back to standard"
                );
                Self::Standard
            }
        }
    }

    /// The canonical name of this style.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Grouped => "grouped",
        }
    }
}

impl fmt::Display for GroupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout direction of a radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Rows stacked top to bottom.
    #[default]
    Vertical,
    /// Items side by side.
    Horizontal,
}

impl Axis {
    /// Parse an axis name. Unknown names resolve to [`Axis::Vertical`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            other => {
                tracing::debug!(
                    target: targets::STYLE,
                    axis = other,
                    "unknown axis, falling back to vertical"
                );
                Self::Vertical
            }
        }
    }

    /// The canonical name of this axis.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How items share the length of the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distribution {
    /// Items keep their natural length.
    #[default]
    Fill,
    /// Items get equal lengths.
    FillEqually,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names_round_trip() {
        for style in [GroupStyle::Standard, GroupStyle::Grouped] {
            assert_eq!(GroupStyle::from_name(style.name()), style);
        }
        assert_eq!(GroupStyle::from_name(" Grouped "), GroupStyle::Grouped);
    }

    #[test]
    fn unknown_style_falls_back_to_standard() {
        assert_eq!(GroupStyle::from_name("inset-grouped"), GroupStyle::Standard);
        assert_eq!(GroupStyle::from_name(""), GroupStyle::Standard);
    }

    #[test]
    fn unknown_axis_falls_back_to_vertical() {
        assert_eq!(Axis::from_name("HORIZONTAL"), Axis::Horizontal);
        assert_eq!(Axis::from_name("diagonal"), Axis::Vertical);
        assert_eq!(Axis::default(), Axis::Vertical);
    }
}
