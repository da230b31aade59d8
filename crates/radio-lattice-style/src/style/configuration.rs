//! Resolved configuration with all presentation values concrete.

use super::kinds::{Axis, Distribution, GroupStyle};
use crate::types::{Color, FontSpec};

/// Fully resolved presentation values for one `(style, axis)` pair.
///
/// This is what renderers consume. Every value is concrete; nothing here
/// is inherited or looked up later. Produced by
/// [`StylePolicy::resolve`](crate::resolve::StylePolicy::resolve).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfiguration {
    // === Inputs ===
    /// The style this configuration was resolved for.
    pub style: GroupStyle,
    /// The axis this configuration was resolved for.
    pub axis: Axis,

    // === Colors ===
    /// Title color of the selected item.
    pub selected_title_color: Color,
    /// Title color of unselected items.
    pub unselected_title_color: Color,
    /// Ring and dot color of the selected indicator.
    pub selected_indicator_color: Color,
    /// Ring color of unselected indicators.
    pub unselected_indicator_color: Color,
    /// Subtitle text color.
    pub subtitle_color: Color,
    /// Detail text color.
    pub detail_color: Color,
    /// Fill behind each row.
    pub item_background_color: Color,
    /// Hairline separator color.
    pub separator_color: Color,

    // === Typography ===
    /// Title font.
    pub title_font: FontSpec,
    /// Subtitle font.
    pub subtitle_font: FontSpec,
    /// Detail font.
    pub detail_font: FontSpec,

    // === Row metrics ===
    /// Corner radius of the row background.
    pub corner_radius: f32,
    /// Height of the indicator + title row.
    pub item_height: f32,
    /// Gap between the title row and the subtitle.
    pub subtitle_offset: f32,
    /// Gap between the lowest row content and the separator.
    pub separator_offset: f32,
    /// Separator line thickness.
    pub separator_thickness: f32,
    /// Whether separators are drawn at all.
    pub separator_visible: bool,
    /// Horizontal inset of row content from the row edges.
    pub content_inset: f32,
    /// Gap between the indicator and the title.
    pub title_spacing: f32,

    // === Indicator ===
    /// Stroke width of the indicator ring.
    pub indicator_ring_width: f32,
    /// Outer diameter of the indicator ring.
    pub indicator_size: f32,
    /// Inset of the selected dot from the ring's outer edge.
    pub indicator_inset: f32,

    // === Group ===
    /// Gap between adjacent items.
    pub spacing: f32,
    /// How items share the main axis.
    pub distribution: Distribution,
}

impl StyleConfiguration {
    /// Diameter of the filled dot shown inside a selected indicator.
    #[inline]
    pub fn indicator_dot_size(&self) -> f32 {
        (self.indicator_size - self.indicator_inset * 2.0).max(0.0)
    }

    /// Title color for an item in the given selection state.
    #[inline]
    pub fn title_color(&self, selected: bool) -> Color {
        if selected {
            self.selected_title_color
        } else {
            self.unselected_title_color
        }
    }

    /// Indicator ring color for an item in the given selection state.
    #[inline]
    pub fn indicator_color(&self, selected: bool) -> Color {
        if selected {
            self.selected_indicator_color
        } else {
            self.unselected_indicator_color
        }
    }

    /// Whether rows have a rounded, filled background.
    #[inline]
    pub fn has_card_background(&self) -> bool {
        !self.item_background_color.is_transparent()
    }
}

#[cfg(test)]
mod tests {
    use crate::resolve::resolve_style;
    use crate::style::{Axis, GroupStyle};

    #[test]
    fn dot_size_from_inset() {
        let config = resolve_style(GroupStyle::Standard, Axis::Vertical);
        assert_eq!(config.indicator_dot_size(), 12.0);
    }

    #[test]
    fn dot_size_never_negative() {
        let mut config = resolve_style(GroupStyle::Standard, Axis::Vertical);
        config.indicator_inset = 20.0;
        assert_eq!(config.indicator_dot_size(), 0.0);
    }

    #[test]
    fn selection_dependent_colors() {
        let config = resolve_style(GroupStyle::Grouped, Axis::Vertical);
        assert_eq!(config.title_color(true), config.selected_title_color);
        assert_eq!(config.title_color(false), config.unselected_title_color);
        assert_eq!(config.indicator_color(true), config.selected_indicator_color);
        assert_eq!(config.indicator_color(false), config.unselected_indicator_color);
        assert!(config.has_card_background());
    }
}
