//! The style policy: `(style, axis)` in, [`StyleConfiguration`] out.

use radio_lattice_core::PerfSpan;
use radio_lattice_core::logging::{span_names, targets};

use crate::error::Result;
use crate::style::{Axis, Distribution, GroupStyle, StyleConfiguration, StyleOverrides};
use crate::theme::RadioPalette;
use crate::types::{Color, FontSpec, FontWeight};

/// Metrics shared by every style.
pub mod metrics {
    /// Stroke width of the indicator ring.
    pub const INDICATOR_RING_WIDTH: f32 = 2.0;
    /// Outer diameter of the indicator ring.
    pub const INDICATOR_SIZE: f32 = 22.0;
    /// Inset of the selected dot from the ring's outer edge.
    pub const INDICATOR_INSET: f32 = 5.0;
    /// Gap between adjacent items on either axis.
    pub const SPACING: f32 = 15.0;
    /// Gap between the indicator and the title.
    pub const TITLE_SPACING: f32 = 12.0;
    /// Hairline separator thickness.
    pub const SEPARATOR_THICKNESS: f32 = 0.5;
    /// Gap between the lowest row content and the separator.
    pub const SEPARATOR_OFFSET: f32 = 8.0;

    /// Title point size.
    pub const TITLE_FONT_SIZE: f32 = 16.0;
    /// Subtitle point size.
    pub const SUBTITLE_FONT_SIZE: f32 = 13.0;
    /// Detail point size.
    pub const DETAIL_FONT_SIZE: f32 = 16.0;

    /// Row height of the standard style.
    pub const STANDARD_ITEM_HEIGHT: f32 = 30.0;

    /// Row height of the grouped style.
    pub const GROUPED_ITEM_HEIGHT: f32 = 50.0;
    /// Card corner radius of the grouped style.
    pub const GROUPED_CORNER_RADIUS: f32 = 14.0;
    /// Subtitle offset of the grouped style.
    pub const GROUPED_SUBTITLE_OFFSET: f32 = 8.0;
    /// Content inset from the card edges in the grouped style.
    pub const GROUPED_CONTENT_INSET: f32 = 15.0;
}

/// Resolves presentation values from a palette and optional overrides.
///
/// Resolution is a pure function of the policy and its `(style, axis)`
/// arguments: resolving the same pair twice yields equal configurations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePolicy {
    palette: RadioPalette,
    overrides: StyleOverrides,
}

impl StylePolicy {
    /// Create a policy over the given palette with no overrides.
    pub fn new(palette: RadioPalette) -> Self {
        Self {
            palette,
            overrides: StyleOverrides::default(),
        }
    }

    /// Attach overrides, validating them first.
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Result<Self> {
        overrides.validate()?;
        self.overrides = overrides;
        Ok(self)
    }

    /// Swap the palette, keeping any overrides.
    pub fn with_palette(mut self, palette: RadioPalette) -> Self {
        self.palette = palette;
        self
    }

    /// The palette this policy draws from.
    pub fn palette(&self) -> &RadioPalette {
        &self.palette
    }

    /// The overrides applied after the base tables.
    pub fn overrides(&self) -> &StyleOverrides {
        &self.overrides
    }

    /// Resolve the configuration for a style and axis.
    pub fn resolve(&self, style: GroupStyle, axis: Axis) -> StyleConfiguration {
        let _span = PerfSpan::new(span_names::STYLE_RESOLVE);

        let mut config = self.base(style, axis);
        self.overrides.apply_to(&mut config);

        tracing::trace!(
            target: targets::STYLE,
            %style,
            %axis,
            overridden = !self.overrides.is_empty(),
            "resolved style configuration"
        );
        config
    }

    /// The tables before overrides.
    fn base(&self, style: GroupStyle, axis: Axis) -> StyleConfiguration {
        let palette = &self.palette;

        let (item_background_color, corner_radius, item_height, subtitle_offset, content_inset) =
            match style {
                GroupStyle::Grouped => (
                    palette.card,
                    metrics::GROUPED_CORNER_RADIUS,
                    metrics::GROUPED_ITEM_HEIGHT,
                    metrics::GROUPED_SUBTITLE_OFFSET,
                    metrics::GROUPED_CONTENT_INSET,
                ),
                GroupStyle::Standard => (
                    Color::TRANSPARENT,
                    0.0,
                    metrics::STANDARD_ITEM_HEIGHT,
                    0.0,
                    0.0,
                ),
            };

        // Cards are self-contained and horizontal rows never draw separators.
        let separator_visible = style == GroupStyle::Standard && axis == Axis::Vertical;

        let distribution = match axis {
            Axis::Horizontal => Distribution::FillEqually,
            Axis::Vertical => Distribution::Fill,
        };

        StyleConfiguration {
            style,
            axis,

            selected_title_color: palette.accent,
            unselected_title_color: palette.label,
            selected_indicator_color: palette.accent,
            unselected_indicator_color: palette.quaternary_label,
            subtitle_color: palette.secondary_label,
            detail_color: palette.secondary_label,
            item_background_color,
            separator_color: palette.separator,

            title_font: FontSpec::new(metrics::TITLE_FONT_SIZE, FontWeight::MEDIUM),
            subtitle_font: FontSpec::new(metrics::SUBTITLE_FONT_SIZE, FontWeight::REGULAR),
            detail_font: FontSpec::new(metrics::DETAIL_FONT_SIZE, FontWeight::REGULAR),

            corner_radius,
            item_height,
            subtitle_offset,
            separator_offset: metrics::SEPARATOR_OFFSET,
            separator_thickness: metrics::SEPARATOR_THICKNESS,
            separator_visible,
            content_inset,
            title_spacing: metrics::TITLE_SPACING,

            indicator_ring_width: metrics::INDICATOR_RING_WIDTH,
            indicator_size: metrics::INDICATOR_SIZE,
            indicator_inset: metrics::INDICATOR_INSET,

            spacing: metrics::SPACING,
            distribution,
        }
    }
}

/// Resolve a configuration with the default palette and no overrides.
///
/// # Example
///
/// ```
/// use radio_lattice_style::prelude::*;
///
/// let config = resolve_style(GroupStyle::Grouped, Axis::Vertical);
/// assert_eq!(config.item_height, 50.0);
/// assert_eq!(config.corner_radius, 14.0);
/// assert!(!config.separator_visible);
/// ```
pub fn resolve_style(style: GroupStyle, axis: Axis) -> StyleConfiguration {
    StylePolicy::default().resolve(style, axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(GroupStyle, Axis); 4] = [
        (GroupStyle::Standard, Axis::Vertical),
        (GroupStyle::Standard, Axis::Horizontal),
        (GroupStyle::Grouped, Axis::Vertical),
        (GroupStyle::Grouped, Axis::Horizontal),
    ];

    #[test]
    fn resolve_is_deterministic() {
        for (style, axis) in ALL {
            assert_eq!(resolve_style(style, axis), resolve_style(style, axis));
        }
    }

    #[test]
    fn grouped_vertical_metrics() {
        let config = resolve_style(GroupStyle::Grouped, Axis::Vertical);
        assert_eq!(config.item_height, 50.0);
        assert_eq!(config.corner_radius, 14.0);
        assert_eq!(config.subtitle_offset, 8.0);
        assert_eq!(config.content_inset, 15.0);
        assert!(!config.separator_visible);
        assert_ne!(config.item_background_color, RadioPalette::light().background);
        assert!(!config.item_background_color.is_transparent());
    }

    #[test]
    fn standard_vertical_metrics() {
        let config = resolve_style(GroupStyle::Standard, Axis::Vertical);
        assert_eq!(config.item_height, 30.0);
        assert_eq!(config.corner_radius, 0.0);
        assert_eq!(config.subtitle_offset, 0.0);
        assert_eq!(config.separator_offset, 8.0);
        assert_eq!(config.separator_thickness, 0.5);
        assert!(config.separator_visible);
        assert!(config.item_background_color.is_transparent());
        assert_eq!(config.distribution, Distribution::Fill);
    }

    #[test]
    fn horizontal_suppresses_separator() {
        for style in [GroupStyle::Standard, GroupStyle::Grouped] {
            let config = resolve_style(style, Axis::Horizontal);
            assert!(!config.separator_visible, "{style} horizontal");
            assert_eq!(config.distribution, Distribution::FillEqually);
            assert_eq!(config.spacing, 15.0);
        }
    }

    #[test]
    fn shared_accent_and_muted_colors() {
        for (style, axis) in ALL {
            let config = resolve_style(style, axis);
            assert_eq!(config.selected_title_color, config.selected_indicator_color);
            assert_ne!(config.unselected_title_color, config.selected_title_color);
            assert_ne!(config.unselected_indicator_color, config.selected_indicator_color);
            assert_ne!(config.separator_color, config.unselected_title_color);
        }
    }

    #[test]
    fn indicator_and_fonts_are_style_independent() {
        for (style, axis) in ALL {
            let config = resolve_style(style, axis);
            assert_eq!(config.indicator_ring_width, 2.0);
            assert_eq!(config.indicator_size, 22.0);
            assert_eq!(config.indicator_inset, 5.0);
            assert_eq!(config.title_font.weight, FontWeight::MEDIUM);
            assert_eq!(config.subtitle_font.weight, FontWeight::REGULAR);
            assert!(config.title_font.size > config.subtitle_font.size);
        }
    }

    #[test]
    fn policy_applies_overrides() {
        let policy = StylePolicy::new(RadioPalette::dark())
            .with_overrides(StyleOverrides::new().item_height(60.0))
            .unwrap();
        let config = policy.resolve(GroupStyle::Standard, Axis::Vertical);
        assert_eq!(config.item_height, 60.0);
        assert_eq!(config.selected_title_color, RadioPalette::dark().accent);
    }

    #[test]
    fn policy_rejects_invalid_overrides() {
        let result = StylePolicy::default().with_overrides(StyleOverrides::new().corner_radius(-2.0));
        assert!(result.is_err());
    }

    #[test]
    fn policy_rejects_single_indicator_field_without_dot() {
        let inset_only = StyleOverrides {
            indicator_inset: Some(11.0),
            ..Default::default()
        };
        assert!(StylePolicy::default().with_overrides(inset_only).is_err());

        let size_only = StyleOverrides {
            indicator_size: Some(8.0),
            ..Default::default()
        };
        assert!(StylePolicy::default().with_overrides(size_only).is_err());

        let policy = StylePolicy::default()
            .with_overrides(StyleOverrides {
                indicator_inset: Some(7.0),
                ..Default::default()
            })
            .unwrap();
        for style in [GroupStyle::Standard, GroupStyle::Grouped] {
            let config = policy.resolve(style, Axis::Vertical);
            assert_eq!(config.indicator_dot_size(), 8.0);
        }
    }
}
