//! Host-supplied adjustments applied on top of a resolved configuration.

use super::configuration::StyleConfiguration;
use crate::error::{Error, Result};
use crate::resolve::metrics;
use crate::types::Color;

/// Explicit per-field overrides of a [`StyleConfiguration`].
///
/// Every `None` field leaves the resolved value alone. Overrides are applied
/// once, at resolve time, to the whole configuration.
///
/// # Example
///
/// ```
/// use radio_lattice_style::prelude::*;
///
/// let overrides = StyleOverrides::new()
///     .accent(Color::from_rgb8(0xFF, 0x95, 0x00))
///     .item_height(44.0);
///
/// let policy = StylePolicy::default().with_overrides(overrides).unwrap();
/// let config = policy.resolve(GroupStyle::Grouped, Axis::Vertical);
/// assert_eq!(config.item_height, 44.0);
/// assert_eq!(config.selected_title_color, Color::from_rgb8(0xFF, 0x95, 0x00));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    // === Colors ===
    /// Sets both the selected title and the selected indicator color.
    pub accent: Option<Color>,
    pub selected_title_color: Option<Color>,
    pub unselected_title_color: Option<Color>,
    pub selected_indicator_color: Option<Color>,
    pub unselected_indicator_color: Option<Color>,
    pub subtitle_color: Option<Color>,
    pub detail_color: Option<Color>,
    pub item_background_color: Option<Color>,
    pub separator_color: Option<Color>,

    // === Typography ===
    pub title_font_size: Option<f32>,
    pub subtitle_font_size: Option<f32>,
    pub detail_font_size: Option<f32>,

    // === Metrics ===
    pub corner_radius: Option<f32>,
    pub item_height: Option<f32>,
    pub subtitle_offset: Option<f32>,
    pub separator_offset: Option<f32>,
    /// Hides separators even where the style would draw them.
    ///
    /// Setting this to `true` cannot bring separators back on a horizontal
    /// axis.
    pub separator_visible: Option<bool>,
    pub indicator_ring_width: Option<f32>,
    pub indicator_size: Option<f32>,
    pub indicator_inset: Option<f32>,
    pub spacing: Option<f32>,
}

impl StyleOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    // === Colors ===

    /// Override the accent (selected title and indicator).
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    /// Override the selected title color only.
    pub fn selected_title_color(mut self, color: Color) -> Self {
        self.selected_title_color = Some(color);
        self
    }

    /// Override the unselected title color.
    pub fn unselected_title_color(mut self, color: Color) -> Self {
        self.unselected_title_color = Some(color);
        self
    }

    /// Override the selected indicator color only.
    pub fn selected_indicator_color(mut self, color: Color) -> Self {
        self.selected_indicator_color = Some(color);
        self
    }

    /// Override the unselected indicator ring color.
    pub fn unselected_indicator_color(mut self, color: Color) -> Self {
        self.unselected_indicator_color = Some(color);
        self
    }

    /// Override the subtitle color.
    pub fn subtitle_color(mut self, color: Color) -> Self {
        self.subtitle_color = Some(color);
        self
    }

    /// Override the detail text color.
    pub fn detail_color(mut self, color: Color) -> Self {
        self.detail_color = Some(color);
        self
    }

    /// Override the row background.
    pub fn item_background_color(mut self, color: Color) -> Self {
        self.item_background_color = Some(color);
        self
    }

    /// Override the separator color.
    pub fn separator_color(mut self, color: Color) -> Self {
        self.separator_color = Some(color);
        self
    }

    // === Typography ===

    /// Override the title point size, keeping its weight.
    pub fn title_font_size(mut self, size: f32) -> Self {
        self.title_font_size = Some(size);
        self
    }

    /// Override the subtitle point size, keeping its weight.
    pub fn subtitle_font_size(mut self, size: f32) -> Self {
        self.subtitle_font_size = Some(size);
        self
    }

    /// Override the detail point size, keeping its weight.
    pub fn detail_font_size(mut self, size: f32) -> Self {
        self.detail_font_size = Some(size);
        self
    }

    // === Metrics ===

    /// Override the corner radius.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Override the title row height.
    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = Some(height);
        self
    }

    /// Override the subtitle offset.
    pub fn subtitle_offset(mut self, offset: f32) -> Self {
        self.subtitle_offset = Some(offset);
        self
    }

    /// Override the gap between row content and the separator.
    pub fn separator_offset(mut self, offset: f32) -> Self {
        self.separator_offset = Some(offset);
        self
    }

    /// Show or hide separators.
    pub fn separator_visible(mut self, visible: bool) -> Self {
        self.separator_visible = Some(visible);
        self
    }

    /// Override the gap between items.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Override the indicator geometry.
    pub fn indicator(mut self, size: f32, ring_width: f32, inset: f32) -> Self {
        self.indicator_size = Some(size);
        self.indicator_ring_width = Some(ring_width);
        self.indicator_inset = Some(inset);
        self
    }

    /// Combine two sets of overrides; fields set in `other` win.
    pub fn merge(&self, other: &StyleOverrides) -> StyleOverrides {
        macro_rules! pick {
            ($($field:ident),* $(,)?) => {
                StyleOverrides {
                    $($field: other.$field.or(self.$field),)*
                }
            };
        }

        pick!(
            accent,
            selected_title_color,
            unselected_title_color,
            selected_indicator_color,
            unselected_indicator_color,
            subtitle_color,
            detail_color,
            item_background_color,
            separator_color,
            title_font_size,
            subtitle_font_size,
            detail_font_size,
            corner_radius,
            item_height,
            subtitle_offset,
            separator_offset,
            separator_visible,
            indicator_ring_width,
            indicator_size,
            indicator_inset,
            spacing,
        )
    }

    /// Check every numeric override.
    ///
    /// Metrics must be finite and non-negative and font sizes positive.
    /// The indicator inset must leave room for the selected dot; when only
    /// one of size and inset is overridden, the other is the built-in metric.
    pub fn validate(&self) -> Result<()> {
        let metrics = [
            ("corner_radius", self.corner_radius),
            ("item_height", self.item_height),
            ("subtitle_offset", self.subtitle_offset),
            ("separator_offset", self.separator_offset),
            ("indicator_ring_width", self.indicator_ring_width),
            ("indicator_size", self.indicator_size),
            ("indicator_inset", self.indicator_inset),
            ("spacing", self.spacing),
        ];
        for (property, value) in metrics {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::invalid_value(
                        property,
                        format!("expected a finite, non-negative number, got {value}"),
                    ));
                }
            }
        }

        let font_sizes = [
            ("title_font_size", self.title_font_size),
            ("subtitle_font_size", self.subtitle_font_size),
            ("detail_font_size", self.detail_font_size),
        ];
        for (property, value) in font_sizes {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(Error::invalid_value(
                        property,
                        format!("expected a positive font size, got {value}"),
                    ));
                }
            }
        }

        let size = self.indicator_size.unwrap_or(metrics::INDICATOR_SIZE);
        let inset = self.indicator_inset.unwrap_or(metrics::INDICATOR_INSET);
        if inset * 2.0 >= size {
            let property = if self.indicator_inset.is_some() {
                "indicator_inset"
            } else {
                "indicator_size"
            };
            return Err(Error::invalid_value(
                property,
                format!("inset {inset} leaves no room for the dot in a {size} indicator"),
            ));
        }

        Ok(())
    }

    /// Write every overridden field into `config`.
    pub fn apply_to(&self, config: &mut StyleConfiguration) {
        if let Some(accent) = self.accent {
            config.selected_title_color = accent;
            config.selected_indicator_color = accent;
        }

        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    config.$field = value;
                })*
            };
        }

        set!(
            selected_title_color,
            unselected_title_color,
            selected_indicator_color,
            unselected_indicator_color,
            subtitle_color,
            detail_color,
            item_background_color,
            separator_color,
            corner_radius,
            item_height,
            subtitle_offset,
            separator_offset,
            indicator_ring_width,
            indicator_size,
            indicator_inset,
            spacing,
        );

        if let Some(size) = self.title_font_size {
            config.title_font = config.title_font.with_size(size);
        }
        if let Some(size) = self.subtitle_font_size {
            config.subtitle_font = config.subtitle_font.with_size(size);
        }
        if let Some(size) = self.detail_font_size {
            config.detail_font = config.detail_font.with_size(size);
        }

        // Overrides may hide separators but never show them where the policy suppressed them.
        if let Some(visible) = self.separator_visible {
            config.separator_visible &= visible;
        }
    }
}
