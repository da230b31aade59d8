//! Per-row geometry derived from a configuration and an item's content.
//!
//! A row is laid out top to bottom as:
//!
//! ```text
//! +-------------------------------------------+  0
//! | (o)  Title                         Detail |  item_height (content row)
//! +-------------------------------------------+
//!        subtitle_offset
//!      Subtitle text, possibly several lines     subtitle height
//!        separator_offset (standard only)
//! ------------------------------------------     separator (hairline)
//! ```
//!
//! Horizontal positions are measured from the row's leading edge so the
//! result is independent of the row width.

use crate::style::{GroupStyle, StyleConfiguration};

/// Which optional texts an item carries.
///
/// Content shape affects geometry only, never colors or fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContentShape {
    /// The item has a subtitle under the title row.
    pub has_subtitle: bool,
    /// The item has a trailing detail text on the title row.
    pub has_detail: bool,
}

impl ContentShape {
    /// A title-only item.
    pub const TITLE_ONLY: Self = Self {
        has_subtitle: false,
        has_detail: false,
    };

    /// Create a content shape.
    pub const fn new(has_subtitle: bool, has_detail: bool) -> Self {
        Self {
            has_subtitle,
            has_detail,
        }
    }
}

/// Resolved geometry of one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Height of the indicator + title row (the card, in grouped style).
    pub content_height: f32,
    /// Leading edge of the indicator ring.
    pub indicator_x: f32,
    /// Vertical center of the indicator and the title.
    pub center_y: f32,
    /// Leading edge of the title.
    pub title_x: f32,
    /// Inset of the detail text from the row's trailing edge, if any.
    pub detail_trailing_inset: Option<f32>,
    /// Leading edge of the subtitle.
    pub subtitle_x: f32,
    /// Top of the subtitle, if any.
    pub subtitle_top: Option<f32>,
    /// Height reserved for the subtitle (zero without one).
    pub subtitle_height: f32,
    /// Top of the separator line, if one is drawn.
    pub separator_top: Option<f32>,
    /// Leading edge of the separator line.
    pub separator_x: f32,
    /// Total height of the row including any separator gap.
    pub row_height: f32,
}

impl ItemLayout {
    /// Lay out a row assuming a single-line subtitle.
    pub fn resolve(config: &StyleConfiguration, shape: ContentShape) -> Self {
        Self::resolve_with_subtitle_height(config, shape, config.subtitle_font.line_height())
    }

    /// Lay out a row with a measured subtitle height.
    ///
    /// Renderers that wrap long subtitles measure the wrapped text and pass
    /// its height here. The height is ignored when the item has no subtitle.
    pub fn resolve_with_subtitle_height(
        config: &StyleConfiguration,
        shape: ContentShape,
        subtitle_height: f32,
    ) -> Self {
        let content_height = config.item_height;
        let indicator_x = config.content_inset;
        let title_x = indicator_x + config.indicator_size + config.title_spacing;

        // Standard subtitles align with the title, grouped ones with the indicator.
        let subtitle_x = match config.style {
            GroupStyle::Standard => title_x,
            GroupStyle::Grouped => indicator_x,
        };

        let (subtitle_top, subtitle_height) = if shape.has_subtitle {
            let height = subtitle_height.max(0.0);
            (Some(content_height + config.subtitle_offset), height)
        } else {
            (None, 0.0)
        };

        let content_bottom = match subtitle_top {
            Some(top) => top + subtitle_height,
            None => content_height,
        };

        // The separator gap belongs to the standard style even when the line is hidden.
        let row_height = match config.style {
            GroupStyle::Standard => content_bottom + config.separator_offset,
            GroupStyle::Grouped => content_bottom,
        };

        let separator_top = config
            .separator_visible
            .then(|| row_height - config.separator_thickness);

        Self {
            content_height,
            indicator_x,
            center_y: content_height / 2.0,
            title_x,
            detail_trailing_inset: shape.has_detail.then_some(config.content_inset),
            subtitle_x,
            subtitle_top,
            subtitle_height,
            separator_top,
            separator_x: title_x,
            row_height,
        }
    }
}

/// Lay out one row of `config` for an item of the given shape.
///
/// Shorthand for [`ItemLayout::resolve`].
pub fn resolve_item_layout(config: &StyleConfiguration, shape: ContentShape) -> ItemLayout {
    ItemLayout::resolve(config, shape)
}
