//! Loading appearance settings from TOML.
//!
//! A configuration file has two optional tables:
//!
//! ```toml
//! [group]
//! style = "grouped"
//! axis = "horizontal"
//! feedback = false
//!
//! [style]
//! accent = "#FF9500"
//! item_background = "#FFFFFF"
//! corner_radius = 10.0
//! item_height = 44.0
//! ```
//!
//! Colors are `#RRGGBB` or `#RRGGBBAA` hex strings. Unknown keys are rejected.

use std::path::Path;

use radio_lattice_core::logging::targets;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::style::{Axis, GroupStyle, StyleOverrides};
use crate::types::Color;

/// Group-level settings read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearanceConfig {
    /// Visual treatment; unknown names fall back to standard.
    pub style: GroupStyle,
    /// Layout direction; unknown names fall back to vertical.
    pub axis: Axis,
    /// Whether selection feedback should fire, if the file says.
    pub feedback: Option<bool>,
    /// Validated style overrides.
    pub overrides: StyleOverrides,
}

impl AppearanceConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text)?;
        let group = raw.group.unwrap_or_default();

        let overrides = match raw.style {
            Some(style) => style.into_overrides()?,
            None => StyleOverrides::default(),
        };
        overrides.validate()?;

        let config = Self {
            style: group.style.as_deref().map(GroupStyle::from_name).unwrap_or_default(),
            axis: group.axis.as_deref().map(Axis::from_name).unwrap_or_default(),
            feedback: group.feedback,
            overrides,
        };

        tracing::debug!(
            target: targets::CONFIG,
            style = %config.style,
            axis = %config.axis,
            overridden = !config.overrides.is_empty(),
            "parsed appearance configuration"
        );
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading appearance configuration");
        Self::from_toml_str(&text)
    }
}

impl StyleOverrides {
    /// Parse overrides from the `[style]` table of a TOML document.
    ///
    /// Other tables are parsed and checked, then ignored.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        AppearanceConfig::from_toml_str(text).map(|config| config.overrides)
    }

    /// Load overrides from the `[style]` table of a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        AppearanceConfig::load_toml(path).map(|config| config.overrides)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    group: Option<RawGroup>,
    style: Option<RawStyle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroup {
    style: Option<String>,
    axis: Option<String>,
    feedback: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStyle {
    accent: Option<String>,
    selected_title: Option<String>,
    unselected_title: Option<String>,
    selected_indicator: Option<String>,
    unselected_indicator: Option<String>,
    subtitle: Option<String>,
    detail: Option<String>,
    item_background: Option<String>,
    separator: Option<String>,

    title_font_size: Option<f32>,
    subtitle_font_size: Option<f32>,
    detail_font_size: Option<f32>,

    corner_radius: Option<f32>,
    item_height: Option<f32>,
    subtitle_offset: Option<f32>,
    separator_offset: Option<f32>,
    separator_visible: Option<bool>,
    indicator_ring_width: Option<f32>,
    indicator_size: Option<f32>,
    indicator_inset: Option<f32>,
    spacing: Option<f32>,
}

impl RawStyle {
    fn into_overrides(self) -> Result<StyleOverrides> {
        Ok(StyleOverrides {
            accent: color("accent", self.accent)?,
            selected_title_color: color("selected_title", self.selected_title)?,
            unselected_title_color: color("unselected_title", self.unselected_title)?,
            selected_indicator_color: color("selected_indicator", self.selected_indicator)?,
            unselected_indicator_color: color("unselected_indicator", self.unselected_indicator)?,
            subtitle_color: color("subtitle", self.subtitle)?,
            detail_color: color("detail", self.detail)?,
            item_background_color: color("item_background", self.item_background)?,
            separator_color: color("separator", self.separator)?,
            title_font_size: self.title_font_size,
            subtitle_font_size: self.subtitle_font_size,
            detail_font_size: self.detail_font_size,
            corner_radius: self.corner_radius,
            item_height: self.item_height,
            subtitle_offset: self.subtitle_offset,
            separator_offset: self.separator_offset,
            separator_visible: self.separator_visible,
            indicator_ring_width: self.indicator_ring_width,
            indicator_size: self.indicator_size,
            indicator_inset: self.indicator_inset,
            spacing: self.spacing,
        })
    }
}

fn color(property: &str, value: Option<String>) -> Result<Option<Color>> {
    value
        .map(|hex| {
            Color::from_hex(&hex).ok_or_else(|| {
                Error::invalid_value(property, format!("'{hex}' is not a #RRGGBB or #RRGGBBAA color"))
            })
        })
        .transpose()
}
