//! Per-item visual state.

use radio_lattice_style::style::StyleConfiguration;
use radio_lattice_style::types::Color;

/// Colors of one item given the current selection.
///
/// This is the only part of a row's look that depends on selection; the
/// geometry comes from [`ItemLayout`](radio_lattice_style::resolve::ItemLayout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemAppearance {
    /// Position of the item in its group.
    pub index: usize,
    /// Whether this item is the selected one.
    pub selected: bool,
    /// Title text color.
    pub title_color: Color,
    /// Indicator ring color.
    pub ring_color: Color,
    /// Fill of the indicator's inner dot; `None` when unselected.
    pub dot_color: Option<Color>,
    /// Subtitle text color.
    pub subtitle_color: Color,
    /// Detail text color.
    pub detail_color: Color,
    /// Row background fill.
    pub background_color: Color,
    /// Separator color, if a separator is drawn under this item.
    pub separator_color: Option<Color>,
}

impl ItemAppearance {
    /// Compute the appearance of item `index` when `selection` is the
    /// current selection (`-1` for none).
    pub fn resolve(config: &StyleConfiguration, index: usize, selection: i32) -> Self {
        let selected = usize::try_from(selection).is_ok_and(|s| s == index);
        let indicator = config.indicator_color(selected);

        Self {
            index,
            selected,
            title_color: config.title_color(selected),
            ring_color: indicator,
            dot_color: selected.then_some(indicator),
            subtitle_color: config.subtitle_color,
            detail_color: config.detail_color,
            background_color: config.item_background_color,
            separator_color: config.separator_visible.then_some(config.separator_color),
        }
    }

    /// Compute the appearances of `count` items at once.
    pub fn resolve_all(config: &StyleConfiguration, count: usize, selection: i32) -> Vec<Self> {
        (0..count)
            .map(|index| Self::resolve(config, index, selection))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use radio_lattice_style::prelude::*;

    use super::*;

    #[test]
    fn test_exactly_one_filled_indicator() {
        let config = resolve_style(GroupStyle::Grouped, Axis::Vertical);
        let appearances = ItemAppearance::resolve_all(&config, 4, 2);

        let filled: Vec<usize> = appearances
            .iter()
            .filter(|a| a.dot_color.is_some())
            .map(|a| a.index)
            .collect();
        assert_eq!(filled, vec![2]);
        assert_eq!(appearances[2].title_color, config.selected_title_color);
        assert_eq!(appearances[0].title_color, config.unselected_title_color);
        assert_eq!(appearances[0].ring_color, config.unselected_indicator_color);
    }

    #[test]
    fn test_no_selection_no_fill() {
        let config = resolve_style(GroupStyle::Standard, Axis::Vertical);
        let appearances = ItemAppearance::resolve_all(&config, 3, -1);
        assert!(appearances.iter().all(|a| a.dot_color.is_none() && !a.selected));
    }

    #[test]
    fn test_separator_follows_configuration() {
        let vertical = resolve_style(GroupStyle::Standard, Axis::Vertical);
        let horizontal = resolve_style(GroupStyle::Standard, Axis::Horizontal);

        assert_eq!(
            ItemAppearance::resolve(&vertical, 0, -1).separator_color,
            Some(vertical.separator_color)
        );
        assert_eq!(ItemAppearance::resolve(&horizontal, 0, -1).separator_color, None);
    }
}
