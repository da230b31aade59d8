//! RadioGroup implementation.
//!
//! This module provides [`RadioGroup`], a headless radio-button group: an
//! ordered list of items with exclusive selection and a resolved
//! presentation for one style and axis.
//!
//! # Example
//!
//! ```
//! use radio_lattice::prelude::*;
//!
//! let items = vec![
//!     RadioItem::new("Standard"),
//!     RadioItem::new("Express").with_subtitle("Arrives tomorrow"),
//!     RadioItem::new("Pickup").with_detail("Free"),
//! ];
//! let mut group = RadioGroup::new(items, GroupStyle::Grouped, Axis::Vertical)?;
//!
//! group.on_selection_changed(|index| println!("selected {index}"));
//!
//! assert!(group.select(1)?);
//! assert!(!group.select(1)?);
//! assert_eq!(group.selected_item().map(RadioItem::title), Some("Express"));
//! # Ok::<(), radio_lattice::Error>(())
//! ```
//!
//! # Presentation
//!
//! The group keeps a [`StyleCache`] and the configuration for its current
//! `(style, axis)`. Changing the style, the axis or the overrides
//! re-resolves the configuration; none of them touch the selection.

use radio_lattice_core::logging::targets;
use radio_lattice_core::{ConnectionId, Property, Signal, TreeFormatOptions};
use radio_lattice_style::config::AppearanceConfig;
use radio_lattice_style::resolve::{ItemLayout, StyleCache, StylePolicy};
use radio_lattice_style::style::{Axis, GroupStyle, StyleConfiguration, StyleOverrides};
use radio_lattice_style::theme::RadioPalette;

use crate::appearance::ItemAppearance;
use crate::controller::SelectionController;
use crate::debug::GroupTreeDebug;
use crate::error::{Error, Result};
use crate::item::RadioItem;
use crate::layout::GroupLayout;
use crate::render::{GroupRenderer, RowVisual};

/// A group of mutually exclusive items.
///
/// # Signals
///
/// - `selection_changed(i32)`: on every effective selection change
/// - `feedback(i32)`: alongside `selection_changed` while feedback is
///   enabled, for haptics or sounds
/// - `configuration_changed(())`: after the resolved configuration changes
pub struct RadioGroup {
    /// The items, fixed at construction.
    items: Vec<RadioItem>,

    /// Selection state.
    controller: SelectionController,

    /// Visual treatment.
    style: Property<GroupStyle>,

    /// Layout direction.
    axis: Property<Axis>,

    /// Resolved configurations per `(style, axis)`.
    styles: StyleCache,

    /// The configuration for the current style and axis.
    configuration: StyleConfiguration,

    /// Whether `feedback` fires on selection changes.
    feedback_enabled: bool,

    /// Signal emitted on each effective selection change while feedback is
    /// enabled. Parameter is the new index.
    pub feedback: Signal<i32>,

    /// Signal emitted after the resolved configuration changes.
    pub configuration_changed: Signal<()>,
}

impl RadioGroup {
    /// Create a group with nothing selected.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyItemList`] when `items` is empty.
    pub fn new(items: Vec<RadioItem>, style: GroupStyle, axis: Axis) -> Result<Self> {
        Self::with_policy(items, style, axis, StylePolicy::default())
    }

    /// Create a group resolving its presentation through `policy`.
    pub fn with_policy(
        items: Vec<RadioItem>,
        style: GroupStyle,
        axis: Axis,
        policy: StylePolicy,
    ) -> Result<Self> {
        if items.is_empty() {
            tracing::warn!(target: targets::SELECTION, "rejected radio group without items");
            return Err(Error::EmptyItemList);
        }

        let mut styles = StyleCache::new(policy);
        let configuration = styles.resolve(style, axis).clone();

        tracing::debug!(
            target: targets::SELECTION,
            items = items.len(),
            %style,
            %axis,
            "created radio group"
        );

        Ok(Self {
            controller: SelectionController::new(items.len()),
            items,
            style: Property::new(style),
            axis: Property::new(axis),
            styles,
            configuration,
            feedback_enabled: true,
            feedback: Signal::new(),
            configuration_changed: Signal::new(),
        })
    }

    /// Create a group from a loaded appearance configuration.
    ///
    /// The configuration supplies the style, the axis, the overrides and
    /// optionally the feedback flag.
    pub fn from_config(items: Vec<RadioItem>, config: &AppearanceConfig) -> Result<Self> {
        let policy = StylePolicy::default().with_overrides(config.overrides.clone())?;
        let group = Self::with_policy(items, config.style, config.axis, policy)?;
        Ok(match config.feedback {
            Some(enabled) => group.with_feedback(enabled),
            None => group,
        })
    }

    /// Set the initial selection using builder pattern.
    ///
    /// Nothing is emitted. `-1` keeps the group unselected.
    pub fn with_initial_selection(mut self, index: i32) -> Result<Self> {
        self.controller.set_silently(index)?;
        Ok(self)
    }

    /// Enable or disable selection feedback using builder pattern.
    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.feedback_enabled = enabled;
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Get the items in display order.
    pub fn items(&self) -> &[RadioItem] {
        &self.items
    }

    /// Get the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Get the item at `index`.
    pub fn item(&self, index: usize) -> Option<&RadioItem> {
        self.items.get(index)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select the item at `index`, or clear the selection with `-1`.
    ///
    /// Returns `Ok(true)` when the selection changed. Observers are notified
    /// synchronously before this returns.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] for any index other than `-1` or a valid
    /// position. The selection is left unchanged.
    pub fn select(&mut self, index: i32) -> Result<bool> {
        let changed = self.controller.select(index)?;
        if changed && self.feedback_enabled {
            self.feedback.emit(index);
        }
        Ok(changed)
    }

    /// Get the selected index, or `-1` if nothing is selected.
    pub fn current_selection(&self) -> i32 {
        self.controller.current_selection()
    }

    /// Check whether the item at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.controller.is_selected(index)
    }

    /// Get the selected item, if any.
    pub fn selected_item(&self) -> Option<&RadioItem> {
        self.controller
            .selected_position()
            .and_then(|index| self.items.get(index))
    }

    /// Register the host's selection observer, replacing any earlier one.
    pub fn on_selection_changed<F>(&mut self, observer: F) -> ConnectionId
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.controller.on_selection_changed(observer)
    }

    /// Get the selection-changed signal for additional listeners.
    pub fn selection_changed(&self) -> &Signal<i32> {
        &self.controller.selection_changed
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    /// Check whether selection feedback is enabled.
    pub fn feedback_enabled(&self) -> bool {
        self.feedback_enabled
    }

    /// Enable or disable selection feedback.
    pub fn set_feedback_enabled(&mut self, enabled: bool) {
        self.feedback_enabled = enabled;
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Get the visual treatment.
    pub fn style(&self) -> GroupStyle {
        self.style.get()
    }

    /// Set the visual treatment.
    pub fn set_style(&mut self, style: GroupStyle) {
        if self.style.set(style) {
            self.refresh_configuration();
        }
    }

    /// Get the layout direction.
    pub fn axis(&self) -> Axis {
        self.axis.get()
    }

    /// Set the layout direction.
    pub fn set_axis(&mut self, axis: Axis) {
        if self.axis.set(axis) {
            self.refresh_configuration();
        }
    }

    /// Replace the style overrides.
    ///
    /// # Errors
    ///
    /// [`Error::Style`] when an override is out of range; the current
    /// presentation is kept.
    pub fn set_overrides(&mut self, overrides: StyleOverrides) -> Result<()> {
        self.styles.set_overrides(overrides)?;
        self.refresh_configuration();
        Ok(())
    }

    /// Layer more overrides on top of the current ones.
    ///
    /// Fields set in `overrides` win; fields it leaves unset keep their
    /// current override.
    ///
    /// # Errors
    ///
    /// [`Error::Style`] when the combined overrides are out of range; the
    /// current presentation is kept.
    pub fn merge_overrides(&mut self, overrides: &StyleOverrides) -> Result<()> {
        let merged = self.overrides().merge(overrides);
        self.set_overrides(merged)
    }

    /// Get the overrides applied on top of the style tables.
    pub fn overrides(&self) -> &StyleOverrides {
        self.styles.policy().overrides()
    }

    /// Replace the palette.
    pub fn set_palette(&mut self, palette: RadioPalette) {
        self.styles.set_palette(palette);
        self.refresh_configuration();
    }

    /// Get the resolved configuration for the current style and axis.
    pub fn configuration(&self) -> &StyleConfiguration {
        &self.configuration
    }

    /// Get the row geometry of the item at `index`.
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        self.items
            .get(index)
            .map(|item| ItemLayout::resolve(&self.configuration, item.content_shape()))
    }

    /// Get the selection-dependent colors of every item.
    pub fn item_appearances(&self) -> Vec<ItemAppearance> {
        ItemAppearance::resolve_all(
            &self.configuration,
            self.items.len(),
            self.current_selection(),
        )
    }

    /// Place every row within `width`.
    pub fn layout(&self, width: f32) -> GroupLayout {
        let shapes: Vec<_> = self.items.iter().map(RadioItem::content_shape).collect();
        GroupLayout::compute(&self.configuration, &shapes, width)
    }

    /// Hand every row to a renderer.
    pub fn paint<R: GroupRenderer + ?Sized>(&self, width: f32, renderer: &mut R) {
        let layout = self.layout(width);
        let appearances = self.item_appearances();

        renderer.begin_group(&self.configuration, layout.size());
        for ((item, row), appearance) in self.items.iter().zip(layout.rows()).zip(&appearances) {
            renderer.draw_row(RowVisual {
                item,
                row,
                appearance,
                config: &self.configuration,
            });
        }
        renderer.end_group();
    }

    /// Format the group as a tree for debugging.
    pub fn debug_tree(&self, options: TreeFormatOptions) -> String {
        GroupTreeDebug::with_options(options).format(self)
    }

    fn refresh_configuration(&mut self) {
        let (style, axis) = (self.style.get(), self.axis.get());
        let configuration = self.styles.resolve(style, axis).clone();
        if configuration != self.configuration {
            self.configuration = configuration;
            tracing::debug!(target: targets::STYLE, %style, %axis, "radio group configuration changed");
            self.configuration_changed.emit(());
        }
    }
}

impl std::fmt::Debug for RadioGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioGroup")
            .field("items", &self.items.len())
            .field("selected", &self.current_selection())
            .field("style", &self.style())
            .field("axis", &self.axis())
            .field("feedback_enabled", &self.feedback_enabled)
            .finish()
    }
}

// Ensure RadioGroup is Send + Sync
static_assertions::assert_impl_all!(RadioGroup: Send, Sync);
