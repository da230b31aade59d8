//! The single-selection state machine.
//!
//! [`SelectionController`] owns the selected index of a fixed-size list and
//! enforces exclusivity: selecting one position implicitly deselects the
//! previous one, and each effective change is announced exactly once.
//!
//! # States
//!
//! - no selection (`-1`)
//! - `selected(i)` for `0 <= i < item_count`
//!
//! Every transition between these is permitted through [`select`]. A call
//! that names the current state is a no-op and emits nothing.
//!
//! [`select`]: SelectionController::select

use radio_lattice_core::logging::targets;
use radio_lattice_core::{ConnectionId, Property, Signal};

use crate::error::{Error, Result};

/// Index value meaning "nothing is selected".
pub const NO_SELECTION: i32 = -1;

/// Exclusive selection over `item_count` positions.
pub struct SelectionController {
    /// Number of selectable positions; fixed at construction.
    item_count: usize,

    /// The selected index, or [`NO_SELECTION`].
    selected: Property<i32>,

    /// The observer registered through `on_selection_changed`, if any.
    host_observer: Option<ConnectionId>,

    /// Signal emitted after every effective selection change.
    /// Parameter is the new index (`-1` when cleared).
    pub selection_changed: Signal<i32>,
}

impl SelectionController {
    /// Create a controller with nothing selected.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            selected: Property::new(NO_SELECTION),
            host_observer: None,
            selection_changed: Signal::new(),
        }
    }

    /// Create a controller with an initial selection.
    ///
    /// The index is validated like [`select`](Self::select) but no signal is
    /// emitted.
    pub fn with_initial(item_count: usize, initial: i32) -> Result<Self> {
        let mut controller = Self::new(item_count);
        controller.set_silently(initial)?;
        Ok(controller)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get the number of selectable positions.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Get the selected index, or `-1` if nothing is selected.
    pub fn current_selection(&self) -> i32 {
        self.selected.get()
    }

    /// Get the selected index as a position, if any.
    pub fn selected_position(&self) -> Option<usize> {
        usize::try_from(self.current_selection()).ok()
    }

    /// Check whether the item at `index` is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_position() == Some(index)
    }

    /// Check whether any item is selected.
    pub fn has_selection(&self) -> bool {
        self.current_selection() != NO_SELECTION
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Select the item at `index`, or clear the selection with `-1`.
    ///
    /// Returns `Ok(true)` when the selection changed and
    /// [`selection_changed`](Self::selection_changed) was emitted, and
    /// `Ok(false)` when `index` was already the current selection.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] when `index` is neither `-1` nor in
    /// `0..item_count`. The selection is left unchanged.
    pub fn select(&mut self, index: i32) -> Result<bool> {
        if let Err(err) = self.check(index) {
            tracing::warn!(
                target: targets::SELECTION,
                index,
                item_count = self.item_count,
                "rejected selection index"
            );
            return Err(err);
        }

        let previous = self.current_selection();
        if !self.selected.set(index) {
            tracing::trace!(target: targets::SELECTION, index, "selection unchanged");
            return Ok(false);
        }

        tracing::debug!(target: targets::SELECTION, previous, current = index, "selection changed");
        self.selection_changed.emit(index);
        Ok(true)
    }

    /// Clear the selection.
    ///
    /// Equivalent to `select(-1)`.
    pub fn clear(&mut self) -> bool {
        let previous = self.current_selection();
        if !self.selected.set(NO_SELECTION) {
            return false;
        }
        tracing::debug!(target: targets::SELECTION, previous, current = NO_SELECTION, "selection cleared");
        self.selection_changed.emit(NO_SELECTION);
        true
    }

    /// Set the selection without emitting anything.
    ///
    /// Used to seed the initial state; the index is validated as in
    /// [`select`](Self::select).
    pub fn set_silently(&mut self, index: i32) -> Result<()> {
        self.check(index)?;
        self.selected.set_silent(index);
        Ok(())
    }

    // =========================================================================
    // Host Observer
    // =========================================================================

    /// Register the host's selection observer.
    ///
    /// Only one host observer is kept: registering a new one disconnects
    /// the previous one. Slots connected directly to
    /// [`selection_changed`](Self::selection_changed) are unaffected.
    pub fn on_selection_changed<F>(&mut self, observer: F) -> ConnectionId
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        if let Some(previous) = self.host_observer.take() {
            self.selection_changed.disconnect(previous);
        }
        let id = self.selection_changed.connect(move |&index| observer(index));
        self.host_observer = Some(id);
        id
    }

    /// Remove the host observer, if one is registered.
    pub fn clear_observer(&mut self) -> bool {
        match self.host_observer.take() {
            Some(id) => self.selection_changed.disconnect(id),
            None => false,
        }
    }

    fn check(&self, index: i32) -> Result<()> {
        let in_range = usize::try_from(index).is_ok_and(|i| i < self.item_count);
        if index == NO_SELECTION || in_range {
            Ok(())
        } else {
            Err(Error::invalid_index(index, self.item_count))
        }
    }
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("item_count", &self.item_count)
            .field("selected", &self.current_selection())
            .field("has_host_observer", &self.host_observer.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(SelectionController: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;

    fn recorder(controller: &SelectionController) -> Arc<Mutex<Vec<i32>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        controller.selection_changed.connect(move |&index| sink.lock().push(index));
        events
    }

    #[test]
    fn test_initial_state() {
        let controller = SelectionController::new(3);
        assert_eq!(controller.current_selection(), -1);
        assert!(!controller.has_selection());
        assert_eq!(controller.selected_position(), None);
    }

    #[test]
    fn test_select_emits_once() {
        let mut controller = SelectionController::new(3);
        let events = recorder(&controller);

        assert!(controller.select(1).unwrap());
        assert_eq!(controller.current_selection(), 1);
        assert!(controller.is_selected(1));
        assert!(!controller.is_selected(0));
        assert_eq!(*events.lock(), vec![1]);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut controller = SelectionController::new(3);
        let events = recorder(&controller);

        controller.select(2).unwrap();
        assert!(!controller.select(2).unwrap());
        assert_eq!(*events.lock(), vec![2]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut controller = SelectionController::new(3);
        controller.select(0).unwrap();
        let events = recorder(&controller);

        for bad in [3, 5, -2, i32::MIN, i32::MAX] {
            match controller.select(bad) {
                Err(Error::InvalidIndex { index, item_count }) => {
                    assert_eq!(index, bad);
                    assert_eq!(item_count, 3);
                }
                other => panic!("expected InvalidIndex for {bad}, got {other:?}"),
            }
        }
        assert_eq!(controller.current_selection(), 0);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_sentinel_clears() {
        let mut controller = SelectionController::new(2);
        let events = recorder(&controller);

        controller.select(1).unwrap();
        assert!(controller.select(-1).unwrap());
        assert!(!controller.select(-1).unwrap());
        assert!(!controller.clear());
        assert_eq!(*events.lock(), vec![1, -1]);
    }

    #[test]
    fn test_empty_list_only_accepts_sentinel() {
        let mut controller = SelectionController::new(0);
        assert!(matches!(controller.select(0), Err(Error::InvalidIndex { .. })));
        assert!(!controller.select(-1).unwrap());
    }

    #[test]
    fn test_with_initial() {
        let controller = SelectionController::with_initial(4, 2).unwrap();
        assert_eq!(controller.current_selection(), 2);

        assert!(matches!(
            SelectionController::with_initial(4, 4),
            Err(Error::InvalidIndex { index: 4, item_count: 4 })
        ));
    }

    #[test]
    fn test_host_observer_is_replaced() {
        let mut controller = SelectionController::new(3);
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicI32::new(-1));

        let f = first.clone();
        controller.on_selection_changed(move |_| {
            f.fetch_add(1, Ordering::SeqCst);
        });
        controller.select(0).unwrap();

        let s = second.clone();
        controller.on_selection_changed(move |index| s.store(index, Ordering::SeqCst));
        controller.select(2).unwrap();

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
        assert_eq!(controller.selection_changed.connection_count(), 1);
    }

    #[test]
    fn test_observer_sees_committed_state() {
        let mut controller = SelectionController::new(3);
        let seen = Arc::new(AtomicI32::new(-1));
        let s = seen.clone();
        controller.on_selection_changed(move |index| s.store(index, Ordering::SeqCst));

        controller.select(1).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), controller.current_selection());
    }

    #[test]
    fn test_clear_observer() {
        let mut controller = SelectionController::new(1);
        assert!(!controller.clear_observer());
        controller.on_selection_changed(|_| {});
        assert!(controller.clear_observer());
        assert_eq!(controller.selection_changed.connection_count(), 0);
    }
}
