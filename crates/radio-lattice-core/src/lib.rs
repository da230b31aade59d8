//! Core systems for Radio Lattice.
//!
//! This crate provides the foundational pieces shared by the style and
//! widget crates:
//!
//! - **Signal/Slot System**: Synchronous, type-safe change notification
//! - **Property System**: Values that report whether a write changed them
//! - **Logging**: `tracing` targets, span names and debug-dump options
//!
//! # Signal/Slot Example
//!
//! ```
//! use radio_lattice_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{PerfSpan, TreeFormatOptions, TreeStyle};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
