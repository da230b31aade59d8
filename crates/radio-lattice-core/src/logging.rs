//! Logging and debugging facilities for Radio Lattice.
//!
//! This module provides:
//! - Target and span names for the `tracing` crate, one per subsystem
//! - Shared options for the tree-shaped debug dumps of radio groups
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Radio Lattice uses the `tracing` crate for instrumentation but never
//! installs a subscriber itself. To see logs, install one in your
//! application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("radio_lattice=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Radio Lattice for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Style resolution span.
    pub const STYLE_RESOLVE: &str = "radio_lattice::style_resolve";
    /// Row layout span.
    pub const LAYOUT: &str = "radio_lattice::layout";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "radio_lattice_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "radio_lattice_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "radio_lattice_core::property";
    /// Style policy target.
    pub const STYLE: &str = "radio_lattice_style::policy";
    /// Style override loading target.
    pub const CONFIG: &str = "radio_lattice_style::config";
    /// Selection state machine target.
    pub const SELECTION: &str = "radio_lattice::selection";
    /// Group layout target.
    pub const LAYOUT: &str = "radio_lattice::layout";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

impl TreeStyle {
    /// Connector drawn in front of a child node.
    ///
    /// `is_last` selects the closing corner for the final child.
    pub fn connector(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (TreeStyle::Ascii, false) => "+-- ",
            (TreeStyle::Ascii, true) => "`-- ",
            (TreeStyle::Unicode, false) => "\u{251c}\u{2500}\u{2500} ",
            (TreeStyle::Unicode, true) => "\u{2514}\u{2500}\u{2500} ",
            (TreeStyle::Compact, _) => "- ",
        }
    }

    /// Continuation drawn under a non-final child for its own detail lines.
    pub fn branch(self) -> &'static str {
        match self {
            TreeStyle::Ascii => "|",
            TreeStyle::Unicode => "\u{2502}",
            TreeStyle::Compact => "",
        }
    }
}

/// Configuration for tree-shaped debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show positional indices.
    pub show_indices: bool,
    /// Whether to show secondary text (subtitles, details).
    pub show_details: bool,
    /// Indent size for detail lines.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_indices: true,
            show_details: false,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_details: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            style: TreeStyle::Compact,
            show_indices: false,
            show_details: false,
            ..Default::default()
        }
    }
}

/// A guard that emits a tracing span when dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "radio_lattice::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TreeFormatOptions::default();
        assert_eq!(options.style, TreeStyle::Unicode);
        assert!(options.show_indices);
        assert!(!options.show_details);
    }

    #[test]
    fn test_minimal_options() {
        let options = TreeFormatOptions::minimal();
        assert_eq!(options.style, TreeStyle::Compact);
        assert!(!options.show_indices);
    }

    #[test]
    fn test_connectors_differ_for_last_child() {
        assert_ne!(TreeStyle::Ascii.connector(false), TreeStyle::Ascii.connector(true));
        assert_ne!(
            TreeStyle::Unicode.connector(false),
            TreeStyle::Unicode.connector(true)
        );
        assert_eq!(TreeStyle::Compact.connector(false), "- ");
        assert_eq!(TreeStyle::Compact.branch(), "");
    }

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic
        let _span = PerfSpan::new("test_operation");
        tracing::trace!(target: targets::CORE, "inside perf span");
    }
}
