//! Tree-shaped debug dumps of radio groups.

use radio_lattice_core::{TreeFormatOptions, TreeStyle};

use crate::group::RadioGroup;

/// Formats a [`RadioGroup`] as a small tree.
///
/// ```text
/// RadioGroup (grouped, vertical, 3 items, selected 1):
/// ├── [0] ( ) Standard
/// ├── [1] (*) Express
/// │     Arrives tomorrow
/// └── [2] ( ) Pickup
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupTreeDebug {
    options: TreeFormatOptions,
}

impl GroupTreeDebug {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a group.
    pub fn format(&self, group: &RadioGroup) -> String {
        let selection = match group.current_selection() {
            -1 => "none".to_string(),
            index => index.to_string(),
        };
        let mut output = format!(
            "RadioGroup ({}, {}, {} items, selected {}):\n",
            group.style(),
            group.axis(),
            group.item_count(),
            selection
        );

        let style = self.options.style;
        let count = group.item_count();
        for (index, item) in group.items().iter().enumerate() {
            let is_last = index + 1 == count;
            output.push_str(style.connector(is_last));

            if self.options.show_indices {
                output.push_str(&format!("[{index}] "));
            }
            let marker = if group.is_selected(index) { "(*)" } else { "( )" };
            output.push_str(&format!("{marker} {}", item.title()));
            if let Some(detail) = item.detail() {
                output.push_str(&format!(" | {detail}"));
            }
            output.push('\n');

            if self.options.show_details {
                if let Some(subtitle) = item.subtitle() {
                    let continuation = if is_last || style == TreeStyle::Compact {
                        ""
                    } else {
                        style.branch()
                    };
                    let indent = " ".repeat(self.options.indent_size + 4);
                    output.push_str(&format!("{continuation}{indent}{subtitle}\n"));
                }
            }
        }
        output
    }
}
