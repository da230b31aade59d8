//! Error types for radio groups.

/// Result type alias for radio group operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by selection and group construction.
///
/// Invalid input is rejected, never corrected: a failed call leaves the
/// group exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The index is neither the no-selection sentinel nor a valid position.
    #[error("Invalid selection index {index} for a group of {item_count} items")]
    InvalidIndex { index: i32, item_count: usize },

    /// A group was constructed without any items.
    #[error("A radio group needs at least one item")]
    EmptyItemList,

    /// Style overrides were rejected.
    #[error("Style error: {0}")]
    Style(#[from] radio_lattice_style::Error),
}

impl Error {
    /// Create an invalid index error.
    pub fn invalid_index(index: i32, item_count: usize) -> Self {
        Self::InvalidIndex { index, item_count }
    }
}
