//! Item descriptors.

use radio_lattice_style::resolve::ContentShape;

/// One selectable entry of a radio group.
///
/// Items are immutable once built and are identified by their position in
/// the group.
///
/// # Example
///
/// ```
/// use radio_lattice::RadioItem;
///
/// let item = RadioItem::new("Express")
///     .with_subtitle("Arrives tomorrow")
///     .with_detail("$9.99");
///
/// assert_eq!(item.title(), "Express");
/// assert!(item.content_shape().has_detail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RadioItem {
    title: String,
    subtitle: Option<String>,
    detail: Option<String>,
}

impl RadioItem {
    /// Create a title-only item.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            detail: None,
        }
    }

    /// Set the secondary text shown under the title.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the trailing text shown on the title row.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the subtitle, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Get the detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Which optional texts this item carries.
    pub fn content_shape(&self) -> ContentShape {
        ContentShape::new(self.subtitle.is_some(), self.detail.is_some())
    }
}

impl From<&str> for RadioItem {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for RadioItem {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}
