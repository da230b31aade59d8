//! Style resolution: policy tables, row geometry and caching.

mod cache;
mod layout;
mod policy;

pub use cache::{StyleCache, StyleCacheKey};
pub use layout::{ContentShape, ItemLayout, resolve_item_layout};
pub use policy::{StylePolicy, metrics, resolve_style};
