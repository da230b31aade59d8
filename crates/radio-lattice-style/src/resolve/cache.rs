//! Style caching keyed on `(style, axis)`.

use std::collections::HashMap;

use radio_lattice_core::logging::targets;

use super::policy::StylePolicy;
use crate::error::Result;
use crate::style::{Axis, GroupStyle, StyleConfiguration, StyleOverrides};
use crate::theme::RadioPalette;

/// Cache key for resolved configurations.
pub type StyleCacheKey = (GroupStyle, Axis);

/// Memoizes [`StylePolicy::resolve`] results.
///
/// The cache owns its policy so that changing the palette or the overrides
/// can invalidate every entry at once.
#[derive(Debug, Clone, Default)]
pub struct StyleCache {
    policy: StylePolicy,
    cache: HashMap<StyleCacheKey, StyleConfiguration>,
}

impl StyleCache {
    /// Create a cache over a policy.
    pub fn new(policy: StylePolicy) -> Self {
        Self {
            policy,
            cache: HashMap::new(),
        }
    }

    /// The policy used on cache misses.
    pub fn policy(&self) -> &StylePolicy {
        &self.policy
    }

    /// Get a cached configuration without resolving.
    pub fn get(&self, style: GroupStyle, axis: Axis) -> Option<&StyleConfiguration> {
        self.cache.get(&(style, axis))
    }

    /// Get the configuration for a pair, resolving it on first use.
    pub fn resolve(&mut self, style: GroupStyle, axis: Axis) -> &StyleConfiguration {
        let policy = &self.policy;
        self.cache.entry((style, axis)).or_insert_with(|| {
            tracing::trace!(target: targets::STYLE, %style, %axis, "style cache miss");
            policy.resolve(style, axis)
        })
    }

    /// Replace the palette and drop every cached entry.
    ///
    /// Overrides stay in effect.
    pub fn set_palette(&mut self, palette: RadioPalette) {
        self.policy = self.policy.clone().with_palette(palette);
        self.invalidate_all();
    }

    /// Replace the overrides and drop every cached entry.
    ///
    /// On error the cache is left untouched.
    pub fn set_overrides(&mut self, overrides: StyleOverrides) -> Result<()> {
        self.policy = self.policy.clone().with_overrides(overrides)?;
        self.invalidate_all();
        Ok(())
    }

    /// Invalidate all cached configurations.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
