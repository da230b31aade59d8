//! Resolved configurations, group kinds and host overrides.

mod configuration;
mod kinds;
mod overrides;

pub use configuration::StyleConfiguration;
pub use kinds::{Axis, Distribution, GroupStyle};
pub use overrides::StyleOverrides;
