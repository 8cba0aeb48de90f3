//! Mode-dependent corrections applied after decoding.
//!
//! Some defaults depend on other resolved values and cannot live in the
//! option registry. Each rule is a [`ConditionalOverride`]; rules may only
//! rewrite values that were not named on the invocation.

use crate::config::schema::{Config, Setting};

/// A correction that depends on another resolved field.
pub trait ConditionalOverride {
    /// Short rule name for logging.
    fn name(&self) -> &'static str;

    /// Apply the rule. Returns `true` if the configuration changed.
    ///
    /// Implementations must leave [`Setting::Explicit`] values untouched.
    fn apply(&self, config: &mut Config) -> bool;
}

/// Plugin watching is off inside a cluster unless asked for explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct InClusterPluginWatch;

impl ConditionalOverride for InClusterPluginWatch {
    fn name(&self) -> &'static str {
        "in-cluster-plugin-watch"
    }

    fn apply(&self, config: &mut Config) -> bool {
        if !config.in_cluster || config.watch_plugins_changes.is_explicit() {
            return false;
        }
        let changed = config.watch_plugins_changes != Setting::Default(false);
        config.watch_plugins_changes = Setting::Default(false);
        changed
    }
}

/// Every override, in application order.
pub static OVERRIDES: &[&(dyn ConditionalOverride + Sync)] = &[&InClusterPluginWatch];

/// Apply every registered override.
///
/// # Examples
///
/// ```
/// use headlamp_config::config::{apply_overrides, Config, Setting};
///
/// let mut config = Config {
///     in_cluster: true,
///     watch_plugins_changes: Setting::Default(true),
///     ..Default::default()
/// };
/// apply_overrides(&mut config);
/// assert_eq!(config.watch_plugins_changes, Setting::Default(false));
/// ```
pub fn apply_overrides(config: &mut Config) {
    for rule in OVERRIDES {
        if rule.apply(config) {
            log::debug!("override '{}' applied", rule.name());
        }
    }
}
