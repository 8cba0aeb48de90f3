//! Layered merging of option values.
//!
//! [`LayeredValues`] holds one raw string per option together with the
//! [`Origin`] of the layer that last wrote it. Layers are applied lowest
//! precedence first; every later write replaces the earlier one.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::environment::Environment;
use crate::config::loader::ExplicitFlags;
use crate::config::options;
use crate::platform::Platform;

/// Which source supplied a merged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Origin {
    /// Compiled-in default from the option registry.
    Default,
    /// A `HEADLAMP_CONFIG_*` environment variable.
    Environment,
    /// A flag named on the invocation.
    Flag,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Environment => write!(f, "environment"),
            Self::Flag => write!(f, "flag"),
        }
    }
}

/// A raw value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layered {
    /// The raw, undecoded value.
    pub value: String,
    /// The source that supplied it.
    pub origin: Origin,
}

/// The key-to-value mapping built up by the loader.
///
/// Keys are always registry names, so there is exactly one entry per
/// recognized option that has a value.
///
/// # Examples
///
/// ```
/// use headlamp_config::config::{Environment, LayeredValues, Origin};
///
/// let mut values = LayeredValues::new();
/// values.set("port", "4466", Origin::Default);
/// values.overlay_environment(&Environment::from_pairs([("HEADLAMP_CONFIG_PORT", "9000")]));
///
/// assert_eq!(values.value("port"), Some("9000"));
/// assert_eq!(values.origin("port"), Some(Origin::Environment));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayeredValues {
    entries: BTreeMap<&'static str, Layered>,
}

impl LayeredValues {
    /// An empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a mapping with every registry default.
    ///
    /// Options without a default are left absent.
    #[must_use]
    pub fn from_defaults(platform: &dyn Platform) -> Self {
        let mut values = Self::new();
        for spec in options::all() {
            if let Some(default) = spec.default_literal(platform) {
                values.insert(spec.name, default, Origin::Default);
            }
        }
        values
    }

    /// Write a value for a registered option.
    ///
    /// Returns `false` (and writes nothing) when `key` is not a registered
    /// option name.
    pub fn set(&mut self, key: &str, value: impl Into<String>, origin: Origin) -> bool {
        match options::lookup(key) {
            Some(spec) => {
                self.insert(spec.name, value.into(), origin);
                true
            }
            None => false,
        }
    }

    fn insert(&mut self, key: &'static str, value: String, origin: Origin) {
        self.entries.insert(key, Layered { value, origin });
    }

    /// Overlay every prefixed environment variable that names an option.
    ///
    /// Returns how many values were applied.
    pub fn overlay_environment(&mut self, env: &Environment) -> usize {
        let mut applied = 0;
        for (key, value) in env.config_overrides() {
            if self.set(&key, value, Origin::Environment) {
                log::debug!("option '{key}' set from environment");
                applied += 1;
            } else {
                log::debug!("ignoring environment override for unknown option '{key}'");
            }
        }
        applied
    }

    /// Re-apply exactly the flags captured at parse time.
    pub fn apply_flags(&mut self, flags: &ExplicitFlags) {
        for (key, value) in flags.iter() {
            log::debug!("option '{key}' set from flag");
            self.insert(key, value.to_string(), Origin::Flag);
        }
    }

    /// The full entry for an option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Layered> {
        self.entries.get(key)
    }

    /// The raw value of an option.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|l| l.value.as_str())
    }

    /// Where an option's value came from.
    #[must_use]
    pub fn origin(&self, key: &str) -> Option<Origin> {
        self.get(key).map(|l| l.origin)
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Layered)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Number of options with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no option has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
