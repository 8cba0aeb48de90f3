//! Environment variable handling for configuration overrides.
//!
//! Resolution reads the environment from an [`Environment`] snapshot rather
//! than from the live process, so the same inputs always produce the same
//! configuration. Variables under [`ENV_PREFIX`] map onto option names.

use std::collections::BTreeMap;
use std::env;

/// Prefix for environment variables that overlay option defaults.
pub const ENV_PREFIX: &str = "HEADLAMP_CONFIG_";

/// Standard variable consulted for the kubeconfig path outside cluster mode.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// An immutable snapshot of environment variables.
///
/// # Examples
///
/// ```
/// use headlamp_config::config::Environment;
///
/// let env = Environment::from_pairs([
///     ("HEADLAMP_CONFIG_PORT", "9000"),
///     ("HOME", "/home/dev"),
/// ]);
///
/// let overlay: Vec<_> = env.config_overrides().collect();
/// assert_eq!(overlay, vec![("port".to_string(), "9000")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// An environment with no variables at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        let vars = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }

    /// Look up a single variable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, treating an empty value as absent.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// All prefixed variables, translated to option names.
    ///
    /// Yields `(option-name, value)` in a stable order.
    pub fn config_overrides(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.vars.iter().filter_map(|(key, value)| {
            key.strip_prefix(ENV_PREFIX)
                .filter(|rest| !rest.is_empty())
                .map(|rest| (option_name(rest), value.as_str()))
        })
    }
}

/// Translate the remainder of a prefixed variable into an option name.
///
/// `OIDC_CLIENT_ID` becomes `oidc-client-id`.
#[must_use]
pub fn option_name(var_suffix: &str) -> String {
    var_suffix.to_lowercase().replace('_', "-")
}

/// Translate an option name into its environment variable.
///
/// `oidc-client-id` becomes `HEADLAMP_CONFIG_OIDC_CLIENT_ID`.
#[must_use]
pub fn env_var_name(option: &str) -> String {
    format!("{ENV_PREFIX}{}", option.to_uppercase().replace('-', "_"))
}
