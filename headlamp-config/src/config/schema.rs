//! Configuration schema definitions.
//!
//! This module defines the resolved configuration handed to the Headlamp
//! server: operational switches, scalar settings, and the OIDC and telemetry
//! groups.

use std::path::Path;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A value that remembers whether it was supplied explicitly.
///
/// # Examples
///
/// ```
/// use headlamp_config::config::Setting;
///
/// let watch = Setting::Default(true);
/// assert!(watch.is_set());
/// assert!(!watch.is_explicit());
/// assert_eq!(watch.value(), Some(&true));
///
/// let kubeconfig: Setting<String> = Setting::Unset;
/// assert_eq!(kubeconfig.value(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Setting<T> {
    /// No source supplied a value.
    #[default]
    Unset,
    /// Taken from a compiled default or the environment.
    Default(T),
    /// Named on the invocation.
    Explicit(T),
}

impl<T> Setting<T> {
    /// The value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Default(v) | Self::Explicit(v) => Some(v),
        }
    }

    /// Whether the value was named on the invocation.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }

    /// Whether any source supplied a value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Consume the setting, returning its value.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Default(v) | Self::Explicit(v) => Some(v),
        }
    }
}

impl<T: Clone> Setting<T> {
    /// The value, or `fallback` when unset.
    #[must_use]
    pub fn value_or(&self, fallback: T) -> T {
        self.value().cloned().unwrap_or(fallback)
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// The resolved server configuration.
///
/// Built once per process by [`ConfigBuilder`](crate::config::ConfigBuilder)
/// and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Running inside a Kubernetes cluster.
    pub in_cluster: bool,

    /// Development mode: allow connections from other origins.
    #[serde(rename = "dev")]
    pub dev_mode: bool,

    /// Skip TLS certificate verification for cluster connections.
    pub insecure_ssl: bool,

    /// Enable Helm support.
    pub enable_helm: bool,

    /// Enable dynamic (frontend-stored) clusters.
    pub enable_dynamic_clusters: bool,

    /// Reload plugins when their directory changes.
    pub watch_plugins_changes: Setting<bool>,

    /// Address to bind; empty means every interface.
    pub listen_addr: String,

    /// Port to bind.
    pub port: u16,

    /// Static HTML directory to serve.
    pub html_static_dir: String,

    /// Plugins directory. Empty if the platform default could not be created.
    pub plugins_dir: String,

    /// URL base path; empty or starting with `/`.
    pub base_url: String,

    /// URLs the proxy is allowed to forward to.
    pub proxy_urls: Vec<String>,

    /// Kubeconfig path; derived after validation when not given.
    pub kubeconfig: Setting<String>,

    /// Kubeconfig context names to ignore.
    pub skipped_kube_contexts: Vec<String>,

    /// OIDC settings (cluster mode only).
    pub oidc: OidcConfig,

    /// Telemetry settings.
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Whether plugin directories should be watched for changes.
    #[must_use]
    pub fn should_watch_plugins(&self) -> bool {
        self.watch_plugins_changes.value_or(false)
    }

    /// The kubeconfig path in use, if any.
    ///
    /// Outside cluster mode this is always present after resolution.
    #[must_use]
    pub fn kubeconfig_path(&self) -> Option<&Path> {
        self.kubeconfig
            .value()
            .filter(|p| !p.is_empty())
            .map(Path::new)
    }

    /// The plugins directory, for callers that cannot work without one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathResolution`] if no plugins directory was
    /// configured and the platform default could not be created.
    pub fn require_plugins_dir(&self) -> Result<&Path> {
        if self.plugins_dir.is_empty() {
            return Err(Error::PathResolution {
                target: "plugins directory".to_string(),
                reason: "no plugins-dir was given and the default directory could not be created"
                    .to_string(),
            });
        }
        Ok(Path::new(&self.plugins_dir))
    }
}

/// OpenID Connect settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OidcConfig {
    /// Client ID.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
    /// Identity provider issuer URL.
    pub idp_issuer_url: String,
    /// Client ID used when validating tokens, if different.
    pub validator_client_id: String,
    /// Issuer URL used when validating tokens, if different.
    pub validator_idp_issuer_url: String,
    /// Scopes requested from the provider.
    pub scopes: Vec<String>,
    /// Pass the access token through instead of the ID token.
    pub use_access_token: bool,
}

impl OidcConfig {
    /// Whether any client or issuer setting is present.
    ///
    /// Scopes and the token selection have defaults and do not count.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        [
            &self.client_id,
            &self.client_secret,
            &self.idp_issuer_url,
            &self.validator_client_id,
            &self.validator_idp_issuer_url,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }
}

/// Telemetry settings.
///
/// `None` means the option was never supplied; `Some` of a zero value means
/// it was supplied as that value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelemetryConfig {
    /// Reported service name.
    pub service_name: String,
    /// Reported service version.
    pub service_version: Option<String>,
    /// Distributed tracing switch.
    pub tracing_enabled: Option<bool>,
    /// Metrics collection switch.
    pub metrics_enabled: Option<bool>,
    /// Trace sampling rate.
    pub sampling_rate: Option<f64>,
    /// Jaeger collector endpoint.
    pub jaeger_endpoint: Option<String>,
    /// OTLP collector endpoint.
    pub otlp_endpoint: Option<String>,
    /// Export OTLP over HTTP instead of gRPC.
    pub use_otlp_http: Option<bool>,
    /// Write traces to stdout.
    pub stdout_trace_enabled: Option<bool>,
}

impl TelemetryConfig {
    /// Whether tracing is switched on.
    #[must_use]
    pub fn is_tracing_enabled(&self) -> bool {
        self.tracing_enabled == Some(true)
    }

    /// Whether OTLP export uses HTTP.
    #[must_use]
    pub fn uses_otlp_http(&self) -> bool {
        self.use_otlp_http == Some(true)
    }

    /// Whether at least one trace exporter is configured.
    #[must_use]
    pub fn has_exporter(&self) -> bool {
        let non_empty = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        non_empty(&self.jaeger_endpoint)
            || non_empty(&self.otlp_endpoint)
            || self.stdout_trace_enabled == Some(true)
    }
}
