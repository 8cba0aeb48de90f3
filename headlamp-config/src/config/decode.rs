//! Decoding merged raw values into a typed [`Config`].

use crate::config::merger::{LayeredValues, Origin};
use crate::config::options::DEFAULT_PORT;
use crate::config::schema::{Config, OidcConfig, Setting, TelemetryConfig};
use crate::error::{Error, Result};

/// Converts a [`LayeredValues`] mapping into a [`Config`].
///
/// # Examples
///
/// ```
/// use headlamp_config::config::{ConfigDecoder, LayeredValues, Origin};
///
/// let mut values = LayeredValues::new();
/// values.set("port", "9000", Origin::Environment);
/// values.set("watch-plugins-changes", "false", Origin::Flag);
///
/// let config = ConfigDecoder::decode(&values).unwrap();
/// assert_eq!(config.port, 9000);
/// assert!(config.watch_plugins_changes.is_explicit());
/// ```
pub struct ConfigDecoder<'a> {
    values: &'a LayeredValues,
}

impl<'a> ConfigDecoder<'a> {
    /// Decode every option.
    ///
    /// Options absent from `values` decode to their type's zero value, or
    /// to `None`/[`Setting::Unset`] where the field tracks presence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] naming the first option whose raw value is
    /// not a valid literal of its type.
    pub fn decode(values: &'a LayeredValues) -> Result<Config> {
        let d = Self { values };

        Ok(Config {
            in_cluster: d.boolean("in-cluster")?,
            dev_mode: d.boolean("dev")?,
            insecure_ssl: d.boolean("insecure-ssl")?,
            enable_helm: d.boolean("enable-helm")?,
            enable_dynamic_clusters: d.boolean("enable-dynamic-clusters")?,
            watch_plugins_changes: d.setting("watch-plugins-changes", |v| {
                parse_bool("watch-plugins-changes", v)
            })?,
            listen_addr: d.text("listen-addr"),
            port: d.port("port")?.unwrap_or(DEFAULT_PORT),
            html_static_dir: d.text("html-static-dir"),
            plugins_dir: d.text("plugins-dir"),
            base_url: d.text("base-url"),
            proxy_urls: d.list("proxy-urls"),
            kubeconfig: d.setting("kubeconfig", |v| Ok(v.to_string()))?,
            skipped_kube_contexts: d.list("skipped-kube-contexts"),
            oidc: OidcConfig {
                client_id: d.text("oidc-client-id"),
                client_secret: d.text("oidc-client-secret"),
                idp_issuer_url: d.text("oidc-idp-issuer-url"),
                validator_client_id: d.text("oidc-validator-client-id"),
                validator_idp_issuer_url: d.text("oidc-validator-idp-issuer-url"),
                scopes: d.list("oidc-scopes"),
                use_access_token: d.boolean("oidc-use-access-token")?,
            },
            telemetry: TelemetryConfig {
                service_name: d.text("service-name"),
                service_version: d.optional_text("service-version"),
                tracing_enabled: d.optional_bool("tracing-enabled")?,
                metrics_enabled: d.optional_bool("metrics-enabled")?,
                sampling_rate: d.float("sampling-rate")?,
                jaeger_endpoint: d.optional_text("jaeger-endpoint"),
                otlp_endpoint: d.optional_text("otlp-endpoint"),
                use_otlp_http: d.optional_bool("use-otlp-http")?,
                stdout_trace_enabled: d.optional_bool("stdout-trace-enabled")?,
            },
        })
    }

    fn text(&self, key: &str) -> String {
        self.optional_text(key).unwrap_or_default()
    }

    fn optional_text(&self, key: &str) -> Option<String> {
        self.values.value(key).map(str::to_string)
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.values.value(key).map(split_list).unwrap_or_default()
    }

    fn boolean(&self, key: &str) -> Result<bool> {
        Ok(self.optional_bool(key)?.unwrap_or(false))
    }

    fn optional_bool(&self, key: &str) -> Result<Option<bool>> {
        self.values
            .value(key)
            .map(|v| parse_bool(key, v))
            .transpose()
    }

    fn port(&self, key: &str) -> Result<Option<u16>> {
        self.values
            .value(key)
            .map(|v| {
                v.parse::<u16>().map_err(|_| Error::Decode {
                    key: key.to_string(),
                    value: v.to_string(),
                    expected: "a port number (0-65535)",
                })
            })
            .transpose()
    }

    fn float(&self, key: &str) -> Result<Option<f64>> {
        self.values
            .value(key)
            .map(|v| match v.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(f),
                _ => Err(Error::Decode {
                    key: key.to_string(),
                    value: v.to_string(),
                    expected: "a finite number",
                }),
            })
            .transpose()
    }

    fn setting<T>(&self, key: &str, decode: impl Fn(&str) -> Result<T>) -> Result<Setting<T>> {
        let Some(layered) = self.values.get(key) else {
            return Ok(Setting::Unset);
        };
        let value = decode(&layered.value)?;
        Ok(match layered.origin {
            Origin::Flag => Setting::Explicit(value),
            Origin::Default | Origin::Environment => Setting::Default(value),
        })
    }
}

/// Parse a boolean literal.
///
/// Accepts: true/1/yes/on/t for true, false/0/no/off/f for false
/// (case-insensitive).
pub(crate) fn parse_bool(key: &str, s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" => Ok(true),
        "false" | "0" | "no" | "off" | "f" => Ok(false),
        _ => Err(Error::Decode {
            key: key.to_string(),
            value: s.to_string(),
            expected: "a boolean (true/false/1/0/yes/no/on/off)",
        }),
    }
}

/// Split a comma-separated list, dropping blank entries.
fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
