//! Configuration validation.
//!
//! Cross-field rules that a merged configuration must satisfy before the
//! server may start. Rules run in a fixed order and the first violation is
//! reported.

use crate::config::schema::{Config, OidcConfig, TelemetryConfig};
use crate::error::{Error, Result};

/// Validates a resolved configuration.
///
/// # Examples
///
/// ```
/// use headlamp_config::config::{Config, ConfigValidator};
///
/// let config = Config {
///     base_url: "/headlamp".to_string(),
///     ..Default::default()
/// };
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Checks, in order:
    /// 1. OIDC client settings are only used in cluster mode
    /// 2. `base-url` is empty or starts with `/`
    /// 3. tracing settings, when tracing is enabled
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for the first rule violated.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_oidc(config.in_cluster, &config.oidc)?;
        Self::validate_base_url(&config.base_url)?;
        Self::validate_tracing(&config.telemetry)?;
        Ok(())
    }

    /// OIDC client settings are only meaningful in cluster mode.
    pub fn validate_oidc(in_cluster: bool, oidc: &OidcConfig) -> Result<()> {
        if !in_cluster && oidc.is_configured() {
            return Err(Error::Validation {
                field: "oidc".into(),
                message: "oidc-client-id, oidc-client-secret, oidc-idp-issuer-url, \
                          oidc-validator-client-id and oidc-validator-idp-issuer-url \
                          are only meant to be used in in-cluster mode"
                    .into(),
            });
        }
        Ok(())
    }

    /// The base URL is either empty or an absolute path.
    pub fn validate_base_url(base_url: &str) -> Result<()> {
        if !base_url.is_empty() && !base_url.starts_with('/') {
            return Err(Error::Validation {
                field: "base-url".into(),
                message: format!("'{base_url}' needs to start with a '/' or be empty"),
            });
        }
        Ok(())
    }

    /// Tracing needs a service name and somewhere to send traces.
    pub fn validate_tracing(telemetry: &TelemetryConfig) -> Result<()> {
        if !telemetry.is_tracing_enabled() {
            return Ok(());
        }

        if telemetry.service_name.is_empty() {
            return Err(Error::Validation {
                field: "service-name".into(),
                message: "service-name is required when tracing is enabled".into(),
            });
        }

        if !telemetry.has_exporter() {
            return Err(Error::Validation {
                field: "tracing-exporter".into(),
                message: "at least one tracing exporter (jaeger, otlp, or stdout) must be \
                          configured"
                    .into(),
            });
        }

        let otlp_missing = telemetry.otlp_endpoint.as_deref().map_or(true, str::is_empty);
        if telemetry.uses_otlp_http() && otlp_missing {
            return Err(Error::Validation {
                field: "otlp-endpoint".into(),
                message: "otlp-endpoint must be configured when use-otlp-http is enabled".into(),
            });
        }

        Ok(())
    }
}
