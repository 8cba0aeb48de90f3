//! Error types for the headlamp-config library.
//!
//! Every stage of configuration resolution reports failure through the single
//! [`Error`] enum below, using `thiserror` for the `Display` and `source`
//! plumbing. No stage ever hands back a partially resolved configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a resolver error.
///
/// # Examples
///
/// ```
/// use headlamp_config::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(4466)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for configuration resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// The invocation arguments could not be parsed as flags.
    #[error("error parsing flags at '{token}': {message}")]
    Parse {
        /// The argument (or argument fragment) that could not be parsed.
        token: String,
        /// A description of what went wrong.
        message: String,
    },

    /// Help output was requested instead of a configuration.
    ///
    /// This is not a failure of the input, but resolution cannot continue.
    #[error("help requested")]
    HelpRequested {
        /// Rendered help text for every registered option.
        text: String,
    },

    /// A merged value could not be converted to the option's declared type.
    #[error("invalid value '{value}' for '{key}': expected {expected}")]
    Decode {
        /// The option name (kebab-case).
        key: String,
        /// The raw value that failed to decode.
        value: String,
        /// Human-readable description of the expected type.
        expected: &'static str,
    },

    /// A cross-field rule was violated by the merged configuration.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The option or rule that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No usable location was found for a derived path.
    #[error("could not resolve {target}: {reason}")]
    PathResolution {
        /// What was being resolved (e.g. "kubeconfig directory").
        target: String,
        /// Why every fallback failed.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a path resolution error for a specific path.
    pub(crate) fn path_resolution(target: &str, path: Option<&PathBuf>, reason: String) -> Self {
        let target = match path {
            Some(path) => format!("{target} ({})", path.display()),
            None => target.to_string(),
        };
        Self::PathResolution { target, reason }
    }

    /// Check if the error is a cross-field validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use headlamp_config::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "base-url".to_string(),
    ///     message: "must start with '/'".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The option name this error refers to, when there is one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Decode { key, .. } => Some(key),
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = Error::Parse {
            token: "--bogus".to_string(),
            message: "unexpected argument".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("error parsing flags"));
        assert!(display.contains("--bogus"));
    }

    #[test]
    fn test_decode_error() {
        let err = Error::Decode {
            key: "port".to_string(),
            value: "abc".to_string(),
            expected: "a port number (0-65535)",
        };
        let display = format!("{err}");
        assert!(display.contains("'abc'"));
        assert!(display.contains("'port'"));
        assert_eq!(err.key(), Some("port"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "service-name".to_string(),
            message: "required when tracing is enabled".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("service-name"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_path_resolution_error_with_path() {
        let path = PathBuf::from("/opt/headlamp");
        let err = Error::path_resolution(
            "kubeconfig directory",
            Some(&path),
            "permission denied".to_string(),
        );
        let display = format!("{err}");
        assert!(display.contains("kubeconfig directory"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/opt/headlamp"));
        assert!(display.contains("permission denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
        assert!(!err.is_validation());
        assert_eq!(err.key(), None);
    }
}
