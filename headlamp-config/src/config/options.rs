//! The registry of recognized options.
//!
//! Every option the resolver understands is declared exactly once in
//! [`OPTIONS`]: its kebab-case name (shared by the flag and the environment
//! variable), its value kind, its help text and its compiled-in default.
//! The flag parser, the default layer, the decoder and the CLI's `options`
//! listing all read from this table.

use clap::{Arg, ArgAction, Command};

use crate::config::environment::env_var_name;
use crate::paths;
use crate::platform::Platform;

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 4466;

/// The value type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `true`/`false` style switch.
    Bool,
    /// Free-form string.
    Text,
    /// Comma-separated list of strings.
    List,
    /// TCP port number.
    Port,
    /// Floating point number.
    Float,
}

impl OptionKind {
    /// Placeholder shown in help output.
    #[must_use]
    pub const fn value_name(self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Text => "VALUE",
            Self::List => "LIST",
            Self::Port => "PORT",
            Self::Float => "FLOAT",
        }
    }

    /// Short type label, as shown by `headlamp-config options`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Text => "string",
            Self::List => "list",
            Self::Port => "port",
            Self::Float => "float",
        }
    }
}

/// Compiled-in default of an option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// No default; the option stays unset unless supplied.
    None,
    /// Boolean default.
    Bool(bool),
    /// String (or list) default.
    Text(&'static str),
    /// Port default.
    Port(u16),
    /// Float default.
    Float(f64),
    /// The platform plugins directory, created on first use.
    PluginsDir,
}

/// A single recognized option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec {
    /// Kebab-case name, used for `--name` and `HEADLAMP_CONFIG_NAME`.
    pub name: &'static str,
    /// Value type.
    pub kind: OptionKind,
    /// One-line description.
    pub help: &'static str,
    /// Compiled-in default.
    pub default: DefaultValue,
}

impl OptionSpec {
    const fn new(
        name: &'static str,
        kind: OptionKind,
        default: DefaultValue,
        help: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            help,
            default,
        }
    }

    /// The environment variable that sets this option.
    ///
    /// # Examples
    ///
    /// ```
    /// use headlamp_config::config::options;
    ///
    /// let spec = options::lookup("oidc-client-id").unwrap();
    /// assert_eq!(spec.env_var(), "HEADLAMP_CONFIG_OIDC_CLIENT_ID");
    /// ```
    #[must_use]
    pub fn env_var(&self) -> String {
        env_var_name(self.name)
    }

    /// The default as a raw literal, ready for the merge layer.
    ///
    /// Evaluating [`DefaultValue::PluginsDir`] creates the plugins directory.
    /// Returns `None` for options without a default.
    #[must_use]
    pub fn default_literal(&self, platform: &dyn Platform) -> Option<String> {
        match self.default {
            DefaultValue::None => None,
            DefaultValue::Bool(b) => Some(b.to_string()),
            DefaultValue::Text(s) => Some(s.to_string()),
            DefaultValue::Port(p) => Some(p.to_string()),
            DefaultValue::Float(f) => Some(f.to_string()),
            DefaultValue::PluginsDir => Some(paths::default_plugins_dir(platform)),
        }
    }

    /// Human-readable default without touching the filesystem.
    #[must_use]
    pub fn describe_default(&self) -> String {
        match self.default {
            DefaultValue::None => "(unset)".to_string(),
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Text("") => "\"\"".to_string(),
            DefaultValue::Text(s) => s.to_string(),
            DefaultValue::Port(p) => p.to_string(),
            DefaultValue::Float(f) => format!("{f:?}"),
            DefaultValue::PluginsDir => "<user config dir>/Headlamp/plugins".to_string(),
        }
    }

    fn arg(&self) -> Arg {
        let arg = Arg::new(self.name)
            .long(self.name)
            .help(self.help)
            .value_name(self.kind.value_name())
            .action(ArgAction::Set);

        match self.kind {
            // `--dev` alone means true; a value must be attached with `=`.
            OptionKind::Bool => arg
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
            _ => arg.num_args(1).allow_hyphen_values(true),
        }
    }
}

use DefaultValue as D;
use OptionKind as K;

/// Every recognized option, in help-output order.
pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("in-cluster", K::Bool, D::Bool(false), "Set when running from a k8s cluster"),
    OptionSpec::new("dev", K::Bool, D::Bool(false), "Allow connections from other origins"),
    OptionSpec::new(
        "insecure-ssl",
        K::Bool,
        D::Bool(false),
        "Accept/Ignore all server SSL certificates",
    ),
    OptionSpec::new("enable-helm", K::Bool, D::Bool(false), "Enable Helm operations"),
    OptionSpec::new(
        "enable-dynamic-clusters",
        K::Bool,
        D::Bool(false),
        "Enable dynamic clusters, which stores stateless clusters in the frontend",
    ),
    OptionSpec::new(
        "watch-plugins-changes",
        K::Bool,
        D::Bool(true),
        "Reloads plugins when there are changes to them or their directory \
         (defaults to false in-cluster unless set explicitly)",
    ),
    OptionSpec::new("kubeconfig", K::Text, D::None, "Absolute path to the kubeconfig file"),
    OptionSpec::new(
        "skipped-kube-contexts",
        K::List,
        D::Text(""),
        "Context names which should be ignored in kubeconfig file",
    ),
    OptionSpec::new("html-static-dir", K::Text, D::Text(""), "Static HTML directory to serve"),
    OptionSpec::new(
        "plugins-dir",
        K::Text,
        D::PluginsDir,
        "Specify the plugins directory to build the backend with",
    ),
    OptionSpec::new("base-url", K::Text, D::Text(""), "Base URL path. eg. /headlamp"),
    OptionSpec::new(
        "listen-addr",
        K::Text,
        D::Text(""),
        "Address to listen on; default is empty, which means listening to any address",
    ),
    OptionSpec::new("port", K::Port, D::Port(DEFAULT_PORT), "Port to listen from"),
    OptionSpec::new(
        "proxy-urls",
        K::List,
        D::Text(""),
        "Allow proxy requests to specified URLs",
    ),
    OptionSpec::new("oidc-client-id", K::Text, D::Text(""), "ClientID for OIDC"),
    OptionSpec::new("oidc-client-secret", K::Text, D::Text(""), "ClientSecret for OIDC"),
    OptionSpec::new(
        "oidc-validator-client-id",
        K::Text,
        D::Text(""),
        "Override ClientID for OIDC during validation",
    ),
    OptionSpec::new(
        "oidc-idp-issuer-url",
        K::Text,
        D::Text(""),
        "Identity provider issuer URL for OIDC",
    ),
    OptionSpec::new(
        "oidc-validator-idp-issuer-url",
        K::Text,
        D::Text(""),
        "Override Identity provider issuer URL for OIDC during validation",
    ),
    OptionSpec::new(
        "oidc-scopes",
        K::List,
        D::Text("profile,email"),
        "A comma separated list of scopes needed from the OIDC provider",
    ),
    OptionSpec::new(
        "oidc-use-access-token",
        K::Bool,
        D::Bool(false),
        "Setup oidc to pass through the access_token instead of the default id_token",
    ),
    OptionSpec::new("service-name", K::Text, D::Text("headlamp"), "Service name for telemetry"),
    OptionSpec::new(
        "service-version",
        K::Text,
        D::Text("0.30.0"),
        "Service version for telemetry",
    ),
    OptionSpec::new("tracing-enabled", K::Bool, D::Bool(false), "Enable distributed tracing"),
    OptionSpec::new("metrics-enabled", K::Bool, D::Bool(false), "Enable metrics collection"),
    OptionSpec::new("jaeger-endpoint", K::Text, D::None, "Jaeger collector endpoint"),
    OptionSpec::new(
        "otlp-endpoint",
        K::Text,
        D::Text("localhost:4317"),
        "OTLP collector endpoint",
    ),
    OptionSpec::new(
        "use-otlp-http",
        K::Bool,
        D::Bool(false),
        "Use HTTP instead of gRPC for OTLP export",
    ),
    OptionSpec::new(
        "stdout-trace-enabled",
        K::Bool,
        D::Bool(false),
        "Enable tracing output to stdout",
    ),
    OptionSpec::new("sampling-rate", K::Float, D::Float(1.0), "Sampling rate for traces"),
];

/// The complete registry.
#[must_use]
pub fn all() -> &'static [OptionSpec] {
    OPTIONS
}

/// Find an option by its kebab-case name.
///
/// # Examples
///
/// ```
/// use headlamp_config::config::options::{self, DefaultValue, OptionKind};
///
/// let port = options::lookup("port").unwrap();
/// assert_eq!(port.kind, OptionKind::Port);
/// assert_eq!(port.default, DefaultValue::Port(4466));
/// assert!(options::lookup("no-such-option").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.name == name)
}

/// The clap command used to parse server invocations and render their help.
#[must_use]
pub fn command() -> Command {
    Command::new("headlamp")
        .about("Headlamp server")
        .disable_version_flag(true)
        .args_override_self(true)
        .args(OPTIONS.iter().map(OptionSpec::arg))
}
