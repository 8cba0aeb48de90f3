//! End-to-end configuration resolution.

use crate::config::decode::ConfigDecoder;
use crate::config::environment::Environment;
use crate::config::loader::ConfigLoader;
use crate::config::overrides::apply_overrides;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::paths;
use crate::platform::{OsPlatform, Platform};

/// Builder for a resolved [`Config`].
///
/// Resolution runs in a fixed order: load and merge the three layers, decode,
/// apply conditional overrides, validate, then derive the kubeconfig path.
/// Every input is explicit, so the same builder inputs always produce the
/// same result.
///
/// # Examples
///
/// ```
/// use headlamp_config::config::{ConfigBuilder, Environment};
/// # use std::path::{Path, PathBuf};
/// # struct Scratch(tempfile::TempDir);
/// # impl headlamp_config::Platform for Scratch {
/// #     fn config_dir(&self) -> Option<PathBuf> { Some(self.0.path().join("config")) }
/// #     fn home_dir(&self) -> Option<PathBuf> { Some(self.0.path().join("home")) }
/// #     fn current_exe(&self) -> std::io::Result<PathBuf> { Ok(self.0.path().join("headlamp")) }
/// #     fn create_dir_all(&self, path: &Path) -> std::io::Result<()> { std::fs::create_dir_all(path) }
/// #     fn is_windows(&self) -> bool { false }
/// # }
/// # let platform = Scratch(tempfile::tempdir().unwrap());
///
/// let config = ConfigBuilder::new()
///     .with_args(["headlamp", "--in-cluster", "--base-url=/headlamp"])
///     .with_environment(Environment::from_pairs([("HEADLAMP_CONFIG_PORT", "9000")]))
///     .with_platform(platform)
///     .build()
///     .unwrap();
///
/// assert!(config.in_cluster);
/// assert_eq!(config.port, 9000);
/// assert_eq!(config.base_url, "/headlamp");
/// assert!(!config.should_watch_plugins());
/// ```
pub struct ConfigBuilder {
    args: Vec<String>,
    env: Environment,
    platform: Box<dyn Platform>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// A builder with no arguments, an empty environment and the real OS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            env: Environment::empty(),
            platform: Box::new(OsPlatform),
        }
    }

    /// Set the argument list. The first element is the program name.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the environment snapshot.
    #[must_use]
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Set the platform used for directories and the executable path.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Platform + 'static) -> Self {
        self.platform = Box::new(platform);
        self
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first error from parsing, decoding, validation or path
    /// derivation. No partially resolved configuration is returned. The
    /// caller reports the error; it is only logged at debug level here.
    pub fn build(&self) -> Result<Config> {
        self.resolve()
            .inspect_err(|e| log::debug!("config resolution failed: {e}"))
    }

    fn resolve(&self) -> Result<Config> {
        let values = ConfigLoader::load(self.args.as_slice(), &self.env, self.platform.as_ref())?;
        for (key, layered) in values.iter() {
            log::debug!("{key} = {:?} ({})", layered.value, layered.origin);
        }

        let mut config = ConfigDecoder::decode(&values)?;
        apply_overrides(&mut config);
        ConfigValidator::validate(&config)?;
        paths::resolve_kubeconfig(&mut config, &self.env, self.platform.as_ref())?;

        Ok(config)
    }
}

/// Resolve the configuration for this process.
///
/// `args` is the full argument list, program name first. The environment is
/// snapshotted from the process and the real OS is used for paths.
///
/// # Errors
///
/// See [`ConfigBuilder::build`].
///
/// # Examples
///
/// ```no_run
/// let config = headlamp_config::parse(std::env::args()).unwrap();
/// println!("listening on port {}", config.port);
/// ```
pub fn parse<I, S>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ConfigBuilder::new()
        .with_args(args)
        .with_environment(Environment::from_process())
        .build()
}
