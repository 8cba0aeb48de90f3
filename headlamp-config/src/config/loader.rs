//! Flag parsing and layered loading.
//!
//! [`ConfigLoader::load`] merges the three sources in precedence order:
//!
//! 1. registry defaults
//! 2. `HEADLAMP_CONFIG_*` environment variables
//! 3. flags named on the invocation
//!
//! Flags are parsed before the environment is read, and only the flags that
//! were actually supplied are written back on top. A flag the user did not
//! type therefore never hides an environment value.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::parser::ValueSource;

use crate::config::environment::Environment;
use crate::config::merger::LayeredValues;
use crate::config::options;
use crate::error::{Error, Result};
use crate::platform::Platform;

/// The flags supplied on an invocation, with their raw values.
///
/// Captured once at parse time; the loader re-applies exactly this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitFlags {
    values: Vec<(&'static str, String)>,
}

impl ExplicitFlags {
    /// Parse an argument list against the option registry.
    ///
    /// `args` must not include the program name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for unknown flags, missing values and stray
    /// positional arguments, and [`Error::HelpRequested`] for `--help`.
    ///
    /// Registered options are also accepted with a single dash, as in
    /// `-in-cluster` or `-port=9000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use headlamp_config::config::ExplicitFlags;
    ///
    /// let flags = ExplicitFlags::parse(&["--dev", "--port=9000"]).unwrap();
    /// assert_eq!(flags.get("dev"), Some("true"));
    /// assert_eq!(flags.get("port"), Some("9000"));
    /// assert!(!flags.contains("in-cluster"));
    /// ```
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        // clap expects a binary name in front
        let argv = std::iter::once("headlamp".to_string())
            .chain(args.iter().map(|arg| long_form(arg.as_ref())));
        let matches = options::command()
            .try_get_matches_from(argv)
            .map_err(parse_error)?;

        let values = options::all()
            .iter()
            .filter(|spec| matches.value_source(spec.name) == Some(ValueSource::CommandLine))
            .filter_map(|spec| {
                matches
                    .get_one::<String>(spec.name)
                    .map(|value| (spec.name, value.clone()))
            })
            .collect();

        Ok(Self { values })
    }

    /// Whether an option was supplied as a flag.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|(key, _)| *key == name)
    }

    /// The raw value of a supplied flag.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over supplied flags in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Number of supplied flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no flag was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rewrite `-name[=value]` to `--name[=value]` when `name` is registered.
fn long_form(arg: &str) -> String {
    let Some(rest) = arg.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
        return arg.to_string();
    };
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if name == "help" || options::lookup(name).is_some() {
        format!("-{arg}")
    } else {
        arg.to_string()
    }
}

fn parse_error(err: clap::Error) -> Error {
    let rendered = err.render().to_string();

    if matches!(err.kind(), ErrorKind::DisplayHelp) {
        return Error::HelpRequested { text: rendered };
    }

    let token = [ContextKind::InvalidArg, ContextKind::InvalidValue]
        .into_iter()
        .find_map(|kind| match err.get(kind) {
            Some(ContextValue::String(s)) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_else(|| "<arguments>".to_string());

    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();

    Error::Parse { token, message }
}

/// Merges defaults, environment and flags into one [`LayeredValues`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load all three layers.
    ///
    /// `args` is the full argument list; its first element is the program
    /// name and is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use headlamp_config::config::{ConfigLoader, Environment, Origin};
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
    /// let env = Environment::from_pairs([
    ///     ("HEADLAMP_CONFIG_PORT", "9000"),
    ///     ("HEADLAMP_CONFIG_DEV", "true"),
    /// ]);
    /// let values = ConfigLoader::load(&["headlamp", "--dev=false"], &env, &platform).unwrap();
    ///
    /// assert_eq!(values.value("port"), Some("9000"));
    /// assert_eq!(values.value("dev"), Some("false"));
    /// assert_eq!(values.origin("dev"), Some(Origin::Flag));
    /// ```
    pub fn load<S: AsRef<str>>(
        args: &[S],
        env: &Environment,
        platform: &dyn Platform,
    ) -> Result<LayeredValues> {
        let args = args.get(1..).unwrap_or_default();

        let mut values = LayeredValues::from_defaults(platform);
        let explicit = ExplicitFlags::parse(args)?;
        values.overlay_environment(env);
        values.apply_flags(&explicit);

        log::debug!(
            "loaded {} options ({} from flags)",
            values.len(),
            explicit.len()
        );
        Ok(values)
    }
}
