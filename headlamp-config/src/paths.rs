//! Derived filesystem locations.
//!
//! Headlamp keeps its per-user state under the OS configuration directory:
//!
//! - `<config>/Headlamp/plugins` for plugins
//! - `<config>/Headlamp/kubeconfigs` for kubeconfigs added through the UI
//!
//! On Windows an extra `Config` component is inserted after `Headlamp`, so
//! the layout matches the desktop app and the plugin tooling.
//!
//! Everything here goes through [`Platform`], never the process globals.

use std::path::PathBuf;

use crate::config::environment::{Environment, KUBECONFIG_ENV};
use crate::config::schema::{Config, Setting};
use crate::error::{Error, Result};
use crate::platform::Platform;

/// Top-level application directory name.
pub const APP_DIR: &str = "Headlamp";

/// Extra component inserted on Windows.
pub const WINDOWS_CONFIG_DIR: &str = "Config";

/// Leaf directory for plugins.
pub const PLUGINS_DIR: &str = "plugins";

/// Leaf directory for persisted kubeconfigs.
pub const KUBECONFIGS_DIR: &str = "kubeconfigs";

/// File name of the persisted kubeconfig.
pub const KUBECONFIG_FILE: &str = "config";

/// `<config dir>/Headlamp[/Config]/<leaf>`, or `None` when the platform has
/// no configuration directory.
///
/// # Examples
///
/// ```
/// use headlamp_config::{paths, OsPlatform};
///
/// if let Some(dir) = paths::app_config_dir(&OsPlatform, "plugins") {
///     assert!(dir.ends_with("plugins"));
/// }
/// ```
#[must_use]
pub fn app_config_dir(platform: &dyn Platform, leaf: &str) -> Option<PathBuf> {
    let mut dir = platform.config_dir()?;
    dir.push(APP_DIR);
    if platform.is_windows() {
        dir.push(WINDOWS_CONFIG_DIR);
    }
    dir.push(leaf);
    Some(dir)
}

/// The default `plugins-dir`, created if missing.
///
/// Failures are logged and produce an empty string, so a machine without a
/// usable configuration directory can still start without plugins.
#[must_use]
pub fn default_plugins_dir(platform: &dyn Platform) -> String {
    let Some(dir) = app_config_dir(platform, PLUGINS_DIR) else {
        log::error!("getting user config dir: no configuration directory on this platform");
        return String::new();
    };

    if let Err(e) = platform.create_dir_all(&dir) {
        log::error!("creating plugins directory {}: {e}", dir.display());
        return String::new();
    }

    dir.to_string_lossy().into_owned()
}

/// Create and return the directory used to persist kubeconfigs.
///
/// Falls back to the directory of the running executable when the
/// configuration directory is unavailable or cannot be created.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if neither location can be determined.
pub fn make_kubeconfigs_dir(platform: &dyn Platform) -> Result<PathBuf> {
    match app_config_dir(platform, KUBECONFIGS_DIR) {
        Some(dir) => match platform.create_dir_all(&dir) {
            Ok(()) => return Ok(dir),
            Err(e) => log::warn!(
                "cannot create {}: {e}; using the executable directory",
                dir.display()
            ),
        },
        None => log::warn!("no user config dir; using the executable directory"),
    }

    let exe = platform.current_exe().map_err(|e| {
        Error::path_resolution("kubeconfig persistence directory", None, e.to_string())
    })?;

    exe.parent().map(PathBuf::from).ok_or_else(|| {
        Error::path_resolution(
            "kubeconfig persistence directory",
            Some(&exe),
            "executable path has no parent directory".to_string(),
        )
    })
}

/// The persisted kubeconfig file inside [`make_kubeconfigs_dir`].
///
/// # Errors
///
/// Same as [`make_kubeconfigs_dir`].
pub fn default_kubeconfig_file(platform: &dyn Platform) -> Result<PathBuf> {
    Ok(make_kubeconfigs_dir(platform)?.join(KUBECONFIG_FILE))
}

/// `<home>/.kube/config`.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if the home directory is unknown.
pub fn default_kubeconfig_path(platform: &dyn Platform) -> Result<PathBuf> {
    let home = platform.home_dir().ok_or_else(|| Error::PathResolution {
        target: "default kubeconfig".to_string(),
        reason: "the current user has no home directory".to_string(),
    })?;
    Ok(home.join(".kube").join("config"))
}

/// Fill in the kubeconfig path when none was configured.
///
/// A non-empty configured value is kept as is. Otherwise, outside cluster
/// mode, `KUBECONFIG` is used when set and non-empty, then
/// `<home>/.kube/config`. In cluster mode nothing is derived.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if the home directory fallback is
/// needed and unavailable.
pub fn resolve_kubeconfig(
    config: &mut Config,
    env: &Environment,
    platform: &dyn Platform,
) -> Result<()> {
    if config.kubeconfig.value().is_some_and(|p| !p.is_empty()) || config.in_cluster {
        return Ok(());
    }

    let path = match env.get_non_empty(KUBECONFIG_ENV) {
        Some(path) => {
            log::debug!("kubeconfig from {KUBECONFIG_ENV}: {path}");
            path.to_string()
        }
        None => {
            let path = default_kubeconfig_path(platform)?;
            log::debug!("kubeconfig defaulted to {}", path.display());
            path.to_string_lossy().into_owned()
        }
    };

    config.kubeconfig = Setting::Default(path);
    Ok(())
}
