// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{LauncherConfig, RawLauncherConfig};
use crate::errors::Result;

/// Load a configuration file and return the raw, unvalidated config.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawLauncherConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawLauncherConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LauncherConfig> {
    let raw_config = load_from_path(&path)?;
    let config = LauncherConfig::try_from(raw_config)?;
    Ok(config)
}

/// Config file looked for in the working directory when `--config` is absent.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("ioclaunch.toml")
}

/// Pick the configuration for this invocation, relative to the working
/// directory. See [`resolve_config_in`].
pub fn resolve_config(explicit: Option<&Path>) -> Result<LauncherConfig> {
    resolve_config_in(Path::new("."), explicit)
}

/// Pick the configuration, looking for files under `dir`.
///
/// - An explicit path must exist and be valid; a relative one is taken
///   relative to `dir`.
/// - Without one, [`default_config_path`] under `dir` is used if present.
/// - Otherwise the built-in defaults apply.
pub fn resolve_config_in(dir: &Path, explicit: Option<&Path>) -> Result<LauncherConfig> {
    if let Some(path) = explicit {
        let path = dir.join(path);
        debug!(path = %path.display(), "loading launcher config");
        return load_and_validate(&path);
    }

    let fallback = dir.join(default_config_path());
    if fallback.is_file() {
        debug!(path = %fallback.display(), "loading launcher config from working directory");
        return load_and_validate(&fallback);
    }

    debug!("no launcher config file; using built-in defaults");
    Ok(LauncherConfig::default())
}
