// src/config/validate.rs

use crate::config::model::{ARCH_PLACEHOLDER, LauncherConfig, RawLauncherConfig};
use crate::errors::{LauncherError, Result};

impl TryFrom<RawLauncherConfig> for LauncherConfig {
    type Error = crate::errors::LauncherError;

    fn try_from(raw: RawLauncherConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(LauncherConfig::new_unchecked(raw.launcher, raw.supervisor))
    }
}

fn validate_raw_config(cfg: &RawLauncherConfig) -> Result<()> {
    ensure_non_empty(cfg)?;
    validate_template(&cfg.launcher.supervisor_template)?;
    Ok(())
}

fn ensure_non_empty(cfg: &RawLauncherConfig) -> Result<()> {
    let fields = [
        ("[launcher].arch_var", &cfg.launcher.arch_var),
        ("[launcher].supervisor_template", &cfg.launcher.supervisor_template),
        ("[launcher].interpreter", &cfg.launcher.interpreter),
        ("[launcher].worker", &cfg.launcher.worker),
        ("[supervisor].session_name", &cfg.supervisor.session_name),
        ("[supervisor].pid_file", &cfg.supervisor.pid_file),
        ("[supervisor].log_file", &cfg.supervisor.log_file),
    ];

    for (key, value) in fields {
        if value.trim().is_empty() {
            return Err(LauncherError::ConfigError(format!("{key} must not be empty")));
        }
    }
    Ok(())
}

fn validate_template(template: &str) -> Result<()> {
    match template.matches(ARCH_PLACEHOLDER).count() {
        1 => Ok(()),
        n => Err(LauncherError::ConfigError(format!(
            "[launcher].supervisor_template must contain '{ARCH_PLACEHOLDER}' exactly once (found {n}): {template}"
        ))),
    }
}
