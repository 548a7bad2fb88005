#![allow(dead_code)]

use ioclaunch::config::{LauncherConfig, RawLauncherConfig};

/// Builder for `LauncherConfig` to simplify test setup.
pub struct LauncherConfigBuilder {
    config: RawLauncherConfig,
}

impl LauncherConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawLauncherConfig::default(),
        }
    }

    pub fn arch_var(mut self, name: &str) -> Self {
        self.config.launcher.arch_var = name.to_string();
        self
    }

    pub fn supervisor_template(mut self, template: &str) -> Self {
        self.config.launcher.supervisor_template = template.to_string();
        self
    }

    pub fn interpreter(mut self, path: &str) -> Self {
        self.config.launcher.interpreter = path.to_string();
        self
    }

    pub fn worker(mut self, script: &str) -> Self {
        self.config.launcher.worker = script.to_string();
        self
    }

    pub fn session_name(mut self, name: &str) -> Self {
        self.config.supervisor.session_name = name.to_string();
        self
    }

    pub fn build(self) -> LauncherConfig {
        LauncherConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for LauncherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
