// src/config/model.rs

use serde::Deserialize;

/// Placeholder in `supervisor_template` replaced by the host architecture.
pub const ARCH_PLACEHOLDER: &str = "{arch}";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [launcher]
/// arch_var = "EPICS_HOST_ARCH"
/// supervisor_template = 'C:\EPICS\extensions\bin\{arch}\procServ.exe'
/// interpreter = 'C:\Python27\pythonw.exe'
/// worker = "nikonKsSync.py"
///
/// [supervisor]
/// session_name = "NIKONKS-SYNC"
/// pid_file = "pid.txt"
/// log_file = "log.txt"
/// ```
///
/// Both sections and every key are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLauncherConfig {
    #[serde(default)]
    pub launcher: LauncherSection,

    #[serde(default)]
    pub supervisor: SupervisorSection,
}

/// Validated configuration. Build it with `LauncherConfig::try_from(raw)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub launcher: LauncherSection,
    pub supervisor: SupervisorSection,
}

impl LauncherConfig {
    pub(crate) fn new_unchecked(launcher: LauncherSection, supervisor: SupervisorSection) -> Self {
        Self {
            launcher,
            supervisor,
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::new_unchecked(LauncherSection::default(), SupervisorSection::default())
    }
}

/// `[launcher]` section: what to look for and what to run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherSection {
    /// Environment variable holding the host architecture (e.g. `win32-x86`).
    #[serde(default = "default_arch_var")]
    pub arch_var: String,

    /// Supervisor executable path; must contain `{arch}` exactly once.
    #[serde(default = "default_supervisor_template")]
    pub supervisor_template: String,

    /// Windowless Python interpreter.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Worker script, relative to the working directory.
    #[serde(default = "default_worker")]
    pub worker: String,
}

fn default_arch_var() -> String {
    "EPICS_HOST_ARCH".to_string()
}

fn default_supervisor_template() -> String {
    r"C:\EPICS\extensions\bin\{arch}\procServ.exe".to_string()
}

fn default_interpreter() -> String {
    r"C:\Python27\pythonw.exe".to_string()
}

fn default_worker() -> String {
    "nikonKsSync.py".to_string()
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            arch_var: default_arch_var(),
            supervisor_template: default_supervisor_template(),
            interpreter: default_interpreter(),
            worker: default_worker(),
        }
    }
}

/// `[supervisor]` section: values handed to procServ.
///
/// The PID and log files are created by procServ itself, relative to its
/// working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupervisorSection {
    #[serde(default = "default_session_name")]
    pub session_name: String,

    #[serde(default = "default_pid_file")]
    pub pid_file: String,

    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_session_name() -> String {
    "NIKONKS-SYNC".to_string()
}

fn default_pid_file() -> String {
    "pid.txt".to_string()
}

fn default_log_file() -> String {
    "log.txt".to_string()
}

impl Default for SupervisorSection {
    fn default() -> Self {
        Self {
            session_name: default_session_name(),
            pid_file: default_pid_file(),
            log_file: default_log_file(),
        }
    }
}
