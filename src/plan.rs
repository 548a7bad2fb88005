// src/plan.rs

//! The launch decision.
//!
//! [`plan_launch`] checks for the supervisor once and returns the single
//! process to start. Nothing here spawns anything; see [`crate::exec`].

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{ARCH_PLACEHOLDER, LauncherConfig};
use crate::env::{Environment, host_arch, launch_env};
use crate::fs::FileSystem;

/// Which of the two programs gets started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// procServ runs the interpreter and worker under its management.
    Supervised,
    /// The interpreter runs the worker with no supervision.
    Direct,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Supervised => write!(f, "supervised"),
            Branch::Direct => write!(f, "direct"),
        }
    }
}

/// A single process to start: program, arguments and extra environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(s: &str) -> String {
    if s.is_empty() || s.contains(char::is_whitespace) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}

/// Outcome of the supervisor check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub branch: Branch,
    /// The path whose existence decided `branch`.
    pub supervisor_path: PathBuf,
    pub invocation: Invocation,
}

/// Substitute `arch` into the supervisor path template.
pub fn supervisor_path(template: &str, arch: &str) -> PathBuf {
    PathBuf::from(template.replacen(ARCH_PLACEHOLDER, arch, 1))
}

/// procServ arguments, in the order procServ expects them.
pub fn supervisor_args(cfg: &LauncherConfig) -> Vec<String> {
    let sup = &cfg.supervisor;
    let launcher = &cfg.launcher;
    vec![
        "--allow".to_string(),
        "-n".to_string(),
        sup.session_name.clone(),
        "-p".to_string(),
        sup.pid_file.clone(),
        "-L".to_string(),
        sup.log_file.clone(),
        "--logstamp".to_string(),
        "-e".to_string(),
        launcher.interpreter.clone(),
        "-i".to_string(),
        "--".to_string(),
        launcher.worker.clone(),
    ]
}

/// Decide how to start the worker.
pub fn plan_launch(
    cfg: &LauncherConfig,
    env: &dyn Environment,
    fs: &dyn FileSystem,
) -> LaunchPlan {
    let arch = host_arch(env, &cfg.launcher.arch_var);
    let path = supervisor_path(&cfg.launcher.supervisor_template, &arch);
    let present = fs.exists(&path);

    debug!(path = %path.display(), present, "checked for supervisor");

    let (branch, invocation) = if present {
        (
            Branch::Supervised,
            Invocation {
                program: path.to_string_lossy().into_owned(),
                args: supervisor_args(cfg),
                env: launch_env(),
            },
        )
    } else {
        (
            Branch::Direct,
            Invocation {
                program: cfg.launcher.interpreter.clone(),
                args: vec![cfg.launcher.worker.clone()],
                env: launch_env(),
            },
        )
    };

    info!(%branch, program = %invocation.program, "launch plan ready");

    LaunchPlan {
        branch,
        supervisor_path: path,
        invocation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvironment;
    use crate::fs::mock::MockFileSystem;

    fn win32_env() -> MapEnvironment {
        MapEnvironment::new().with_var("EPICS_HOST_ARCH", "win32-x86")
    }

    #[test]
    fn composes_path_from_template() {
        let p = supervisor_path(r"C:\EPICS\extensions\bin\{arch}\procServ.exe", "win32-x86");
        assert_eq!(p, PathBuf::from(r"C:\EPICS\extensions\bin\win32-x86\procServ.exe"));
    }

    #[test]
    fn present_supervisor_selects_supervised_branch() {
        let cfg = LauncherConfig::default();
        let fs = MockFileSystem::new();
        fs.add_file(r"C:\EPICS\extensions\bin\win32-x86\procServ.exe");

        let plan = plan_launch(&cfg, &win32_env(), &fs);

        assert_eq!(plan.branch, Branch::Supervised);
        assert_eq!(
            plan.invocation.program,
            r"C:\EPICS\extensions\bin\win32-x86\procServ.exe"
        );
        assert_eq!(
            plan.invocation.args,
            vec![
                "--allow",
                "-n",
                "NIKONKS-SYNC",
                "-p",
                "pid.txt",
                "-L",
                "log.txt",
                "--logstamp",
                "-e",
                r"C:\Python27\pythonw.exe",
                "-i",
                "--",
                "nikonKsSync.py",
            ]
        );
    }

    #[test]
    fn absent_supervisor_selects_direct_branch() {
        let cfg = LauncherConfig::default();
        let plan = plan_launch(&cfg, &win32_env(), &MockFileSystem::new());

        assert_eq!(plan.branch, Branch::Direct);
        assert_eq!(plan.invocation.program, r"C:\Python27\pythonw.exe");
        assert_eq!(plan.invocation.args, vec!["nikonKsSync.py"]);
    }

    #[test]
    fn cygwin_variable_is_set_in_both_branches() {
        let cfg = LauncherConfig::default();
        let fs = MockFileSystem::new();

        let direct = plan_launch(&cfg, &win32_env(), &fs);
        fs.add_file(&direct.supervisor_path);
        let supervised = plan_launch(&cfg, &win32_env(), &fs);

        for plan in [direct, supervised] {
            assert!(
                plan.invocation
                    .env
                    .contains(&("CYGWIN".to_string(), "nodosfilewarning".to_string()))
            );
        }
    }

    #[test]
    fn supervisor_for_other_arch_is_ignored() {
        let cfg = LauncherConfig::default();
        let fs = MockFileSystem::new();
        fs.add_file(r"C:\EPICS\extensions\bin\windows-x64\procServ.exe");

        let plan = plan_launch(&cfg, &win32_env(), &fs);
        assert_eq!(plan.branch, Branch::Direct);
    }

    #[test]
    fn missing_arch_variable_checks_empty_segment() {
        let cfg = LauncherConfig::default();
        let plan = plan_launch(&cfg, &MapEnvironment::new(), &MockFileSystem::new());

        assert_eq!(
            plan.supervisor_path,
            PathBuf::from(r"C:\EPICS\extensions\bin\\procServ.exe")
        );
        assert_eq!(plan.branch, Branch::Direct);
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let inv = Invocation {
            program: r"C:\Program Files\Python27\pythonw.exe".to_string(),
            args: vec!["nikonKsSync.py".to_string()],
            env: vec![],
        };
        assert_eq!(
            inv.to_string(),
            r#""C:\Program Files\Python27\pythonw.exe" nikonKsSync.py"#
        );
    }
}
