// src/exec/process.rs

//! Starting the chosen program.

use std::process::ExitStatus;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{LauncherError, Result};
use crate::plan::Invocation;

/// Start `invocation` with inherited stdio and wait for it to exit.
///
/// A failure to start is reported as [`LauncherError::Spawn`]; whatever the
/// child does after that is only visible through the returned exit code.
pub async fn run_invocation(invocation: &Invocation) -> Result<i32> {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);
    for (key, value) in &invocation.env {
        cmd.env(key, value);
    }

    debug!(
        program = %invocation.program,
        args = ?invocation.args,
        env = ?invocation.env,
        "starting process"
    );

    let mut child = cmd.spawn().map_err(|source| LauncherError::Spawn {
        program: invocation.program.clone(),
        source,
    })?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for '{}'", invocation.program))?;

    let code = exit_code(status);
    info!(
        program = %invocation.program,
        exit_code = code,
        success = status.success(),
        "process exited"
    );

    Ok(code)
}

/// Exit code to hand back to our own caller.
///
/// On Unix a signal-terminated child maps to `128 + signal`, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }

    1
}
