// src/lib.rs

pub mod cli;
pub mod config;
pub mod env;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod plan;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::resolve_config;
use crate::env::RealEnvironment;
use crate::exec::{LaunchBackend, RealLaunchBackend};
use crate::fs::RealFileSystem;
use crate::plan::{LaunchPlan, plan_launch};

/// High-level entry point used by `main.rs`.
///
/// Returns the exit code the launcher should terminate with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config_path = args.config.as_ref().map(PathBuf::from);
    let cfg = resolve_config(config_path.as_deref())?;

    let plan = plan_launch(&cfg, &RealEnvironment, &RealFileSystem);

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(0);
    }

    let mut backend = RealLaunchBackend::new();
    Ok(run_plan(plan, &mut backend).await?)
}

/// Hand the planned invocation to `backend` and return its exit code.
pub async fn run_plan(
    plan: LaunchPlan,
    backend: &mut dyn LaunchBackend,
) -> crate::errors::Result<i32> {
    backend.launch(plan.invocation).await
}

fn print_dry_run(plan: &LaunchPlan) {
    println!("ioclaunch dry-run");
    println!("  supervisor path: {}", plan.supervisor_path.display());
    println!("  branch: {}", plan.branch);
    for (key, value) in &plan.invocation.env {
        println!("  env: {key}={value}");
    }
    println!("  command: {}", plan.invocation);

    debug!("dry-run complete (nothing started)");
}
