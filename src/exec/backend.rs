// src/exec/backend.rs

//! Pluggable launch backend.
//!
//! `run_plan` talks to a `LaunchBackend` instead of spawning directly, so
//! tests can record what would have been started.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::plan::Invocation;

use super::process::run_invocation;

/// Trait abstracting how the chosen process is started.
pub trait LaunchBackend: Send {
    /// Start `invocation`, wait for it, and return its exit code.
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>>;
}

/// Backend that starts real OS processes.
#[derive(Debug, Clone, Default)]
pub struct RealLaunchBackend;

impl RealLaunchBackend {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchBackend for RealLaunchBackend {
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        Box::pin(async move { run_invocation(&invocation).await })
    }
}
