// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`process`] starts one [`Invocation`](crate::plan::Invocation) with
//!   `tokio::process::Command`, waits for it and maps its exit status.
//! - [`backend`] provides the `LaunchBackend` trait and the concrete
//!   `RealLaunchBackend` used in production, which tests replace with a
//!   recording fake.

pub mod backend;
pub mod process;

pub use backend::{LaunchBackend, RealLaunchBackend};
pub use process::{exit_code, run_invocation};
