// src/env.rs

//! Environment inputs and outputs of the launcher.
//!
//! Reading goes through [`Environment`] so the host-architecture lookup can
//! be driven from tests without touching the real process environment.

use std::collections::HashMap;
use std::env::VarError;

use tracing::warn;

/// Variable that silences Cygwin's "MS-DOS style path detected" warnings.
pub const CYGWIN_VAR: &str = "CYGWIN";

/// Value assigned to [`CYGWIN_VAR`] for the launched process tree.
pub const CYGWIN_VALUE: &str = "nodosfilewarning";

/// Read-only view of environment variables.
pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Default)]
pub struct RealEnvironment;

impl Environment for RealEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        decode_var(key, std::env::var(key))
    }
}

/// Treat a value that is not valid UTF-8 as unset rather than guessing at it.
fn decode_var(key: &str, raw: std::result::Result<String, VarError>) -> Option<String> {
    match raw {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(value)) => {
            warn!(var = key, value = ?value, "ignoring environment variable that is not valid UTF-8");
            None
        }
    }
}

/// Fixed set of variables, for tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Host architecture read from `arch_var`.
///
/// An unset variable yields an empty string, which still produces a
/// candidate path; that path normally does not exist.
pub fn host_arch(env: &dyn Environment, arch_var: &str) -> String {
    match env.var(arch_var) {
        Some(arch) => arch,
        None => {
            warn!(var = arch_var, "host architecture variable is not set");
            String::new()
        }
    }
}

/// Variables set on the launched process, in both branches.
pub fn launch_env() -> Vec<(String, String)> {
    vec![(CYGWIN_VAR.to_string(), CYGWIN_VALUE.to_string())]
}
