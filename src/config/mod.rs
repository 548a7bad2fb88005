// src/config/mod.rs

//! Launcher configuration.
//!
//! Every setting has a built-in default matching the site installation, so
//! a config file is only needed to override paths or names.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_config_path, load_and_validate, load_from_path, resolve_config,
    resolve_config_in,
};
pub use model::{
    ARCH_PLACEHOLDER, LauncherConfig, LauncherSection, RawLauncherConfig, SupervisorSection,
};
