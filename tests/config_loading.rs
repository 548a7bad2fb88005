// tests/config_loading.rs

use std::io::Write;

use ioclaunch::config::{
    LauncherConfig, default_config_path, load_and_validate, resolve_config, resolve_config_in,
};
use ioclaunch::errors::LauncherError;
use tempfile::NamedTempFile;

#[test]
fn empty_file_yields_defaults() {
    let file = NamedTempFile::new().unwrap();
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg, LauncherConfig::default());
}

#[test]
fn partial_file_overrides_only_named_keys() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[launcher]
interpreter = 'D:\Python27\pythonw.exe'

[supervisor]
log_file = "ioc.log"
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    let defaults = LauncherConfig::default();

    assert_eq!(cfg.launcher.interpreter, r"D:\Python27\pythonw.exe");
    assert_eq!(cfg.supervisor.log_file, "ioc.log");
    assert_eq!(cfg.launcher.worker, defaults.launcher.worker);
    assert_eq!(cfg.launcher.arch_var, "EPICS_HOST_ARCH");
    assert_eq!(cfg.supervisor.session_name, "NIKONKS-SYNC");
    assert_eq!(cfg.supervisor.pid_file, "pid.txt");
}

#[test]
fn template_without_placeholder_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[launcher]
supervisor_template = 'C:\procServ\procServ.exe'
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(LauncherError::ConfigError(msg)) => assert!(msg.contains("{arch}")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_key_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[launcher]
wrker = "typo.py"
"#
    )
    .unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(LauncherError::TomlError(_))
    ));
}

#[test]
fn explicit_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        resolve_config(Some(missing.as_path())),
        Err(LauncherError::IoError(_))
    ));
}

#[test]
fn config_in_directory_is_picked_up_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(default_config_path()),
        "[supervisor]\nsession_name = \"BENCH-SYNC\"\n",
    )
    .unwrap();

    let cfg = resolve_config_in(dir.path(), None).unwrap();
    assert_eq!(cfg.supervisor.session_name, "BENCH-SYNC");
    assert_eq!(cfg.launcher.worker, "nikonKsSync.py");
}

#[test]
fn no_config_in_directory_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let cfg = resolve_config_in(dir.path(), None).unwrap();
    assert_eq!(cfg, LauncherConfig::default());
}

#[test]
fn invalid_config_in_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(default_config_path()),
        "[launcher]\nworker = \"\"\n",
    )
    .unwrap();

    match resolve_config_in(dir.path(), None) {
        Err(LauncherError::ConfigError(msg)) => assert!(msg.contains("worker")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn relative_explicit_path_is_resolved_against_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("site.toml"), "[supervisor]\npid_file = \"ioc.pid\"\n").unwrap();

    let cfg = resolve_config_in(dir.path(), Some(std::path::Path::new("site.toml"))).unwrap();
    assert_eq!(cfg.supervisor.pid_file, "ioc.pid");
}
