use std::env;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use folio_config::{
    ConfigLoadError, ShowcaseConfig, ShowcaseConfigSource, load_showcase,
};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const PATH_VAR: &str = "SHOWCASE_CONFIG_PATH";
const JSON_VAR: &str = "SHOWCASE_CONFIG_JSON";

const SAMPLE_TOML: &str = r#"
[[sections]]
key = "salahmate"
title = "SalahMate"

[[sections.items]]
source = "/projects/project10/ss1.png"
label = "SalahMate splash screen"
aspect = "9/16"
"#;

/// Holds the env lock and restores the working directory and variables.
struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
    cwd: std::path::PathBuf,
}

impl EnvGuard {
    fn new() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let cwd = env::current_dir().unwrap();
        clear_vars();
        Self { _lock: lock, cwd }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_vars();
        let _ = env::set_current_dir(&self.cwd);
    }
}

fn clear_vars() {
    // SAFETY: every test in this file holds ENV_LOCK while touching the
    // environment.
    unsafe {
        env::remove_var(PATH_VAR);
        env::remove_var(JSON_VAR);
    }
}

fn set_var(key: &str, value: impl AsRef<std::ffi::OsStr>) {
    // SAFETY: see `clear_vars`.
    unsafe { env::set_var(key, value) }
}

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn env_path_wins_over_inline_json() {
    let _guard = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "custom.toml", SAMPLE_TOML);
    set_var(PATH_VAR, &path);
    set_var(JSON_VAR, r#"{"sections":[]}"#);

    let (config, source) = ShowcaseConfig::load_from_env().unwrap();
    assert_eq!(source, ShowcaseConfigSource::EnvPath(path));
    assert_eq!(config.sections.len(), 1);
}

#[test]
fn inline_json_is_used_when_no_path() {
    let _guard = EnvGuard::new();
    set_var(
        JSON_VAR,
        r#"{"visibility":{"threshold":0.5},"sections":[{"key":"a"}]}"#,
    );

    let (config, source) = ShowcaseConfig::load_from_env().unwrap();
    assert_eq!(source, ShowcaseConfigSource::EnvInline);
    assert_eq!(config.visibility.threshold, 0.5);
    assert_eq!(config.sections[0].key.as_str(), "a");
}

#[test]
fn default_candidate_file_is_discovered() {
    let _guard = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config/showcase.toml", SAMPLE_TOML);
    env::set_current_dir(dir.path()).unwrap();

    let (config, source) = ShowcaseConfig::load_from_env().unwrap();
    assert_eq!(
        source,
        ShowcaseConfigSource::File("config/showcase.toml".into())
    );
    assert_eq!(config.sections[0].title, "SalahMate");
}

#[test]
fn falls_back_to_defaults() {
    let _guard = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let (config, source) = ShowcaseConfig::load_from_env().unwrap();
    assert_eq!(source, ShowcaseConfigSource::Default);
    assert!(config.sections.is_empty());
}

#[test]
fn extensionless_file_is_sniffed() {
    let _guard = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "showcase", r#"{"sections":[{"key":"b"}]}"#);
    let config = ShowcaseConfig::load_from_file(&path).unwrap();
    assert_eq!(config.sections[0].key.as_str(), "b");
}

#[test]
fn missing_file_is_an_io_error() {
    let _guard = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    set_var(PATH_VAR, dir.path().join("absent.toml"));
    let err = ShowcaseConfig::load_from_env().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io { .. }), "{err}");
}

#[test]
fn load_showcase_enforces_guard_rails() {
    let _guard = EnvGuard::new();
    set_var(
        JSON_VAR,
        r#"{"sections":[{"key":"a","items":[]},{"key":"a","items":[]}]}"#,
    );
    let err = load_showcase().unwrap_err();
    assert!(matches!(err, ConfigLoadError::GuardRail(_)), "{err}");
}

#[test]
fn load_showcase_collects_warnings() {
    let _guard = EnvGuard::new();
    set_var(JSON_VAR, r#"{"sections":[{"key":"a","items":[]}]}"#);
    let load = load_showcase().unwrap();
    assert_eq!(load.source, ShowcaseConfigSource::EnvInline);
    assert_eq!(load.warnings.len(), 1);
}
