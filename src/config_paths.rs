//! Where duplicator keeps its files
//!
//! `config.yaml` and `logs/` sit in one per-user directory:
//! `$XDG_CONFIG_HOME/duplicator` or `~/.config/duplicator` on Unix and macOS,
//! `%APPDATA%\duplicator` on Windows.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "duplicator";
const CONFIG_FILE_NAME: &str = "config.yaml";
const LOGS_DIR_NAME: &str = "logs";

/// Base name of the daily-rotated log file
pub const LOG_FILE_NAME: &str = "duplicator.log";

/// Per-user config directory, if the platform reports one
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join(LOGS_DIR_NAME))
}

/// Create the logs directory (and its parents) and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    create_dir(&logs)?;
    Ok(logs)
}

fn create_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}
