use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of `config.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "triviatui").map(|dirs| dirs.config_dir().join("config.yaml"))
}

pub fn parse_file_config(content: &str) -> Result<FileConfig, String> {
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
}

/// Read `path`. A missing default file is fine; a missing explicit one is not.
pub fn load_file_config(path: &Path, explicit: bool) -> Result<FileConfig, String> {
    if !path.exists() {
        if explicit {
            return Err(format!("Config file not found: {}", path.display()));
        }
        return Ok(FileConfig::default());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    parse_file_config(&content).map_err(|e| format!("{} ({})", e, path.display()))
}

/// CLI flags win over the file, the file wins over defaults.
pub fn merge(cli: &Cli, file: FileConfig) -> Config {
    let base_url = cli
        .base_url
        .clone()
        .or(file.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout_secs = cli
        .timeout
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

    Config {
        base_url,
        timeout,
        log_file: cli.log_file.clone().or(file.log_file),
        log_filter: file.log_filter.unwrap_or_else(|| "info".to_string()),
    }
}

pub fn resolve(cli: &Cli) -> Result<Config, String> {
    let file = match &cli.config {
        Some(path) => load_file_config(path, true)?,
        None => match default_config_path() {
            Some(path) => load_file_config(&path, false)?,
            None => FileConfig::default(),
        },
    };
    Ok(merge(cli, file))
}
