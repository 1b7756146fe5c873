use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use triviatui::cli::Cli;
use triviatui::config::{self, FileConfig, DEFAULT_BASE_URL};

#[test]
fn test_defaults_without_file_or_flags() {
    let cli = Cli::parse_from(["triviatui"]);
    let cfg = config::merge(&cli, FileConfig::default());

    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeout, Some(Duration::from_secs(30)));
    assert_eq!(cfg.log_file, None);
    assert_eq!(cfg.log_filter, "info");
}

#[test]
fn test_file_overrides_defaults_and_flags_override_file() {
    let file = config::parse_file_config(
        "base_url: http://trivia.local:8080\ntimeout_secs: 5\nlog_file: /tmp/trivia.log\nlog_filter: debug\n",
    )
    .unwrap();

    let cli = Cli::parse_from(["triviatui"]);
    let cfg = config::merge(&cli, file.clone());
    assert_eq!(cfg.base_url, "http://trivia.local:8080");
    assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/trivia.log")));
    assert_eq!(cfg.log_filter, "debug");

    let cli = Cli::parse_from(["triviatui", "--base-url", "http://other:5000", "--timeout", "0"]);
    let cfg = config::merge(&cli, file);
    assert_eq!(cfg.base_url, "http://other:5000");
    assert_eq!(cfg.timeout, None);
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(config::parse_file_config("  \n").unwrap(), FileConfig::default());
}

#[test]
fn test_unknown_key_is_rejected() {
    assert!(config::parse_file_config("page_size: 20\n").is_err());
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let err = config::load_file_config(&path, true).unwrap_err();
    assert!(err.contains("config.yaml"), "error should name the file: {}", err);
    assert_eq!(config::load_file_config(&path, false).unwrap(), FileConfig::default());
}

#[test]
fn test_config_file_on_disk_is_merged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "base_url: http://trivia.local:8080/\ntimeout_secs: 12\n").unwrap();

    let cli = Cli::parse_from(["triviatui", "--config", path.to_str().unwrap()]);
    let cfg = config::resolve(&cli).unwrap();
    assert_eq!(cfg.base_url, "http://trivia.local:8080/");
    assert_eq!(cfg.timeout, Some(Duration::from_secs(12)));
    assert_eq!(cfg.log_filter, "info");
}

#[test]
fn test_invalid_yaml_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "base_url: [unclosed\n").unwrap();

    let err = config::load_file_config(&path, true).unwrap_err();
    assert!(err.starts_with("Invalid config"), "{}", err);
    assert!(err.contains(&path.display().to_string()), "{}", err);

    let cli = Cli::parse_from(["triviatui", "--config", path.to_str().unwrap()]);
    assert!(config::resolve(&cli).is_err());
}

#[test]
fn test_print_page_must_be_positive() {
    assert!(Cli::try_parse_from(["triviatui", "--print-page", "0"]).is_err());
    let cli = Cli::try_parse_from(["triviatui", "--print-page", "2"]).unwrap();
    assert_eq!(cli.print_page, Some(2));
}
