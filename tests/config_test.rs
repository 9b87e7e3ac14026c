//! Tests for loading configuration files.

use std::io::Write;
use strictly_rewind::{Config, Focus};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(*config.show_hints());
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "start_focus = \"history\"").unwrap();

    let config = Config::load_or_default(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.start_focus(), Focus::History);
    assert_eq!(config.log_file().to_str(), Some("strictly_rewind.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_hints = \"sometimes\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
