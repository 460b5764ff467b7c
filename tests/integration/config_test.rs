use chatbox_stats::core::{Config, Source};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_corrupt_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "port": 9123, "toggles": { "media": false } }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.port, 9123);
    assert_eq!(config.host, "127.0.0.1");
    assert!(!config.toggles.media);
    assert!(config.toggles.cpu);
    assert!(!config.toggles.amd_gpu);
    assert_eq!(config.interval(), Duration::from_millis(1500));
}

#[test]
fn test_changes_survive_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chatbox-stats").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("localhost".to_string(), 9001);
    config.set_toggle(Source::NvidiaGpu, false);
    config.set_toggle(Source::AmdGpu, true);
    config.toggles.use_24h_clock = false;
    config.interval_ms = 3000;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.toggles.is_enabled(Source::AmdGpu));
    assert!(!loaded.toggles.is_enabled(Source::NvidiaGpu));
}

#[test]
fn test_reset_restores_defaults() {
    let mut config = Config::default();
    config.set_endpoint("10.0.0.2".to_string(), 1234);
    config.set_toggle(Source::Os, false);

    config.reset_to_defaults();
    assert_eq!(config, Config::default());
}

#[test]
fn test_unresolvable_endpoint_is_an_error() {
    let mut config = Config::default();
    config.set_endpoint("no such host.invalid".to_string(), 9000);
    assert!(config.endpoint().is_err());
}
