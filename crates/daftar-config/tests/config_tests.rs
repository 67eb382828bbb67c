use std::path::PathBuf;

use tempfile::tempdir;

use daftar_config::{Config, ConfigManager};

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    let config = manager.load().expect("load defaults");
    assert_eq!(config.owner, "owner");
    assert!(config.data_root.is_none());
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    let mut config = Config::default();
    config.owner = "corner-shop".into();
    config.data_root = Some(PathBuf::from("/var/lib/daftar"));
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.owner, "corner-shop");
    assert_eq!(loaded.data_root.as_deref(), Some("/var/lib/daftar".as_ref()));
    assert!(manager.config_path().exists());
}

#[test]
fn data_root_resolution_prefers_explicit_path() {
    let base = PathBuf::from("/tmp/daftar-base");

    let config = Config::default();
    assert_eq!(config.resolve_data_root(&base), base.join("ledger"));

    let mut config = Config::default();
    config.data_root = Some(PathBuf::from("/elsewhere"));
    assert_eq!(config.resolve_data_root(&base), PathBuf::from("/elsewhere"));
}
