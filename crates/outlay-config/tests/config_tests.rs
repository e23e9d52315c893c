use outlay_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert_eq!(cfg.default_summary_period, "month");
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.default_summary_period = "week".to_string();

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.default_summary_period, "week");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, Config::default().currency);
}

#[test]
fn data_root_override_wins_over_fallback() {
    let dir = tempdir().expect("tempdir");

    let mut cfg = Config::default();
    cfg.default_data_root = Some(dir.path().to_path_buf());
    assert_eq!(cfg.resolve_default_data_root(), dir.path());

    cfg.default_data_root = None;
    assert!(cfg.resolve_default_data_root().ends_with("Expenses"));
}
