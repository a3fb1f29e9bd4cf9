use versolve_core::config::{dirs_path, GlobalConfig};

#[test]
fn test_global_config_defaults() {
    let config = GlobalConfig::default();
    assert!(config.index.path.is_none());
    assert!(!config.resolve.show_rejections);
}

#[test]
fn test_global_config_empty_toml() {
    let config: GlobalConfig = toml::from_str("").unwrap();
    assert!(config.index.path.is_none());
    assert!(!config.resolve.show_rejections);
}

#[test]
fn test_dirs_path_contains_versolve() {
    assert!(dirs_path().ends_with(".versolve"));
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
[index]
path = "/srv/index.json"

[resolve]
show-rejections = true
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.index.path.as_deref(), Some("/srv/index.json"));
    assert!(config.resolve.show_rejections);
    assert_eq!(
        config.index_path(),
        Some(std::path::PathBuf::from("/srv/index.json"))
    );
}

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let config = GlobalConfig::load_from(&tmp.path().join("config.toml")).unwrap();
    assert!(config.index.path.is_none());
}

#[test]
fn test_load_from_invalid_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[resolve]\nshow-rejections = \"maybe\"\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse global config"));
}
