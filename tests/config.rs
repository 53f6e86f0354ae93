//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use duplicator::config::EditorConfig;
use duplicator::config_paths;
use duplicator::editable::IndentSettings;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("duplicator"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.indentation_width, 4);
    assert!(!config.uses_tabs);
    assert_eq!(config.bundle_identifier, "duplicator");
    assert_eq!(config.indent_settings(), IndentSettings::spaces(4));
}

#[test]
fn test_config_serialize_deserialize() {
    let config = EditorConfig {
        indentation_width: 2,
        uses_tabs: true,
        bundle_identifier: "com.example.Duplicator".to_string(),
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: EditorConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let parsed: EditorConfig = serde_yaml::from_str("uses_tabs: true\n").unwrap();
    assert!(parsed.uses_tabs);
    assert_eq!(parsed.indentation_width, 4);
    assert_eq!(parsed.bundle_identifier, "duplicator");
}

#[test]
fn test_load_from_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("missing.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_load_from_invalid_yaml_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "indentation_width: [not, a, number]\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_save_to_then_load_from() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        indentation_width: 8,
        ..EditorConfig::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(EditorConfig::load_from(&path), config);
}
