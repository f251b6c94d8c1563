//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use patas::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("PATAS_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("PATAS_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_numbers() {
    std::env::set_var("PATAS_MOVEMENT__SPEED", "75.5");
    std::env::set_var("PATAS_WINDOW__MAX_FRAMES", "12");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("PATAS_MOVEMENT__SPEED");
    std::env::remove_var("PATAS_WINDOW__MAX_FRAMES");

    assert_eq!(config.movement.speed, 75.5);
    assert_eq!(config.window.max_frames, Some(12));
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let from_file = AppConfig::load().unwrap();
    let builtin = AppConfig::default();
    assert_eq!(from_file.window.width, builtin.window.width);
    assert_eq!(from_file.movement.waypoints, builtin.movement.waypoints);
    assert_eq!(from_file.movement.arrival_range, builtin.movement.arrival_range);
    assert_eq!(from_file.assets.default_texture, builtin.assets.default_texture);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("default.toml"),
        "[window]\ntitle = \"From Default\"\nwidth = 800\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("user.toml"), "[window]\nwidth = 640\n").unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.window.title, "From Default");
    assert_eq!(config.window.width, 640);
    assert_eq!(config.window.height, 1080);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(dir.path().join("nope")).unwrap();
    assert_eq!(config.window.title, "Patas Engine");
}

#[test]
#[serial]
fn test_bad_value_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();
    let err = AppConfig::load_from(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config = AppConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.movement.waypoints, config.movement.waypoints);
    assert_eq!(parsed.debug.log_file, config.debug.log_file);
}
