//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperwire::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HW_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HW_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("HW_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    // config/default.toml ships with the repo and pins these values.
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.selection.dimensions, 3);
    assert_eq!(config.animation.time_scale, 1.0);
}

#[test]
#[serial]
fn test_env_override_nested_section() {
    std::env::set_var("HW_ANIMATION__TIME_SCALE", "1.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.animation.time_scale, 1.5);
    std::env::remove_var("HW_ANIMATION__TIME_SCALE");
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, AppConfig::default().window.width);
}
