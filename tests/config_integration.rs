use comic_reader_ui::config::{AppConfig, LogFormat};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const BIN: &str = "comic-reader-ui";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("COMIC_SERVER__PORT");
        env::remove_var("COMIC_UI__SITE_NAME");
        env::remove_var("COMIC_UI__RESTORE_BANNER_MS");
        env::remove_var("CONFIG_FILE");
    }
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.ui.restore_banner_ms, 3000);
    assert_eq!(config.ui.static_dir, "static");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("COMIC_SERVER__PORT", "9090");
        env::set_var("COMIC_UI__SITE_NAME", "Panelhouse");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.site_name, "Panelhouse");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load_via_flag() {
    clear_env_vars();

    let file = write_config(
        r"
server:
  port: 7070
ui:
  restore_banner_ms: 5000
logging:
  format: json
",
    );
    let path = file.path().to_str().expect("utf-8 temp path");

    let config =
        AppConfig::load_from_args([BIN, "--config", path]).expect("Failed to load config file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.ui.restore_banner_ms, 5000);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn test_file_load_via_env() {
    clear_env_vars();

    let file = write_config("server:\n  port: 7171\n");
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config file");
    assert_eq!(config.server.port, 7171);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env_and_file() {
    clear_env_vars();

    let file = write_config("server:\n  port: 7070\n");
    unsafe {
        env::set_var("COMIC_SERVER__PORT", "9090");
    }
    let path = file.path().to_str().expect("utf-8 temp path");

    let config = AppConfig::load_from_args([BIN, "--config", path, "--port", "8181", "--json-logs"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.logging.format, LogFormat::Json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/nonexistent/comic-reader.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_zero_restore_window_rejected() {
    clear_env_vars();
    unsafe {
        env::set_var("COMIC_UI__RESTORE_BANNER_MS", "0");
    }

    let result = AppConfig::load_from_args([BIN]);
    assert!(result.is_err());

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let result = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).expect("Failed to remove ./config.yaml");

    let config = result.expect("Failed to load config");
    assert_eq!(config.server.port, 6060);
}
