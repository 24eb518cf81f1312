//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use registrar::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("REGISTRAR_APPLICATION_LOG_LEVEL");
    std::env::remove_var("REGISTRAR_REPORT_STORE_ROOT_PATH");
    std::env::remove_var("REGISTRAR_UPLOADS_ROOT_PATH");
    std::env::remove_var("REGISTRAR_GRADEBOOK_BASE_URL");
    std::env::remove_var("REGISTRAR_GRADEBOOK_API_KEY");
    std::env::remove_var("REGISTRAR_GRADEBOOK_TIMEOUT_SECONDS");
    std::env::remove_var("TEST_GRADEBOOK_KEY");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const COMPLETE_CONFIG: &str = r#"
[application]
name = "registrar"
log_level = "debug"

[report_store]
root_path = "/var/lib/registrar/reports"

[uploads]
root_path = "/var/lib/registrar/uploads"

[gradebook]
base_url = "https://gradebook.example.com/api/v1/submit"
api_key = "plain-key"
timeout_seconds = 45

[logging]
local_enabled = true
local_path = "/var/log/registrar"
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.name, "registrar");
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.report_store.root_path, "/var/lib/registrar/reports");
    assert_eq!(config.uploads.root_path, "/var/lib/registrar/uploads");

    let gradebook = config.gradebook.unwrap();
    assert_eq!(
        gradebook.base_url,
        "https://gradebook.example.com/api/v1/submit"
    );
    assert_eq!(gradebook.timeout_seconds, 45);

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_minimal_config_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
name = "registrar"

[report_store]
root_path = "reports"

[uploads]
root_path = "uploads"
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(config.gradebook.is_none());
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "logs");
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_substitution_in_gradebook_key() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_GRADEBOOK_KEY", "secret-from-env");

    let file = write_config(
        r#"
[application]
name = "registrar"

[report_store]
root_path = "reports"

[uploads]
root_path = "uploads"

[gradebook]
base_url = "https://gradebook.example.com/api"
api_key = "${TEST_GRADEBOOK_KEY}"
"#,
    );
    let config = load_config(file.path()).unwrap();

    let gradebook = config.gradebook.unwrap();
    assert_eq!(gradebook.api_key.expose_secret(), "secret-from-env");
    // default applies when timeout is omitted
    assert_eq!(gradebook.timeout_seconds, 30);

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_fails_load() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
name = "registrar"

[report_store]
root_path = "reports"

[uploads]
root_path = "uploads"

[gradebook]
base_url = "https://gradebook.example.com/api"
api_key = "${REGISTRAR_TEST_UNSET_KEY}"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("REGISTRAR_TEST_UNSET_KEY"));
}

#[test]
fn test_env_overrides_take_precedence() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("REGISTRAR_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("REGISTRAR_REPORT_STORE_ROOT_PATH", "/override/reports");
    std::env::set_var("REGISTRAR_GRADEBOOK_TIMEOUT_SECONDS", "90");

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.report_store.root_path, "/override/reports");
    assert_eq!(config.gradebook.unwrap().timeout_seconds, 90);

    cleanup_env_vars();
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
name = "registrar"
log_level = "verbose"

[report_store]
root_path = "reports"

[uploads]
root_path = "uploads"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("log_level"));
}

#[test]
fn test_invalid_gradebook_url_fails_validation() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
name = "registrar"

[report_store]
root_path = "reports"

[uploads]
root_path = "uploads"

[gradebook]
base_url = "not a url"
api_key = "k"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("base_url"));
}

#[test]
fn test_secret_never_appears_in_debug_output() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("plain-key"));
}
