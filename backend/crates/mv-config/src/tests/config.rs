use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.storage.namespace.as_str(), eq(crate::DEFAULT_NAMESPACE));
    assert_that!(config.latency.auth_ms, eq(crate::DEFAULT_AUTH_LATENCY_MS));
    assert_that!(config.latency.invoke_ms, eq(crate::DEFAULT_INVOKE_LATENCY_MS));
    assert_that!(config.gateway.enabled, eq(false));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [storage]
              namespace = "clinic_db"

              [latency]
              query_ms = 5

              [logging]
              level = "debug"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.namespace.as_str(), eq("clinic_db"));
    assert_that!(config.latency.query_ms, eq(5));
    assert_that!(config.latency.auth_ms, eq(crate::DEFAULT_AUTH_LATENCY_MS));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[latency]\ninsert_ms = 900").unwrap();
    let _insert = EnvGuard::set("MV_LATENCY_INSERT_MS", "7");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.latency.insert_ms, eq(7));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _enabled = EnvGuard::set("MV_GATEWAY_ENABLED", "1");
    let _model = EnvGuard::set("MV_GATEWAY_MODEL", "google/gemini-2.5-flash");
    let _colored = EnvGuard::set("MV_LOG_COLORED", "false");
    let _file = EnvGuard::set("MV_LOG_FILE", "mv.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.gateway.enabled, eq(true));
    assert_that!(config.gateway.model.as_str(), eq("google/gemini-2.5-flash"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("mv.log")));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _query = EnvGuard::set("MV_LATENCY_QUERY_MS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.latency.query_ms, eq(crate::DEFAULT_QUERY_LATENCY_MS));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[storage\nnamespace = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("cfg");
    let _guard = EnvGuard::set("MV_CONFIG_DIR", nested.to_str().unwrap());
    let _unset = EnvGuard::remove("MV_STORAGE_DIR");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(nested.exists());
    assert_that!(config.storage_path().unwrap(), eq(&nested.join("data")));
}
