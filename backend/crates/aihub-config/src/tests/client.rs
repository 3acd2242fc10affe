use crate::tests::{EnvGuard, setup_config_dir};
use crate::{ClientConfig, Config};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Validation Tests - Client
// =========================================================================

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("AIHUB_BASE_URL", "127.0.0.1:8000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("Invalid [client] setting: base_url"));
}

#[test]
#[serial]
fn given_https_base_url_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("AIHUB_BASE_URL", "https://auth.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_timeout_above_max_when_validate_then_error() {
    let config = ClientConfig {
        request_timeout_secs: crate::MAX_REQUEST_TIMEOUT_SECS + 1,
        ..ClientConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_timeout_when_request_timeout_then_none() {
    let config = ClientConfig::default();

    assert_that!(config.request_timeout(), none());
}

#[test]
fn given_nonzero_timeout_when_request_timeout_then_duration() {
    let config = ClientConfig {
        request_timeout_secs: 5,
        ..ClientConfig::default()
    };

    assert_that!(config.request_timeout(), some(eq(Duration::from_secs(5))));
}
