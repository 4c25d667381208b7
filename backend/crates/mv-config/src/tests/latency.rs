use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LatencyConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_latency_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _invoke = EnvGuard::set("MV_LATENCY_INVOKE_MS", "60001");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_no_latency_when_validate_then_ok_and_durations_zero() {
    let latency = LatencyConfig::none();

    assert_that!(latency.validate(), ok(anything()));
    assert_that!(latency.auth(), eq(Duration::ZERO));
    assert_that!(latency.invoke(), eq(Duration::ZERO));
}

#[test]
fn given_defaults_when_converted_then_durations_match_millis() {
    let latency = LatencyConfig::default();

    assert_that!(latency.auth(), eq(Duration::from_millis(500)));
    assert_that!(latency.sign_out(), eq(Duration::from_millis(200)));
    assert_that!(latency.query(), eq(Duration::from_millis(100)));
    assert_that!(latency.insert(), eq(Duration::from_millis(200)));
    assert_that!(latency.upload(), eq(Duration::from_millis(500)));
    assert_that!(latency.invoke(), eq(Duration::from_millis(1500)));
}
