use crate::ApiConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_api_config_when_validate_then_ok() {
    let config = ApiConfig::default();
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_base_url_without_scheme_when_validate_then_err() {
    let config = ApiConfig {
        base_url: "todos.example.com/api".to_string(),
        ..ApiConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_timeout_when_validate_then_err() {
    let config = ApiConfig {
        timeout_secs: 0,
        ..ApiConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_excessive_timeout_when_validate_then_err() {
    let config = ApiConfig {
        timeout_secs: 301,
        ..ApiConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}
