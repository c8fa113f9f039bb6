// ABOUTME: Unit tests for client configuration loaded from the environment
// ABOUTME: Validates required variables, defaults, timeout parsing and production URL rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use serial_test::serial;
use weekfit::config::{ClientConfig, Environment};
use weekfit::constants::env_config;
use weekfit::errors::ErrorCode;

const VARS: [&str; 5] = [
    env_config::API_URL,
    env_config::HTTP_TIMEOUT_SECS,
    env_config::HTTP_CONNECT_TIMEOUT_SECS,
    env_config::TOKEN_PATH,
    env_config::ENVIRONMENT,
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert_eq!(Environment::Production.to_string(), "production");
}

#[test]
#[serial]
fn test_api_url_is_required() {
    clear_env();
    let error = ClientConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains(env_config::API_URL));
}

#[test]
#[serial]
fn test_defaults_and_overrides() {
    clear_env();
    env::set_var(env_config::API_URL, "http://localhost:4000/api");
    env::set_var(env_config::TOKEN_PATH, "/tmp/weekfit-config-test/token");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_base_url.as_str(), "http://localhost:4000/api/");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    assert_eq!(
        config.token_path.to_str(),
        Some("/tmp/weekfit-config-test/token")
    );
    assert_eq!(config.environment, Environment::Development);

    env::set_var(env_config::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_config::HTTP_CONNECT_TIMEOUT_SECS, "2");
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.connect_timeout(), Duration::from_secs(2));
    clear_env();
}

#[test]
#[serial]
fn test_bad_timeout_is_rejected() {
    clear_env();
    env::set_var(env_config::API_URL, "https://api.example.com");
    env::set_var(env_config::TOKEN_PATH, "/tmp/weekfit-config-test/token");

    env::set_var(env_config::HTTP_TIMEOUT_SECS, "soon");
    let error = ClientConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    env::set_var(env_config::HTTP_TIMEOUT_SECS, "0");
    let error = ClientConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_production_requires_https() {
    clear_env();
    env::set_var(env_config::API_URL, "http://api.example.com");
    env::set_var(env_config::TOKEN_PATH, "/tmp/weekfit-config-test/token");
    env::set_var(env_config::ENVIRONMENT, "production");
    assert!(ClientConfig::from_env().is_err());

    env::set_var(env_config::API_URL, "https://api.example.com");
    let config = ClientConfig::from_env().unwrap();
    assert!(config.environment.is_production());
    clear_env();
}

#[test]
#[serial]
fn test_malformed_url() {
    clear_env();
    env::set_var(env_config::API_URL, "not a url");
    env::set_var(env_config::TOKEN_PATH, "/tmp/weekfit-config-test/token");
    let error = ClientConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}
