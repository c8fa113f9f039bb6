// ABOUTME: REST client configuration loaded from environment variables
// ABOUTME: API base URL, HTTP timeouts, and the token file location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;
use weekfit_core::constants::{defaults, env_config};
use weekfit_core::errors::{AppError, AppResult};

use super::types::Environment;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto
    pub api_base_url: Url,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Where the bearer token is persisted
    pub token_path: PathBuf,
    /// Deployment environment
    pub environment: Environment,
}

impl ClientConfig {
    /// Configuration pointing at `api_base_url` with default timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse
    pub fn new(api_base_url: &str, token_path: impl Into<PathBuf>) -> AppResult<Self> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            request_timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
            token_path: token_path.into(),
            environment: Environment::default(),
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `WEEKFIT_API_URL` is unset or invalid, if a timeout
    /// is not a number, or if no token location can be determined
    pub fn from_env() -> AppResult<Self> {
        let raw_url = env::var(env_config::API_URL).map_err(|_| {
            AppError::config(format!("{} must be set", env_config::API_URL))
        })?;

        let token_path = match env::var(env_config::TOKEN_PATH) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_token_path()?,
        };

        let config = Self {
            api_base_url: parse_base_url(&raw_url)?,
            request_timeout_secs: env_u64(
                env_config::HTTP_TIMEOUT_SECS,
                defaults::HTTP_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: env_u64(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            )?,
            token_path,
            environment: Environment::from_str_or_default(
                &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error on a zero timeout, a non-HTTP scheme, or plain HTTP in production
    pub fn validate(&self) -> AppResult<()> {
        if self.request_timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(AppError::config_invalid("HTTP timeouts must be positive"));
        }
        match self.api_base_url.scheme() {
            "https" => {}
            "http" if !self.environment.is_production() => {}
            "http" => {
                return Err(AppError::config_invalid(
                    "Production API URL must use https",
                ))
            }
            other => {
                return Err(AppError::config_invalid(format!(
                    "Unsupported API URL scheme '{other}'"
                )))
            }
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Parse the base URL, keeping any path prefix joinable
fn parse_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|e| {
        AppError::config_invalid(format!("Invalid API URL '{trimmed}': {e}")).with_source(e)
    })
}

fn env_u64(key: &str, default: u64) -> AppResult<u64> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| {
            AppError::config_invalid(format!("{key} must be a whole number of seconds"))
        }),
        Err(_) => Ok(default),
    }
}

fn default_token_path() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| {
            dir.join(defaults::CONFIG_DIR_NAME)
                .join(defaults::TOKEN_FILE_NAME)
        })
        .ok_or_else(|| {
            AppError::config(format!(
                "No config directory found; set {}",
                env_config::TOKEN_PATH
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/v1", "/tmp/token").unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://api.example.com/v1/");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ClientConfig::new("http://localhost:4000", "/tmp/token").unwrap();
        assert!(config.validate().is_ok());
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_plain_http_in_production() {
        let mut config = ClientConfig::new("http://api.example.com", "/tmp/token").unwrap();
        config.environment = Environment::Production;
        assert!(config.validate().is_err());

        let config = ClientConfig::new("ftp://api.example.com", "/tmp/token").unwrap();
        assert!(config.validate().is_err());
    }
}
