// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, environment variable names, and client defaults for weekfit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// REST endpoint paths, relative to the configured API base URL
pub mod endpoints {
    /// Log in with email and password
    pub const LOGIN: &str = "/auth/login";
    /// Create an account
    pub const REGISTER: &str = "/auth/register";
    /// Fetch the current user with the populated week schedule
    pub const FETCH_USER: &str = "/auth/user";

    /// `POST /activity/day/{day_id}/activity`
    #[must_use]
    pub fn add_activity(day_id: &str) -> String {
        format!("/activity/day/{day_id}/activity")
    }

    /// `DELETE /activity/day/{day_id}/activity/{activity_id}`
    #[must_use]
    pub fn delete_activity(day_id: &str, activity_id: &str) -> String {
        format!("/activity/day/{day_id}/activity/{activity_id}")
    }

    /// `GET /progress/day/{day_id}`
    #[must_use]
    pub fn day_progress(day_id: &str) -> String {
        format!("/progress/day/{day_id}")
    }

    /// `GET /progress/activity/{activity_id}/day/{day_id}`
    #[must_use]
    pub fn activity_progress(activity_id: &str, day_id: &str) -> String {
        format!("/progress/activity/{activity_id}/day/{day_id}")
    }

    /// `POST /progress/activity/{activity_id}/set`, used for both the set
    /// count update and the reset variant
    #[must_use]
    pub fn activity_sets(activity_id: &str) -> String {
        format!("/progress/activity/{activity_id}/set")
    }
}

/// Environment variable names
pub mod env_config {
    /// Base URL of the workout REST API
    pub const API_URL: &str = "WEEKFIT_API_URL";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "WEEKFIT_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "WEEKFIT_HTTP_CONNECT_TIMEOUT_SECS";
    /// Override for the token file location
    pub const TOKEN_PATH: &str = "WEEKFIT_TOKEN_PATH";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "WEEKFIT_ENV";
}

/// Default values
pub mod defaults {
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Directory under the platform config dir holding client state
    pub const CONFIG_DIR_NAME: &str = "weekfit";
    /// File name of the stored bearer token
    pub const TOKEN_FILE_NAME: &str = "token";
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("weekfit/", env!("CARGO_PKG_VERSION"));
}

/// Input and tracking limits
pub mod limits {
    /// Minimum password length accepted by the auth forms
    pub const MIN_PASSWORD_LEN: usize = 6;
    /// Countdown timer tick period in milliseconds
    pub const TIMER_TICK_MS: u64 = 1000;
    /// Seconds per minute, for the activity form's minute input
    pub const SECONDS_PER_MINUTE: u32 = 60;
    /// Percentage multiplier
    pub const PERCENTAGE_MULTIPLIER: f64 = 100.0;
}

/// Completion-percentage thresholds for progress bands
pub mod progress_bands {
    /// All sets done
    pub const COMPLETE: u32 = 100;
    /// Nearly done
    pub const HIGH: u32 = 75;
    /// Halfway
    pub const MEDIUM: u32 = 50;
    /// Started
    pub const LOW: u32 = 25;
}

/// Service names used in structured logs
pub mod service_names {
    /// The client library and CLI
    pub const WEEKFIT: &str = "weekfit";
}
