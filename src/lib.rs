// ABOUTME: Main library entry point for the weekfit workout tracking client
// ABOUTME: Session handling, REST client, schedule view model and per-activity tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weekfit
//!
//! Client core for a weekly workout planner. A user owns seven days, each day
//! holds activities, and each activity is repeated for a number of sets with
//! either a rep goal or a per-set duration.
//!
//! ## Architecture
//!
//! - **config**: API base URL, timeouts and token location from the environment
//! - **api**: HTTP client for the REST endpoints with bearer authentication
//! - **session**: explicit session object built from a persisted token
//! - **auth** / **`activity_form`**: local form validation before any request
//! - **schedule**: week view model with day selection and overall progress
//! - **tracking**: countdown timer, set counter and the widget driving both
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use weekfit::config::ClientConfig;
//! use weekfit::api::ApiClient;
//! use weekfit::session::{FileTokenStore, SessionManager};
//! use weekfit::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let api = ApiClient::new(&config)?;
//!     let manager = SessionManager::new(api, FileTokenStore::new(config.token_path.clone()));
//!     let session = manager.restore().await?;
//!     println!("Signed in as {}", session.user().name);
//!     Ok(())
//! }
//! ```

/// Add-activity form and activity edit messages
pub mod activity_form;

/// REST client and the progress service seam
pub mod api;

/// Login and signup forms
pub mod auth;

/// Client configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Week schedule view model
pub mod schedule;

/// Session lifecycle and token persistence
pub mod session;

/// Countdown timer, set counter and tracking widget
pub mod tracking;

pub use weekfit_core::{constants, errors, models};
