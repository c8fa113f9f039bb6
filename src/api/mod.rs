// ABOUTME: REST client module for the workout service
// ABOUTME: Exposes the HTTP client and the ProgressService seam used by tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # REST API
//!
//! [`ApiClient`] performs the unauthenticated calls (login, register) and
//! hands out an [`AuthorizedClient`] bound to a bearer token for everything
//! else. Non-2xx responses become [`AppError`](weekfit_core::errors::AppError)
//! values whose message is the service's `message` field when present.

/// HTTP client and endpoint calls
pub mod client;
/// Progress service trait
pub mod progress;

pub use client::{ApiClient, AuthorizedClient};
pub use progress::ProgressService;
