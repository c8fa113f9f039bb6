// ABOUTME: Configuration module for the weekfit client
// ABOUTME: Loads the REST endpoint, timeouts and token location from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration comes only from environment variables; there is no config
//! file. See [`ClientConfig::from_env`] for the variables read.

/// REST client configuration
pub mod client;
/// Shared configuration types
pub mod types;

pub use client::ClientConfig;
pub use types::Environment;
