// ABOUTME: Core types and constants for the weekfit workout tracking client
// ABOUTME: Foundation crate with error handling, data models, and endpoint constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weekfit Core
//!
//! Foundation crate providing shared types and constants for the weekfit client.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Endpoint paths, environment variable names, and defaults
//! - **models**: The user/day/activity object graph and per-activity progress records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (User, Day, Activity, `ActivityProgress`)
pub mod models;
