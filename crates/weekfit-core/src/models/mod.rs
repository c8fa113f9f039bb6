// ABOUTME: Core data models for the weekfit client
// ABOUTME: Re-exports User, Day, Activity, progress records and request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The client consumes a user → day → activity object graph fetched over HTTP
//! and a progress map keyed by activity identifier. These types mirror the
//! remote JSON (camelCase fields, `_id` identifiers) but enforce the
//! invariants the tracking layer relies on at decode time:
//!
//! - an activity has a positive set count and exactly one positive goal
//!   (reps or seconds) matching its type
//! - `setsCompleted` never exceeds `sets`

mod activity;
mod auth;
mod day;
mod ids;
mod progress;
mod user;

pub use activity::{Activity, ActivityKind, ActivityType, NewActivity};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use day::{Day, Weekday};
pub use ids::{ActivityId, DayId, UserId};
pub use progress::{ActivityProgress, DayProgress, ProgressRecord, SetEntry};
pub use user::User;
