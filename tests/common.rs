// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample payloads, mock-server clients and a scripted progress service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `weekfit`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::collections::HashMap;
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use weekfit::api::{ApiClient, ProgressService};
use weekfit::config::ClientConfig;
use weekfit::errors::{AppError, AppResult};
use weekfit::models::{ActivityId, ActivityProgress, DayId, DayProgress};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Client configuration pointing at a mock server
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url, std::env::temp_dir().join("weekfit-test-token")).unwrap()
}

/// Unauthenticated client for a mock server
pub fn test_api(base_url: &str) -> ApiClient {
    init_test_logging();
    ApiClient::new(&test_config(base_url)).unwrap()
}

/// A rep-based activity document
pub fn reps_activity_json(id: &str, name: &str, sets: u32, reps: u32, done: u32) -> Value {
    json!({
        "_id": id,
        "name": name,
        "sets": sets,
        "reps": reps,
        "type": "reps",
        "setsCompleted": done
    })
}

/// A time-based activity document
pub fn timed_activity_json(id: &str, name: &str, sets: u32, seconds: u32, done: u32) -> Value {
    json!({
        "_id": id,
        "name": name,
        "sets": sets,
        "time": seconds,
        "type": "time",
        "setsCompleted": done
    })
}

/// `GET /auth/user` body with a Monday and a Wednesday
pub fn user_json() -> Value {
    json!({
        "user": {
            "_id": "u1",
            "name": "Ana",
            "email": "ana@example.com",
            "role": "user",
            "days": [
                {
                    "_id": "d-mon",
                    "day": "Monday",
                    "user": "u1",
                    "activities": [
                        reps_activity_json("a1", "Push-ups", 3, 12, 1),
                        timed_activity_json("a2", "Plank", 2, 60, 0)
                    ]
                },
                {
                    "_id": "d-wed",
                    "day": "Wednesday",
                    "activities": []
                }
            ]
        }
    })
}

/// A progress document as returned inside `{ "progress": ... }`
pub fn progress_json(activity_id: &str, completed: u32, total: u32) -> Value {
    let sets: Vec<Value> = (1..=completed)
        .map(|n| json!({ "setNumber": n, "reps": 10 }))
        .collect();
    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(completed) / f64::from(total) * 100.0
    };
    json!({
        "activity": activity_id,
        "setsCompleted": sets,
        "setsPercentage": percentage,
        "weightedPercentage": percentage,
        "isCompleted": completed == total,
        "totalSets": total
    })
}

/// Progress value with a completed count
pub fn progress(completed: u32, total: u32) -> ActivityProgress {
    ActivityProgress {
        sets_completed: completed,
        total_sets: total,
        sets_percentage: f64::from(completed) / f64::from(total) * 100.0,
        ..ActivityProgress::zeroed()
    }
}

/// How [`ScriptedProgress`] answers set updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetReply {
    /// Return the new progress
    Echo,
    /// Succeed without a progress record
    Acknowledge,
    /// Fail with a service error
    Fail,
}

/// A set update received by [`ScriptedProgress`]; `None` means reset
pub type SetCall = (ActivityId, Option<u32>);

/// In-memory progress service with a fixed reply mode
pub struct ScriptedProgress {
    reply: SetReply,
    total_sets: u32,
    delay: Duration,
    calls: Mutex<Vec<SetCall>>,
    day: Mutex<DayProgress>,
    day_fetches: Mutex<Vec<DayId>>,
}

impl ScriptedProgress {
    pub fn new(reply: SetReply, total_sets: u32) -> Self {
        Self {
            reply,
            total_sets,
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            day: Mutex::new(HashMap::new()),
            day_fetches: Mutex::new(Vec::new()),
        }
    }

    /// Delay every set update by `delay`
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Day snapshot returned by `fetch_day_progress`
    pub fn with_day(self, day: DayProgress) -> Self {
        *self.day.lock().unwrap() = day;
        self
    }

    pub fn calls(&self) -> Vec<SetCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn day_fetches(&self) -> Vec<DayId> {
        self.day_fetches.lock().unwrap().clone()
    }

    async fn reply(
        &self,
        activity_id: &ActivityId,
        sets: Option<u32>,
    ) -> AppResult<Option<ActivityProgress>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.calls.lock().unwrap().push((activity_id.clone(), sets));
        match self.reply {
            SetReply::Echo => Ok(Some(progress(sets.unwrap_or(0), self.total_sets))),
            SetReply::Acknowledge => Ok(None),
            SetReply::Fail => Err(AppError::from_status(500, "Server exploded")),
        }
    }
}

#[async_trait]
impl ProgressService for ScriptedProgress {
    async fn fetch_day_progress(&self, day_id: &DayId) -> AppResult<DayProgress> {
        self.day_fetches.lock().unwrap().push(day_id.clone());
        Ok(self.day.lock().unwrap().clone())
    }

    async fn set_sets_completed(
        &self,
        activity_id: &ActivityId,
        sets: u32,
    ) -> AppResult<Option<ActivityProgress>> {
        self.reply(activity_id, Some(sets)).await
    }

    async fn reset_sets(&self, activity_id: &ActivityId) -> AppResult<Option<ActivityProgress>> {
        self.reply(activity_id, None).await
    }
}
