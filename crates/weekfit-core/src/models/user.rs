// ABOUTME: Authenticated user profile with the populated week schedule
// ABOUTME: Provides weekday lookups over the user's day entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::day::{Day, Weekday};
use super::ids::UserId;

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Remote identifier
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Account role, e.g. "user" or "admin"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Week schedule, one entry per weekday the service created
    #[serde(default)]
    pub days: Vec<Day>,
    /// Account creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last profile update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Schedule entry for `weekday`, if the service created one
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&Day> {
        self.days.iter().find(|d| d.day == weekday)
    }
}
