// ABOUTME: Activity model - a set-based exercise with either a rep goal or a time goal
// ABOUTME: Decodes the remote activity document and enforces set-count invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::ids::ActivityId;
use crate::constants::limits::PERCENTAGE_MULTIPLIER;
use crate::errors::{AppError, AppResult};

/// Discriminant of an activity's goal, as carried in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Repetition goal per set
    Reps,
    /// Duration goal per set
    Time,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reps => f.write_str("reps"),
            Self::Time => f.write_str("time"),
        }
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reps" | "rep" => Ok(Self::Reps),
            "time" | "timed" => Ok(Self::Time),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity type '{other}' (expected 'reps' or 'time')"
            ))),
        }
    }
}

/// The per-set goal of an activity. Exactly one goal exists and it is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// Perform `reps` repetitions per set
    Reps {
        /// Repetitions per set
        reps: u32,
    },
    /// Hold or perform for `seconds` per set
    Time {
        /// Duration per set in seconds
        seconds: u32,
    },
}

impl ActivityKind {
    /// The `type` discriminant
    #[must_use]
    pub const fn activity_type(self) -> ActivityType {
        match self {
            Self::Reps { .. } => ActivityType::Reps,
            Self::Time { .. } => ActivityType::Time,
        }
    }

    /// Rep goal, for rep-based activities
    #[must_use]
    pub const fn reps(self) -> Option<u32> {
        match self {
            Self::Reps { reps } => Some(reps),
            Self::Time { .. } => None,
        }
    }

    /// Duration goal in seconds, for time-based activities
    #[must_use]
    pub const fn seconds(self) -> Option<u32> {
        match self {
            Self::Time { seconds } => Some(seconds),
            Self::Reps { .. } => None,
        }
    }

    /// Build a kind from the wire representation
    ///
    /// # Errors
    ///
    /// Returns an error if the goal matching `activity_type` is missing or zero
    pub fn from_parts(
        activity_type: ActivityType,
        reps: Option<u32>,
        time: Option<u32>,
    ) -> AppResult<Self> {
        match activity_type {
            ActivityType::Reps => match reps {
                Some(reps) if reps > 0 => Ok(Self::Reps { reps }),
                _ => Err(AppError::invalid_input(
                    "Rep-based activity requires a positive rep goal",
                )),
            },
            ActivityType::Time => match time {
                Some(seconds) if seconds > 0 => Ok(Self::Time { seconds }),
                _ => Err(AppError::invalid_input(
                    "Time-based activity requires a positive duration",
                )),
            },
        }
    }
}

/// A trackable exercise repeated across a number of sets
///
/// `sets` is positive and `sets_completed` stays within `[0, sets]`; both are
/// only reachable through getters so the invariant holds for every value of
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActivityRecord", into = "ActivityRecord")]
pub struct Activity {
    /// Remote identifier
    pub id: ActivityId,
    /// Display name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional link to a demonstration or reference page
    pub reference_url: Option<String>,
    sets: u32,
    kind: ActivityKind,
    sets_completed: u32,
    /// Creation time reported by the service
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time reported by the service
    pub updated_at: Option<DateTime<Utc>>,
}

impl Activity {
    /// Create an activity with no completed sets
    ///
    /// # Errors
    ///
    /// Returns an error if `sets` is zero
    pub fn new(
        id: impl Into<ActivityId>,
        name: impl Into<String>,
        sets: u32,
        kind: ActivityKind,
    ) -> AppResult<Self> {
        if sets == 0 {
            return Err(AppError::invalid_input("Sets must be a positive number"));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: None,
            reference_url: None,
            sets,
            kind,
            sets_completed: 0,
            created_at: None,
            updated_at: None,
        })
    }

    /// Set the completed count, clamped to `sets`
    #[must_use]
    pub fn with_sets_completed(mut self, completed: u32) -> Self {
        self.sets_completed = completed.min(self.sets);
        self
    }

    /// Update the completed count in place, clamped to `sets`
    pub fn set_sets_completed(&mut self, completed: u32) {
        self.sets_completed = completed.min(self.sets);
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Total sets
    #[must_use]
    pub const fn sets(&self) -> u32 {
        self.sets
    }

    /// Goal per set
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Completed sets, always within `[0, sets]`
    #[must_use]
    pub const fn sets_completed(&self) -> u32 {
        self.sets_completed
    }

    /// Whether every set is done
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.sets_completed == self.sets
    }

    /// `round(sets_completed / sets * 100)`
    #[must_use]
    pub fn completion_percentage(&self) -> u32 {
        percentage(self.sets_completed, self.sets)
    }
}

/// `round(done / total * 100)`, zero when `total` is zero
#[must_use]
pub(crate) fn percentage(done: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(done) / f64::from(total) * PERCENTAGE_MULTIPLIER).round() as u32
}

/// Wire shape of an activity document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityRecord {
    #[serde(rename = "_id")]
    id: ActivityId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference_url: Option<String>,
    sets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<u32>,
    #[serde(rename = "type")]
    activity_type: ActivityType,
    #[serde(default)]
    sets_completed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ActivityRecord> for Activity {
    type Error = AppError;

    fn try_from(record: ActivityRecord) -> Result<Self, Self::Error> {
        let kind = ActivityKind::from_parts(record.activity_type, record.reps, record.time)
            .map_err(|e| e.with_resource_id(record.id.as_str()))?;
        if record.sets == 0 {
            return Err(
                AppError::invalid_input("Activity has no sets").with_resource_id(record.id.as_str())
            );
        }
        if record.sets_completed > record.sets {
            warn!(
                activity_id = %record.id,
                sets = record.sets,
                sets_completed = record.sets_completed,
                "Completed sets exceed total, clamping"
            );
        }
        Ok(Self {
            sets_completed: record.sets_completed.min(record.sets),
            id: record.id,
            name: record.name,
            description: record.description.filter(|d| !d.trim().is_empty()),
            reference_url: record.reference_url.filter(|u| !u.trim().is_empty()),
            sets: record.sets,
            kind,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl From<Activity> for ActivityRecord {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            description: activity.description,
            reference_url: activity.reference_url,
            sets: activity.sets,
            reps: activity.kind.reps(),
            time: activity.kind.seconds(),
            activity_type: activity.kind.activity_type(),
            sets_completed: activity.sets_completed,
            created_at: activity.created_at,
            updated_at: activity.updated_at,
        }
    }
}

/// Payload for creating an activity under a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "NewActivityRecord")]
pub struct NewActivity {
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional reference link
    pub reference_url: Option<String>,
    /// Total sets, positive
    pub sets: u32,
    /// Goal per set
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewActivityRecord {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_url: Option<String>,
    sets: u32,
    #[serde(rename = "type")]
    activity_type: ActivityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<u32>,
}

impl From<NewActivity> for NewActivityRecord {
    fn from(activity: NewActivity) -> Self {
        Self {
            name: activity.name,
            description: activity.description,
            reference_url: activity.reference_url,
            sets: activity.sets,
            activity_type: activity.kind.activity_type(),
            reps: activity.kind.reps(),
            time: activity.kind.seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_time_activity() {
        let activity: Activity = serde_json::from_value(json!({
            "_id": "a1",
            "name": "Plank",
            "sets": 3,
            "time": 45,
            "type": "time",
            "setsCompleted": 1,
            "createdAt": "2025-06-28T10:00:00Z",
            "updatedAt": "2025-06-28T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(activity.kind(), ActivityKind::Time { seconds: 45 });
        assert_eq!(activity.sets_completed(), 1);
        assert_eq!(activity.completion_percentage(), 33);
        assert!(activity.created_at.is_some());
    }

    #[test]
    fn test_decode_clamps_completed_sets() {
        let activity: Activity = serde_json::from_value(json!({
            "_id": "a1", "name": "Squats", "sets": 3, "reps": 10,
            "type": "reps", "setsCompleted": 7
        }))
        .unwrap();
        assert_eq!(activity.sets_completed(), 3);
        assert!(activity.is_complete());
    }

    #[test]
    fn test_decode_rejects_missing_goal() {
        let result: Result<Activity, _> = serde_json::from_value(json!({
            "_id": "a1", "name": "Squats", "sets": 3, "type": "reps"
        }));
        assert!(result.is_err());

        let result: Result<Activity, _> = serde_json::from_value(json!({
            "_id": "a1", "name": "Plank", "sets": 3, "type": "time", "time": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_zero_sets() {
        let result: Result<Activity, _> = serde_json::from_value(json!({
            "_id": "a1", "name": "Squats", "sets": 0, "reps": 10, "type": "reps"
        }));
        assert!(result.is_err());

        let record: ActivityRecord = serde_json::from_value(json!({
            "_id": "a1", "name": "Squats", "sets": 0, "reps": 10, "type": "reps"
        }))
        .unwrap();
        let error = Activity::try_from(record).unwrap_err();
        assert_eq!(error.message, "Activity has no sets");
        assert_eq!(error.context.resource_id.as_deref(), Some("a1"));
    }

    #[test]
    fn test_completion_percentage_rounds() {
        let activity = Activity::new("a", "Lunges", 3, ActivityKind::Reps { reps: 12 })
            .unwrap()
            .with_sets_completed(2);
        assert_eq!(activity.completion_percentage(), 67);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_new_activity_payload_shape() {
        let payload = NewActivity {
            name: "Plank".to_owned(),
            description: None,
            reference_url: Some("https://example.com/plank".to_owned()),
            sets: 3,
            kind: ActivityKind::Time { seconds: 120 },
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Plank",
                "referenceUrl": "https://example.com/plank",
                "sets": 3,
                "type": "time",
                "time": 120
            })
        );
    }

    #[test]
    fn test_activity_type_parse() {
        assert_eq!("Reps".parse::<ActivityType>().unwrap(), ActivityType::Reps);
        assert_eq!(" time ".parse::<ActivityType>().unwrap(), ActivityType::Time);
        assert!("distance".parse::<ActivityType>().is_err());
    }
}
