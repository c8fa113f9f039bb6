// ABOUTME: Per-activity progress snapshot as computed by the remote service
// ABOUTME: Decodes progress documents and indexes them by activity identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::ids::ActivityId;

/// One completed set as recorded by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    /// 1-based set number
    pub set_number: u32,
    /// Reps achieved, for rep-based activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Seconds achieved, for time-based activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
}

/// Activity reference inside a progress document, either a bare id or a
/// populated activity
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ActivityRef {
    Id(ActivityId),
    Populated {
        #[serde(rename = "_id")]
        id: ActivityId,
    },
}

/// `setsCompleted` is an array of set entries; older payloads send a count
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CompletedSets {
    Entries(Vec<SetEntry>),
    Count(u32),
}

impl Default for CompletedSets {
    fn default() -> Self {
        Self::Entries(Vec::new())
    }
}

/// Wire shape of a progress document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(rename = "_id", default)]
    id: Option<ActivityId>,
    #[serde(default)]
    activity: Option<ActivityRef>,
    #[serde(default)]
    sets_completed: Option<CompletedSets>,
    #[serde(default)]
    sets_percentage: Option<f64>,
    #[serde(default)]
    weighted_percentage: Option<f64>,
    #[serde(default)]
    is_completed: Option<bool>,
    #[serde(default)]
    total_sets: Option<u32>,
    #[serde(default)]
    sets: Option<u32>,
}

impl ProgressRecord {
    /// Activity this record belongs to
    ///
    /// The `activity` reference wins over the document `_id`, which is only
    /// an activity id on aggregated day responses.
    #[must_use]
    pub fn activity_key(&self) -> Option<ActivityId> {
        match &self.activity {
            Some(ActivityRef::Id(id) | ActivityRef::Populated { id }) => Some(id.clone()),
            None => self.id.clone(),
        }
    }
}

/// Server-computed completion summary for one activity on one day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProgress {
    /// Number of completed sets
    pub sets_completed: u32,
    /// Completed sets as a percentage of total sets
    pub sets_percentage: f64,
    /// Percentage weighted by achieved reps/time
    pub weighted_percentage: f64,
    /// Whether the service considers the activity done
    pub is_completed: bool,
    /// Total sets for the activity, zero if unknown
    pub total_sets: u32,
    /// Individual set records in order
    pub sets: Vec<SetEntry>,
}

impl ActivityProgress {
    /// Progress for an activity the service has no record of
    #[must_use]
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Decode a wire record; the completed count is the number of set entries
    #[must_use]
    pub fn from_record(record: ProgressRecord) -> Self {
        let total_sets = record.total_sets.or(record.sets).unwrap_or(0);
        let (mut sets_completed, sets) = match record.sets_completed.unwrap_or_default() {
            CompletedSets::Entries(entries) => {
                (u32::try_from(entries.len()).unwrap_or(u32::MAX), entries)
            }
            CompletedSets::Count(count) => (count, Vec::new()),
        };
        if total_sets > 0 && sets_completed > total_sets {
            warn!(
                sets_completed,
                total_sets, "Progress reports more sets than the activity has, clamping"
            );
            sets_completed = total_sets;
        }
        Self {
            sets_completed,
            sets_percentage: record.sets_percentage.unwrap_or(0.0),
            weighted_percentage: record.weighted_percentage.unwrap_or(0.0),
            is_completed: record.is_completed.unwrap_or(false),
            total_sets,
            sets,
        }
    }

    /// Index a day's records by activity, skipping records with no activity key
    #[must_use]
    pub fn index(records: impl IntoIterator<Item = ProgressRecord>) -> DayProgress {
        records
            .into_iter()
            .filter_map(|record| match record.activity_key() {
                Some(key) => Some((key, Self::from_record(record))),
                None => {
                    warn!("Skipping progress record with no activity reference");
                    None
                }
            })
            .collect()
    }
}

/// Progress snapshot for one day, keyed by activity
pub type DayProgress = HashMap<ActivityId, ActivityProgress>;
