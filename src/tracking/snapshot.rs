// ABOUTME: Day-keyed store of the last fetched progress snapshots
// ABOUTME: Wholesale replacement on fetch plus per-activity merge of typed mutation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use weekfit_core::models::{ActivityId, ActivityProgress, DayId, DayProgress};

/// Store shared between the hosting screen and tracking drivers
pub type SharedSnapshots = Arc<RwLock<ProgressSnapshotStore>>;

/// Last known progress per day
///
/// Writes are last-writer-wins: a fetched snapshot replaces the whole day,
/// a merged mutation result replaces one activity's entry.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshotStore {
    days: HashMap<DayId, DayProgress>,
}

impl ProgressSnapshotStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store wrapped for sharing
    #[must_use]
    pub fn shared() -> SharedSnapshots {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Replace a day's snapshot with a freshly fetched one
    pub fn replace_day(&mut self, day_id: DayId, progress: DayProgress) {
        self.days.insert(day_id, progress);
    }

    /// Replace one activity's entry with a mutation result
    pub fn merge(&mut self, day_id: &DayId, activity_id: ActivityId, progress: ActivityProgress) {
        self.days
            .entry(day_id.clone())
            .or_default()
            .insert(activity_id, progress);
    }

    /// Snapshot for a day, if fetched
    #[must_use]
    pub fn day(&self, day_id: &DayId) -> Option<&DayProgress> {
        self.days.get(day_id)
    }

    /// Progress for one activity on one day
    #[must_use]
    pub fn activity(&self, day_id: &DayId, activity_id: &ActivityId) -> Option<&ActivityProgress> {
        self.days.get(day_id)?.get(activity_id)
    }
}
