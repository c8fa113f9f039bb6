// ABOUTME: Progress service seam the tracking layer depends on
// ABOUTME: Implemented by AuthorizedClient over HTTP and by in-memory doubles in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use weekfit_core::errors::AppResult;
use weekfit_core::models::{ActivityId, ActivityProgress, DayId, DayProgress};

use super::client::AuthorizedClient;

/// Remote progress operations used by set tracking
///
/// Mutations return the updated progress when the service reports it; `None`
/// means the caller must refetch the day snapshot to learn the new state.
#[async_trait]
pub trait ProgressService: Send + Sync {
    /// Fetch progress for every activity under a day
    async fn fetch_day_progress(&self, day_id: &DayId) -> AppResult<DayProgress>;

    /// Set the completed-set count to `sets`
    async fn set_sets_completed(
        &self,
        activity_id: &ActivityId,
        sets: u32,
    ) -> AppResult<Option<ActivityProgress>>;

    /// Clear all recorded sets for the activity
    async fn reset_sets(&self, activity_id: &ActivityId) -> AppResult<Option<ActivityProgress>>;
}

#[async_trait]
impl ProgressService for AuthorizedClient {
    async fn fetch_day_progress(&self, day_id: &DayId) -> AppResult<DayProgress> {
        Self::fetch_day_progress(self, day_id).await
    }

    async fn set_sets_completed(
        &self,
        activity_id: &ActivityId,
        sets: u32,
    ) -> AppResult<Option<ActivityProgress>> {
        Self::set_sets_completed(self, activity_id, sets).await
    }

    async fn reset_sets(&self, activity_id: &ActivityId) -> AppResult<Option<ActivityProgress>> {
        Self::reset_sets(self, activity_id).await
    }
}
