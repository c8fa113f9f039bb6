// ABOUTME: Bounded completed-set counter with a single in-flight request guard
// ABOUTME: Issues typed set requests and reconciles their results into the local count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Set Counter
//!
//! The counter never changes its count when a request is issued. The count
//! moves only when the request settles:
//!
//! - the service returned a progress record: that record is authoritative
//!   and is merged into the count ([`Reconcile::Merged`])
//! - the service acknowledged without a record: the request's target is
//!   applied and the owner refetches the day snapshot ([`Reconcile::Refetch`])
//! - the request failed: the count is untouched ([`Reconcile::Failed`])
//!
//! One guard covers increment, decrement and reset together, so two
//! different operations can never overlap for the same activity.

use std::fmt;

use weekfit_core::errors::{AppError, AppResult};
use weekfit_core::models::{Activity, ActivityId, ActivityProgress};

use crate::api::ProgressService;
use crate::logging::AppLogger;

/// Which set operation a request performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperation {
    /// One more set done
    Increment,
    /// Undo one set
    Decrement,
    /// Clear all sets
    Reset,
}

impl fmt::Display for SetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => f.write_str("increment"),
            Self::Decrement => f.write_str("decrement"),
            Self::Reset => f.write_str("reset"),
        }
    }
}

/// A remote set mutation ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRequest {
    /// Activity to update
    pub activity_id: ActivityId,
    /// Operation performed
    pub operation: SetOperation,
    /// Completed-set count after the operation
    pub target: u32,
}

impl SetRequest {
    /// Send the request to `service`
    ///
    /// # Errors
    ///
    /// Returns the remote failure
    pub async fn execute(
        &self,
        service: &dyn ProgressService,
    ) -> AppResult<Option<ActivityProgress>> {
        match self.operation {
            SetOperation::Reset => service.reset_sets(&self.activity_id).await,
            SetOperation::Increment | SetOperation::Decrement => {
                service
                    .set_sets_completed(&self.activity_id, self.target)
                    .await
            }
        }
    }
}

/// Why a set operation was not issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// Another request for this activity has not settled
    InFlight,
    /// All sets are already done
    AtMaximum,
    /// No sets are done
    AtZero,
    /// Reset is only offered once every set is done
    NotComplete,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InFlight => f.write_str("An update is already in progress"),
            Self::AtMaximum => f.write_str("All sets are already completed"),
            Self::AtZero => f.write_str("No completed sets to undo"),
            Self::NotComplete => f.write_str("Reset is available once all sets are completed"),
        }
    }
}

/// How a settled request was folded into local state
#[derive(Debug)]
pub enum Reconcile {
    /// The service returned the new progress; it was applied and should be
    /// merged into the snapshot store
    Merged(ActivityProgress),
    /// The service acknowledged without progress; refetch the day snapshot
    Refetch,
    /// The request failed; the count is unchanged
    Failed(AppError),
}

/// Completed-set count for one activity, bounded to `[0, sets]`
#[derive(Debug, Clone)]
pub struct SetCounter {
    activity_id: ActivityId,
    sets: u32,
    completed: u32,
    in_flight: Option<SetRequest>,
}

impl SetCounter {
    /// Counter seeded from the activity's completed count
    #[must_use]
    pub fn new(activity: &Activity) -> Self {
        Self {
            activity_id: activity.id.clone(),
            sets: activity.sets(),
            completed: activity.sets_completed(),
            in_flight: None,
        }
    }

    /// Completed sets
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Total sets
    #[must_use]
    pub const fn sets(&self) -> u32 {
        self.sets
    }

    /// True while a request is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Request awaiting `settle`, if any
    #[must_use]
    pub const fn in_flight(&self) -> Option<&SetRequest> {
        self.in_flight.as_ref()
    }

    /// True if `begin_increment` would issue a request
    #[must_use]
    pub const fn can_increment(&self) -> bool {
        !self.is_loading() && self.completed < self.sets
    }

    /// True if `begin_decrement` would issue a request
    #[must_use]
    pub const fn can_decrement(&self) -> bool {
        !self.is_loading() && self.completed > 0
    }

    /// Reset is offered only when every set is done
    #[must_use]
    pub const fn reset_enabled(&self) -> bool {
        self.completed == self.sets
    }

    /// Issue "one more set", clamped to `sets`
    ///
    /// # Errors
    ///
    /// Returns the unmet precondition; nothing changes
    pub fn begin_increment(&mut self) -> Result<SetRequest, Rejected> {
        self.guard()?;
        if self.completed >= self.sets {
            return Err(Rejected::AtMaximum);
        }
        Ok(self.issue(SetOperation::Increment, (self.completed + 1).min(self.sets)))
    }

    /// Issue "one set fewer"
    ///
    /// # Errors
    ///
    /// Returns the unmet precondition; nothing changes
    pub fn begin_decrement(&mut self) -> Result<SetRequest, Rejected> {
        self.guard()?;
        if self.completed == 0 {
            return Err(Rejected::AtZero);
        }
        Ok(self.issue(SetOperation::Decrement, self.completed - 1))
    }

    /// Issue "clear all sets"
    ///
    /// # Errors
    ///
    /// Returns the unmet precondition; nothing changes
    pub fn begin_reset(&mut self) -> Result<SetRequest, Rejected> {
        self.guard()?;
        if !self.reset_enabled() {
            return Err(Rejected::NotComplete);
        }
        Ok(self.issue(SetOperation::Reset, 0))
    }

    /// Release the guard and fold the result of the outstanding request
    pub fn settle(&mut self, result: AppResult<Option<ActivityProgress>>) -> Reconcile {
        let Some(request) = self.in_flight.take() else {
            return Reconcile::Failed(AppError::internal("No set update was in progress"));
        };
        match result {
            Ok(Some(progress)) => {
                self.completed = progress.sets_completed.min(self.sets);
                Reconcile::Merged(progress)
            }
            Ok(None) => {
                self.completed = request.target.min(self.sets);
                Reconcile::Refetch
            }
            Err(e) => {
                AppLogger::log_set_update_failure(
                    request.activity_id.as_str(),
                    &request.operation.to_string(),
                    &e.to_string(),
                );
                Reconcile::Failed(e)
            }
        }
    }

    /// Adopt a count from a fresh snapshot; returns true if it changed
    pub fn sync(&mut self, completed: u32) -> bool {
        let completed = completed.min(self.sets);
        let changed = completed != self.completed;
        self.completed = completed;
        changed
    }

    /// Adopt a replaced activity's total and completed count
    pub fn sync_activity(&mut self, activity: &Activity) -> bool {
        self.sets = activity.sets();
        self.sync(activity.sets_completed())
    }

    const fn guard(&self) -> Result<(), Rejected> {
        if self.in_flight.is_some() {
            Err(Rejected::InFlight)
        } else {
            Ok(())
        }
    }

    fn issue(&mut self, operation: SetOperation, target: u32) -> SetRequest {
        let request = SetRequest {
            activity_id: self.activity_id.clone(),
            operation,
            target,
        };
        self.in_flight = Some(request.clone());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekfit_core::models::ActivityKind;

    fn counter(sets: u32, completed: u32) -> SetCounter {
        let activity = Activity::new("a1", "Squats", sets, ActivityKind::Reps { reps: 10 })
            .unwrap()
            .with_sets_completed(completed);
        SetCounter::new(&activity)
    }

    fn progress(completed: u32) -> ActivityProgress {
        ActivityProgress {
            sets_completed: completed,
            ..ActivityProgress::zeroed()
        }
    }

    #[test]
    fn test_increment_then_reject_at_max() {
        let mut counter = counter(3, 2);
        let request = counter.begin_increment().unwrap();
        assert_eq!(request.target, 3);
        assert!(counter.is_loading());
        assert!(matches!(counter.settle(Ok(Some(progress(3)))), Reconcile::Merged(_)));
        assert_eq!(counter.completed(), 3);
        assert_eq!(counter.begin_increment(), Err(Rejected::AtMaximum));
        assert!(!counter.is_loading());
    }

    #[test]
    fn test_guard_covers_all_operations() {
        let mut counter = counter(3, 3);
        counter.begin_decrement().unwrap();
        assert_eq!(counter.begin_reset(), Err(Rejected::InFlight));
        assert_eq!(counter.begin_increment(), Err(Rejected::InFlight));
        assert_eq!(counter.begin_decrement(), Err(Rejected::InFlight));
    }

    #[test]
    fn test_count_unchanged_until_settled() {
        let mut counter = counter(3, 1);
        counter.begin_increment().unwrap();
        assert_eq!(counter.completed(), 1);
    }

    #[test]
    fn test_failure_leaves_count_and_releases_guard() {
        let mut counter = counter(3, 1);
        counter.begin_increment().unwrap();
        let outcome = counter.settle(Err(AppError::from_status(500, "boom")));
        assert!(matches!(outcome, Reconcile::Failed(_)));
        assert_eq!(counter.completed(), 1);
        assert!(counter.can_increment());
    }

    #[test]
    fn test_ack_without_record_applies_target_and_refetches() {
        let mut counter = counter(3, 1);
        counter.begin_decrement().unwrap();
        assert!(matches!(counter.settle(Ok(None)), Reconcile::Refetch));
        assert_eq!(counter.completed(), 0);
        assert_eq!(counter.begin_decrement(), Err(Rejected::AtZero));
    }

    #[test]
    fn test_reset_only_when_complete() {
        let mut counter = counter(3, 2);
        assert!(!counter.reset_enabled());
        assert_eq!(counter.begin_reset(), Err(Rejected::NotComplete));

        let mut counter = self::counter(3, 3);
        let request = counter.begin_reset().unwrap();
        assert_eq!(request.operation, SetOperation::Reset);
        assert_eq!(request.target, 0);
    }

    #[test]
    fn test_merged_progress_is_clamped() {
        let mut counter = counter(3, 2);
        counter.begin_increment().unwrap();
        counter.settle(Ok(Some(progress(9))));
        assert_eq!(counter.completed(), 3);
    }

    #[test]
    fn test_settle_without_request_is_failure() {
        let mut counter = counter(3, 0);
        assert!(matches!(counter.settle(Ok(None)), Reconcile::Failed(_)));
        assert_eq!(counter.completed(), 0);
    }

    #[test]
    fn test_sync_reports_change() {
        let mut counter = counter(3, 0);
        assert!(counter.sync(2));
        assert!(!counter.sync(2));
        assert!(counter.sync(7));
        assert_eq!(counter.completed(), 3);
    }
}
