// ABOUTME: Per-activity tracking widget composing the countdown timer and set counter
// ABOUTME: Owns expand/collapse, the reps stepper, completion notices and progress sync
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use tracing::debug;
use weekfit_core::errors::AppResult;
use weekfit_core::models::{Activity, ActivityKind, ActivityProgress};

use super::set_counter::{Reconcile, Rejected, SetCounter, SetRequest};
use super::timer::{CountdownTimer, TimerEvent, TimerState, Transition};

/// Controls shown in the expanded widget, by activity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// Countdown controls for time-based activities
    Timer {
        /// Timer state
        state: TimerState,
        /// Seconds left in the current set
        remaining: u32,
        /// Seconds per set
        duration: u32,
    },
    /// Manual reps stepper for rep-based activities
    Stepper {
        /// Reps counted in the current set
        reps: u32,
        /// Rep goal per set
        goal: u32,
    },
}

/// A message for the user after a set finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A set finished and more remain
    SetComplete {
        /// 1-based number of the finished set
        set_number: u32,
    },
    /// The last set finished
    AllSetsComplete,
    /// The countdown ended while an earlier update was still saving
    NotRecorded,
}

impl Notice {
    /// Alert title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SetComplete { .. } => "Set Complete!",
            Self::AllSetsComplete => "Congratulations!",
            Self::NotRecorded => "Set Not Recorded",
        }
    }

    /// Alert body
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::SetComplete { set_number } => {
                format!("Set {set_number} completed. Ready for the next set?")
            }
            Self::AllSetsComplete => "You have completed all sets for this activity!".to_owned(),
            Self::NotRecorded => {
                "The previous update is still saving. Try this set again in a moment.".to_owned()
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title(), self.message())
    }
}

/// Outcome of the timer crossing zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// What to tell the user
    pub notice: Notice,
    /// Increment to send, unless the counter refused it
    pub request: Option<SetRequest>,
}

/// Result of one widget tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Countdown continues
    Counting {
        /// Seconds left
        remaining: u32,
    },
    /// The countdown finished a set; the timer is already re-armed
    Completed(Completion),
}

/// Read-only view of the widget for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    /// Activity name
    pub name: String,
    /// Whether the detail section is shown
    pub expanded: bool,
    /// Kind-specific controls
    pub controls: Controls,
    /// Completed sets
    pub sets_completed: u32,
    /// Total sets
    pub sets: u32,
    /// `round(sets_completed / sets * 100)`
    pub percentage: u32,
    /// A set update is outstanding
    pub loading: bool,
    /// The reset button is offered
    pub reset_enabled: bool,
}

/// State for tracking one activity
#[derive(Debug, Clone)]
pub struct TrackingWidget {
    activity: Activity,
    expanded: bool,
    timer: Option<CountdownTimer>,
    reps: u32,
    counter: SetCounter,
}

impl TrackingWidget {
    /// Collapsed widget for `activity`
    #[must_use]
    pub fn new(activity: Activity) -> Self {
        let timer = activity.kind().seconds().map(CountdownTimer::new);
        let counter = SetCounter::new(&activity);
        Self {
            activity,
            expanded: false,
            timer,
            reps: 0,
            counter,
        }
    }

    /// The tracked activity, with the current completed count
    #[must_use]
    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Flip the detail section; data state is untouched
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the detail section is shown
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Controls for the activity kind
    #[must_use]
    pub fn controls(&self) -> Controls {
        match (self.activity.kind(), &self.timer) {
            (ActivityKind::Time { .. }, Some(timer)) => Controls::Timer {
                state: timer.state(),
                remaining: timer.remaining(),
                duration: timer.duration(),
            },
            (ActivityKind::Time { seconds }, None) => Controls::Timer {
                state: TimerState::Idle { remaining: seconds },
                remaining: seconds,
                duration: seconds,
            },
            (ActivityKind::Reps { reps }, _) => Controls::Stepper {
                reps: self.reps,
                goal: reps,
            },
        }
    }

    /// Countdown timer, for time-based activities
    #[must_use]
    pub const fn timer(&self) -> Option<&CountdownTimer> {
        self.timer.as_ref()
    }

    /// True while the countdown runs
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(CountdownTimer::is_running)
    }

    /// Start or resume the countdown
    pub fn start_timer(&mut self) -> Transition {
        self.timer
            .as_mut()
            .map_or(Transition::Ignored, CountdownTimer::start)
    }

    /// Pause the countdown
    pub fn pause_timer(&mut self) -> Transition {
        self.timer
            .as_mut()
            .map_or(Transition::Ignored, CountdownTimer::pause)
    }

    /// Stop and re-arm the countdown at the full duration
    pub fn reset_timer(&mut self) -> Transition {
        self.timer
            .as_mut()
            .map_or(Transition::Ignored, CountdownTimer::reset)
    }

    /// Advance the countdown by one second
    ///
    /// On the zero crossing this runs the completion action: the reps stepper
    /// clears, an increment is issued if the counter accepts one, and the
    /// timer is re-armed for the next set.
    pub fn tick(&mut self) -> Option<Tick> {
        match self.timer.as_mut()?.tick()? {
            TimerEvent::Counting { remaining } => Some(Tick::Counting { remaining }),
            TimerEvent::Completed => {
                let completion = self.complete_set();
                if let Some(timer) = self.timer.as_mut() {
                    timer.rearm();
                }
                Some(Tick::Completed(completion))
            }
        }
    }

    fn complete_set(&mut self) -> Completion {
        self.reps = 0;
        let sets = self.counter.sets();
        let request = match self.counter.begin_increment() {
            Ok(request) => Some(request),
            Err(Rejected::InFlight) => {
                debug!(
                    activity.id = %self.activity.id,
                    "Countdown ended while a set update was outstanding"
                );
                return Completion {
                    notice: Notice::NotRecorded,
                    request: None,
                };
            }
            Err(reason) => {
                debug!(
                    activity.id = %self.activity.id,
                    %reason,
                    "Completion did not issue an increment"
                );
                None
            }
        };
        let finished = request
            .as_ref()
            .map_or(self.counter.completed(), |r| r.target);
        let notice = if finished >= sets {
            Notice::AllSetsComplete
        } else {
            Notice::SetComplete {
                set_number: finished,
            }
        };
        Completion { notice, request }
    }

    /// Reps counted in the current set
    #[must_use]
    pub const fn current_reps(&self) -> u32 {
        self.reps
    }

    /// One more rep, bounded by the rep goal
    pub fn increment_reps(&mut self) -> u32 {
        let goal = self.activity.kind().reps().unwrap_or(0);
        self.reps = (self.reps + 1).min(goal);
        self.reps
    }

    /// One rep fewer, bounded by zero
    pub fn decrement_reps(&mut self) -> u32 {
        self.reps = self.reps.saturating_sub(1);
        self.reps
    }

    /// Completed sets
    #[must_use]
    pub const fn sets_completed(&self) -> u32 {
        self.counter.completed()
    }

    /// `round(sets_completed / sets * 100)`, derived on every call
    #[must_use]
    pub fn completion_percentage(&self) -> u32 {
        self.activity.completion_percentage()
    }

    /// True while a set update is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.counter.is_loading()
    }

    /// True when every set is done and reset is offered
    #[must_use]
    pub const fn reset_enabled(&self) -> bool {
        self.counter.reset_enabled()
    }

    /// Issue "one more set"
    ///
    /// # Errors
    ///
    /// Returns why the request was not issued
    pub fn increment(&mut self) -> Result<SetRequest, Rejected> {
        self.counter.begin_increment()
    }

    /// Issue "one set fewer"
    ///
    /// # Errors
    ///
    /// Returns why the request was not issued
    pub fn decrement(&mut self) -> Result<SetRequest, Rejected> {
        self.counter.begin_decrement()
    }

    /// Issue "clear all sets"
    ///
    /// # Errors
    ///
    /// Returns why the request was not issued
    pub fn reset_sets(&mut self) -> Result<SetRequest, Rejected> {
        self.counter.begin_reset()
    }

    /// Fold the outstanding request's result into the widget
    pub fn settle(&mut self, result: AppResult<Option<ActivityProgress>>) -> Reconcile {
        let before = self.activity.sets_completed();
        let outcome = self.counter.settle(result);
        self.mirror_count(before);
        outcome
    }

    /// Adopt the count from a freshly fetched snapshot entry
    pub fn apply_progress(&mut self, progress: &ActivityProgress) {
        let before = self.activity.sets_completed();
        self.counter.sync(progress.sets_completed);
        self.mirror_count(before);
    }

    /// Replace the activity, e.g. after the schedule was refetched
    ///
    /// A change in duration or completed count resets the timer and the reps
    /// stepper to their initial values.
    pub fn sync_activity(&mut self, activity: Activity) {
        let time_changed = activity.kind().seconds() != self.activity.kind().seconds();
        let count_changed = activity.sets_completed() != self.activity.sets_completed();
        self.counter.sync_activity(&activity);
        self.activity = activity;
        if time_changed || count_changed {
            self.timer = self.activity.kind().seconds().map(CountdownTimer::new);
            self.reps = 0;
        }
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn view(&self) -> WidgetView {
        WidgetView {
            name: self.activity.name.clone(),
            expanded: self.expanded,
            controls: self.controls(),
            sets_completed: self.sets_completed(),
            sets: self.activity.sets(),
            percentage: self.completion_percentage(),
            loading: self.is_loading(),
            reset_enabled: self.reset_enabled(),
        }
    }

    fn mirror_count(&mut self, before: u32) {
        let now = self.counter.completed();
        if now == before {
            return;
        }
        self.activity.set_sets_completed(now);
        if let Some(timer) = self.timer.as_mut() {
            timer.reset();
        }
        self.reps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(sets: u32, seconds: u32) -> TrackingWidget {
        TrackingWidget::new(
            Activity::new("t1", "Plank", sets, ActivityKind::Time { seconds }).unwrap(),
        )
    }

    fn reps(sets: u32, completed: u32) -> TrackingWidget {
        TrackingWidget::new(
            Activity::new("r1", "Push-ups", sets, ActivityKind::Reps { reps: 3 })
                .unwrap()
                .with_sets_completed(completed),
        )
    }

    fn progress(completed: u32) -> ActivityProgress {
        ActivityProgress {
            sets_completed: completed,
            ..ActivityProgress::zeroed()
        }
    }

    #[test]
    fn test_timer_completion_fires_once_and_rearms() {
        let mut widget = timed(3, 5);
        assert!(widget.start_timer().is_applied());

        let mut completions = Vec::new();
        for _ in 0..5 {
            if let Some(Tick::Completed(completion)) = widget.tick() {
                completions.push(completion);
            }
        }

        assert_eq!(completions.len(), 1);
        let completion = &completions[0];
        assert_eq!(completion.notice, Notice::SetComplete { set_number: 1 });
        assert_eq!(completion.request.as_ref().map(|r| r.target), Some(1));
        assert_eq!(widget.timer().map(CountdownTimer::remaining), Some(5));
        assert!(!widget.is_timer_running());
        assert_eq!(widget.tick(), None);
    }

    #[test]
    fn test_last_set_completion_congratulates() {
        let mut widget = TrackingWidget::new(
            Activity::new("t1", "Plank", 2, ActivityKind::Time { seconds: 1 })
                .unwrap()
                .with_sets_completed(1),
        );
        widget.start_timer();
        let Some(Tick::Completed(completion)) = widget.tick() else {
            panic!("expected completion");
        };
        assert_eq!(completion.notice, Notice::AllSetsComplete);
        assert_eq!(
            completion.notice.message(),
            "You have completed all sets for this activity!"
        );
    }

    #[test]
    fn test_controls_follow_kind() {
        assert!(matches!(timed(3, 30).controls(), Controls::Timer { duration: 30, .. }));
        assert!(matches!(reps(3, 0).controls(), Controls::Stepper { reps: 0, goal: 3 }));
        assert_eq!(reps(3, 0).start_timer(), Transition::Ignored);
    }

    #[test]
    fn test_reps_stepper_is_bounded() {
        let mut widget = reps(3, 0);
        assert_eq!(widget.decrement_reps(), 0);
        for _ in 0..5 {
            widget.increment_reps();
        }
        assert_eq!(widget.current_reps(), 3);
    }

    #[test]
    fn test_toggle_does_not_touch_data() {
        let mut widget = reps(3, 1);
        widget.toggle_expanded();
        assert!(widget.is_expanded());
        assert_eq!(widget.sets_completed(), 1);
        widget.toggle_expanded();
        assert!(!widget.is_expanded());
    }

    #[test]
    fn test_increment_to_max_then_rejected() {
        let mut widget = reps(3, 2);
        widget.increment().unwrap();
        widget.settle(Ok(Some(progress(3))));
        assert_eq!(widget.sets_completed(), 3);
        assert_eq!(widget.completion_percentage(), 100);
        assert_eq!(widget.increment(), Err(Rejected::AtMaximum));
        assert!(widget.reset_enabled());
    }

    #[test]
    fn test_percentage_is_rounded() {
        let widget = reps(3, 1);
        assert_eq!(widget.completion_percentage(), 33);
        assert_eq!(widget.view().percentage, 33);
    }

    #[test]
    fn test_count_change_resets_stepper_and_timer() {
        let mut widget = reps(3, 0);
        widget.increment_reps();
        widget.apply_progress(&progress(1));
        assert_eq!(widget.current_reps(), 0);
        assert_eq!(widget.activity().sets_completed(), 1);

        let mut timed = timed(3, 10);
        timed.start_timer();
        timed.tick();
        timed.pause_timer();
        let updated = timed.activity().clone().with_sets_completed(2);
        timed.sync_activity(updated);
        assert_eq!(timed.timer().map(CountdownTimer::remaining), Some(10));
    }

    #[test]
    fn test_settled_increment_resets_running_timer() {
        let mut widget = timed(3, 10);
        widget.start_timer();
        widget.tick();
        widget.tick();
        widget.increment().unwrap();
        widget.settle(Ok(Some(progress(1))));
        assert_eq!(
            widget.timer().map(CountdownTimer::state),
            Some(TimerState::Idle { remaining: 10 })
        );
        assert!(!widget.is_timer_running());
    }

    #[test]
    fn test_completion_while_update_outstanding() {
        let mut widget = timed(3, 1);
        widget.increment().unwrap();
        widget.start_timer();
        let Some(Tick::Completed(completion)) = widget.tick() else {
            panic!("expected completion");
        };
        assert_eq!(completion.notice, Notice::NotRecorded);
        assert!(completion.request.is_none());
        assert!(!completion.notice.message().contains("Set 0"));
        assert_eq!(widget.sets_completed(), 0);
    }

    #[test]
    fn test_sync_activity_with_new_duration() {
        let mut widget = timed(3, 10);
        let longer = Activity::new("t1", "Plank", 3, ActivityKind::Time { seconds: 20 }).unwrap();
        widget.sync_activity(longer);
        assert_eq!(widget.timer().map(CountdownTimer::duration), Some(20));
    }

    #[test]
    fn test_failed_update_keeps_count() {
        let mut widget = reps(3, 1);
        widget.increment().unwrap();
        assert!(widget.is_loading());
        let outcome = widget.settle(Err(weekfit_core::errors::AppError::from_status(503, "down")));
        assert!(matches!(outcome, Reconcile::Failed(_)));
        assert_eq!(widget.sets_completed(), 1);
        assert!(!widget.is_loading());
    }
}
