// ABOUTME: Async event loop driving one tracking widget with a one-second ticker
// ABOUTME: Runs set updates off-loop and reconciles results into the shared snapshot store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Widget Driver
//!
//! The driver owns a [`TrackingWidget`] and reacts to three sources:
//! user [`Command`]s, the countdown ticker, and completed remote requests.
//!
//! At most one ticker exists. It is created when the timer starts and
//! dropped whenever the timer stops running (pause, reset, completion,
//! shutdown). Remote requests run in a `JoinSet` so the loop never waits on
//! the network; their results come back through the set counter's
//! reconciliation rule.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, warn};
use weekfit_core::constants::limits::TIMER_TICK_MS;
use weekfit_core::errors::{AppError, AppResult};
use weekfit_core::models::{ActivityProgress, DayId, DayProgress};

use super::set_counter::{Reconcile, Rejected, SetRequest};
use super::snapshot::SharedSnapshots;
use super::widget::{Notice, Tick, TrackingWidget, WidgetView};
use crate::api::ProgressService;

/// User input for a running widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Expand or collapse the details
    ToggleExpanded,
    /// Start or resume the countdown
    StartTimer,
    /// Pause the countdown
    PauseTimer,
    /// Re-arm the countdown at full duration
    ResetTimer,
    /// One more rep in the current set
    RepsUp,
    /// One rep fewer in the current set
    RepsDown,
    /// Mark one more set done
    Increment,
    /// Undo one set
    Decrement,
    /// Clear all sets once complete
    ResetSets,
    /// Refetch the day snapshot
    Refresh,
    /// Stop the driver
    Shutdown,
}

/// What the driver reports back
#[derive(Debug, Clone, PartialEq)]
pub enum DriverEvent {
    /// Widget state after a change
    Updated(WidgetView),
    /// A set finished on the timer
    Notice(Notice),
    /// A set operation was refused locally
    Rejected(Rejected),
    /// A remote operation failed; state is unchanged
    Failed {
        /// Message for an alert
        message: String,
    },
}

type SetResult = AppResult<Option<ActivityProgress>>;

/// Event loop for one widget
pub struct WidgetDriver {
    widget: TrackingWidget,
    day_id: DayId,
    service: Arc<dyn ProgressService>,
    snapshots: SharedSnapshots,
    tick_period: Duration,
    ticker: Option<Interval>,
    requests: JoinSet<SetResult>,
    refetches: JoinSet<AppResult<DayProgress>>,
}

impl WidgetDriver {
    /// Driver for `widget` under `day_id`
    pub fn new(
        widget: TrackingWidget,
        day_id: DayId,
        service: Arc<dyn ProgressService>,
        snapshots: SharedSnapshots,
    ) -> Self {
        Self {
            widget,
            day_id,
            service,
            snapshots,
            tick_period: Duration::from_millis(TIMER_TICK_MS),
            ticker: None,
            requests: JoinSet::new(),
            refetches: JoinSet::new(),
        }
    }

    /// Override the countdown tick period
    #[must_use]
    pub const fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Run the loop on a new task
    #[must_use]
    pub fn spawn(self) -> DriverHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(command_rx, event_tx));
        DriverHandle {
            commands: command_tx,
            events: event_rx,
            task,
        }
    }

    /// Process commands until `Shutdown` or the command channel closes;
    /// returns the widget in its final state
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::UnboundedSender<DriverEvent>,
    ) -> TrackingWidget {
        let _ = events.send(DriverEvent::Updated(self.widget.view()));
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.handle(command, &events),
                },
                () = next_tick(&mut self.ticker) => self.on_tick(&events),
                Some(joined) = self.requests.join_next() => {
                    self.on_settled(joined, &events).await;
                }
                Some(joined) = self.refetches.join_next() => {
                    self.on_refetched(joined, &events).await;
                }
            }
        }
        self.finish().await
    }

    fn handle(&mut self, command: Command, events: &mpsc::UnboundedSender<DriverEvent>) {
        match command {
            Command::ToggleExpanded => self.widget.toggle_expanded(),
            Command::StartTimer => {
                if self.widget.start_timer().is_applied() {
                    self.arm_ticker();
                }
            }
            Command::PauseTimer => {
                self.widget.pause_timer();
            }
            Command::ResetTimer => {
                self.widget.reset_timer();
            }
            Command::RepsUp => {
                self.widget.increment_reps();
            }
            Command::RepsDown => {
                self.widget.decrement_reps();
            }
            Command::Increment => {
                let issued = self.widget.increment();
                self.issue(issued, events);
            }
            Command::Decrement => {
                let issued = self.widget.decrement();
                self.issue(issued, events);
            }
            Command::ResetSets => {
                let issued = self.widget.reset_sets();
                self.issue(issued, events);
            }
            Command::Refresh => self.refetch(),
            Command::Shutdown => {}
        }
        self.sync_ticker();
        let _ = events.send(DriverEvent::Updated(self.widget.view()));
    }

    fn on_tick(&mut self, events: &mpsc::UnboundedSender<DriverEvent>) {
        match self.widget.tick() {
            Some(Tick::Counting { .. }) => {}
            Some(Tick::Completed(completion)) => {
                let _ = events.send(DriverEvent::Notice(completion.notice));
                if let Some(request) = completion.request {
                    self.dispatch(request);
                }
            }
            None => {}
        }
        self.sync_ticker();
        let _ = events.send(DriverEvent::Updated(self.widget.view()));
    }

    async fn on_settled(
        &mut self,
        joined: Result<SetResult, JoinError>,
        events: &mpsc::UnboundedSender<DriverEvent>,
    ) {
        match self.widget.settle(flatten(joined)) {
            Reconcile::Merged(progress) => {
                let activity_id = self.widget.activity().id.clone();
                self.snapshots
                    .write()
                    .await
                    .merge(&self.day_id, activity_id, progress);
            }
            Reconcile::Refetch => self.refetch(),
            Reconcile::Failed(e) => {
                let _ = events.send(DriverEvent::Failed {
                    message: e.alert_message(),
                });
            }
        }
        self.sync_ticker();
        let _ = events.send(DriverEvent::Updated(self.widget.view()));
    }

    async fn on_refetched(
        &mut self,
        joined: Result<AppResult<DayProgress>, JoinError>,
        events: &mpsc::UnboundedSender<DriverEvent>,
    ) {
        let fetched = joined.unwrap_or_else(|e| {
            Err(AppError::internal(format!("Progress refresh task failed: {e}")))
        });
        match fetched {
            Ok(day) => {
                let entry = day.get(&self.widget.activity().id).cloned();
                self.snapshots
                    .write()
                    .await
                    .replace_day(self.day_id.clone(), day);
                if let Some(progress) = entry {
                    self.widget.apply_progress(&progress);
                }
            }
            Err(e) => {
                warn!(day.id = %self.day_id, error = %e, "Progress refresh failed");
                let _ = events.send(DriverEvent::Failed {
                    message: e.alert_message(),
                });
            }
        }
        self.sync_ticker();
        let _ = events.send(DriverEvent::Updated(self.widget.view()));
    }

    fn issue(
        &mut self,
        issued: Result<SetRequest, Rejected>,
        events: &mpsc::UnboundedSender<DriverEvent>,
    ) {
        match issued {
            Ok(request) => self.dispatch(request),
            Err(reason) => {
                let _ = events.send(DriverEvent::Rejected(reason));
            }
        }
    }

    fn dispatch(&mut self, request: SetRequest) {
        debug!(
            activity.id = %request.activity_id,
            operation = %request.operation,
            target = request.target,
            "Sending set update"
        );
        let service = Arc::clone(&self.service);
        self.requests
            .spawn(async move { request.execute(service.as_ref()).await });
    }

    fn refetch(&mut self) {
        let service = Arc::clone(&self.service);
        let day_id = self.day_id.clone();
        self.refetches
            .spawn(async move { service.fetch_day_progress(&day_id).await });
    }

    fn arm_ticker(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        let mut interval = interval_at(Instant::now() + self.tick_period, self.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.ticker = Some(interval);
    }

    fn sync_ticker(&mut self) {
        if !self.widget.is_timer_running() {
            self.ticker = None;
        }
    }

    /// Settle requests still in flight so their results are not lost
    async fn finish(mut self) -> TrackingWidget {
        self.ticker = None;
        self.refetches.abort_all();
        while let Some(joined) = self.requests.join_next().await {
            if let Reconcile::Merged(progress) = self.widget.settle(flatten(joined)) {
                let activity_id = self.widget.activity().id.clone();
                self.snapshots
                    .write()
                    .await
                    .merge(&self.day_id, activity_id, progress);
            }
        }
        self.widget
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn flatten(joined: Result<SetResult, JoinError>) -> SetResult {
    joined.unwrap_or_else(|e| Err(AppError::internal(format!("Set update task failed: {e}"))))
}

/// Handle to a spawned driver
pub struct DriverHandle {
    commands: mpsc::UnboundedSender<Command>,
    events: mpsc::UnboundedReceiver<DriverEvent>,
    task: JoinHandle<TrackingWidget>,
}

impl DriverHandle {
    /// Send a command
    ///
    /// # Errors
    ///
    /// Returns an error if the driver has stopped
    pub fn send(&self, command: Command) -> AppResult<()> {
        self.commands
            .send(command)
            .map_err(|_| AppError::internal("Tracking driver has stopped"))
    }

    /// Next event, or `None` once the driver has stopped
    pub async fn next_event(&mut self) -> Option<DriverEvent> {
        self.events.recv().await
    }

    /// Stop the driver and return the widget's final state
    ///
    /// # Errors
    ///
    /// Returns an error if the driver task panicked
    pub async fn shutdown(self) -> AppResult<TrackingWidget> {
        let _ = self.commands.send(Command::Shutdown);
        self.task
            .await
            .map_err(|e| AppError::internal(format!("Tracking driver failed: {e}")))
    }
}
