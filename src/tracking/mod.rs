// ABOUTME: Per-activity progress tracking: countdown timer, set counter, widget and driver
// ABOUTME: Re-exports the tracking state machines and the snapshot store they reconcile into
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tracking
//!
//! Leaves first:
//!
//! - [`snapshot`]: last fetched progress per day, shared read-mostly
//! - [`timer`]: countdown finite state machine
//! - [`set_counter`]: bounded set count with one in-flight guard
//! - [`widget`]: composes the two for one activity
//! - [`driver`]: async loop feeding ticks, commands and request results
//!   into a widget

/// Async event loop for one widget
pub mod driver;
/// Completed-set counter
pub mod set_counter;
/// Progress snapshot store
pub mod snapshot;
/// Countdown timer
pub mod timer;
/// Tracking widget
pub mod widget;

pub use driver::{Command, DriverEvent, DriverHandle, WidgetDriver};
pub use set_counter::{Reconcile, Rejected, SetCounter, SetOperation, SetRequest};
pub use snapshot::{ProgressSnapshotStore, SharedSnapshots};
pub use timer::{CountdownTimer, TimerEvent, TimerState, Transition};
pub use widget::{Completion, Controls, Notice, Tick, TrackingWidget, WidgetView};
