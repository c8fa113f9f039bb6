// ABOUTME: Countdown timer finite state machine for time-based activities
// ABOUTME: Idle/Running/Paused/Completed with an explicit rearm transition back to Idle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Countdown Timer
//!
//! ```text
//!            start (remaining > 0)          tick (remaining == 1)
//!   Idle(T) ──────────────────────▶ Running ─────────────────────▶ Completed
//!     ▲  ▲                          │    ▲                            │
//!     │  │               pause      │    │ start                      │
//!     │  │                          ▼    │                            │
//!     │  └──────── reset ──────── Paused ┘                            │
//!     └──────────────────────────── rearm ────────────────────────────┘
//! ```
//!
//! `reset` is accepted from every state. The machine holds no clock: the
//! owner calls [`CountdownTimer::tick`] once per second while
//! [`CountdownTimer::is_running`] is true.

/// Timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Armed and waiting to start
    Idle {
        /// Seconds left
        remaining: u32,
    },
    /// Counting down
    Running {
        /// Seconds left
        remaining: u32,
    },
    /// Stopped mid-countdown
    Paused {
        /// Seconds left
        remaining: u32,
    },
    /// Reached zero; waits for `rearm` or `reset`
    Completed,
}

/// Whether a requested transition took effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed
    Applied,
    /// The request was not valid from the current state; nothing changed
    Ignored,
}

impl Transition {
    /// True if the state changed
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of one tick while running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed, countdown continues
    Counting {
        /// Seconds left
        remaining: u32,
    },
    /// The countdown crossed zero; emitted once per crossing
    Completed,
}

/// Countdown from a configured duration in whole seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    duration: u32,
    state: TimerState,
}

impl CountdownTimer {
    /// Armed timer for `duration` seconds
    #[must_use]
    pub const fn new(duration: u32) -> Self {
        Self {
            duration,
            state: TimerState::Idle {
                remaining: duration,
            },
        }
    }

    /// Configured duration
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Seconds left; zero once completed
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        match self.state {
            TimerState::Idle { remaining }
            | TimerState::Running { remaining }
            | TimerState::Paused { remaining } => remaining,
            TimerState::Completed => 0,
        }
    }

    /// True while counting down
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// True if `start` would be applied
    #[must_use]
    pub const fn can_start(&self) -> bool {
        match self.state {
            TimerState::Idle { remaining } | TimerState::Paused { remaining } => remaining > 0,
            TimerState::Running { .. } | TimerState::Completed => false,
        }
    }

    /// `Idle`/`Paused` with time left → `Running`
    pub fn start(&mut self) -> Transition {
        match self.state {
            TimerState::Idle { remaining } | TimerState::Paused { remaining } if remaining > 0 => {
                self.state = TimerState::Running { remaining };
                Transition::Applied
            }
            _ => Transition::Ignored,
        }
    }

    /// `Running` → `Paused`
    pub fn pause(&mut self) -> Transition {
        match self.state {
            TimerState::Running { remaining } => {
                self.state = TimerState::Paused { remaining };
                Transition::Applied
            }
            _ => Transition::Ignored,
        }
    }

    /// Any state → `Idle(duration)`
    pub fn reset(&mut self) -> Transition {
        self.state = TimerState::Idle {
            remaining: self.duration,
        };
        Transition::Applied
    }

    /// `Completed` → `Idle(duration)`
    pub fn rearm(&mut self) -> Transition {
        match self.state {
            TimerState::Completed => self.reset(),
            _ => Transition::Ignored,
        }
    }

    /// Advance one second; `None` unless running
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let TimerState::Running { remaining } = self.state else {
            return None;
        };
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.state = TimerState::Completed;
            Some(TimerEvent::Completed)
        } else {
            self.state = TimerState::Running { remaining };
            Some(TimerEvent::Counting { remaining })
        }
    }
}
