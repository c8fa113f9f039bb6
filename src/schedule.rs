// ABOUTME: Week schedule view model for the hosting screen
// ABOUTME: Day selection, overall progress, duration formatting and progress bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Local};
use weekfit_core::constants::progress_bands;
use weekfit_core::models::{Activity, Day, DayProgress, User, Weekday};

/// The user's week with one selected day
#[derive(Debug, Clone)]
pub struct WeekSchedule {
    days: Vec<Day>,
    selected: Weekday,
}

/// One entry of the weekday tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTab {
    /// Weekday
    pub weekday: Weekday,
    /// Three-letter label
    pub label: &'static str,
    /// Currently selected
    pub selected: bool,
    /// Matches the local date
    pub today: bool,
}

impl WeekSchedule {
    /// Schedule for `user` with today selected
    #[must_use]
    pub fn new(user: &User) -> Self {
        Self::for_weekday(user.days.clone(), today())
    }

    /// Schedule over `days` with `selected` chosen
    #[must_use]
    pub const fn for_weekday(days: Vec<Day>, selected: Weekday) -> Self {
        Self { days, selected }
    }

    /// Change the selected day
    pub fn select(&mut self, weekday: Weekday) {
        self.selected = weekday;
    }

    /// Selected weekday
    #[must_use]
    pub const fn selected(&self) -> Weekday {
        self.selected
    }

    /// Schedule entry for the selected weekday; `None` means nothing can be
    /// shown for that day
    #[must_use]
    pub fn selected_day(&self) -> Option<&Day> {
        self.day(self.selected)
    }

    /// Schedule entry for any weekday
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&Day> {
        self.days.iter().find(|d| d.day == weekday)
    }

    /// Activities of the selected day, empty if it has no entry
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        match self.selected_day() {
            Some(day) => &day.activities,
            None => &[],
        }
    }

    /// Rounded mean of the per-activity sets percentage; activities without a
    /// snapshot entry count as zero
    #[must_use]
    pub fn overall_progress(&self, progress: &DayProgress) -> u32 {
        let activities = self.activities();
        if activities.is_empty() {
            return 0;
        }
        let total: f64 = activities
            .iter()
            .map(|a| progress.get(&a.id).map_or(0.0, |p| p.sets_percentage))
            .sum();
        (total / activities.len() as f64).round() as u32
    }

    /// Activities with every set done
    #[must_use]
    pub fn completed_activities(&self) -> usize {
        self.activities().iter().filter(|a| a.is_complete()).count()
    }

    /// "1 activity" or "N activities" for the selected day
    #[must_use]
    pub fn activity_count_label(&self) -> String {
        match self.activities().len() {
            1 => "1 activity".to_owned(),
            n => format!("{n} activities"),
        }
    }

    /// Monday-to-Sunday tab strip
    #[must_use]
    pub fn tabs(&self) -> Vec<DayTab> {
        let today = today();
        Weekday::ALL
            .into_iter()
            .map(|weekday| DayTab {
                weekday,
                label: weekday.short_label(),
                selected: weekday == self.selected,
                today: weekday == today,
            })
            .collect()
    }
}

/// Weekday of the local date
#[must_use]
pub fn today() -> Weekday {
    Weekday::from_chrono(Local::now().weekday())
}

/// "Xm Ys" when at least a minute, otherwise "Ys"; "N/A" for negative input
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    if seconds < 0 {
        return "N/A".to_owned();
    }
    let minutes = seconds / 60;
    let rest = seconds % 60;
    if minutes > 0 {
        format!("{minutes}m {rest}s")
    } else {
        format!("{seconds}s")
    }
}

/// Completion band used to color progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// 100% and above
    Complete,
    /// 75% and above
    High,
    /// 50% and above
    Medium,
    /// 25% and above
    Low,
    /// Below 25%
    None,
}

impl ProgressBand {
    /// Band for a percentage
    #[must_use]
    pub const fn from_percentage(percentage: u32) -> Self {
        if percentage >= progress_bands::COMPLETE {
            Self::Complete
        } else if percentage >= progress_bands::HIGH {
            Self::High
        } else if percentage >= progress_bands::MEDIUM {
            Self::Medium
        } else if percentage >= progress_bands::LOW {
            Self::Low
        } else {
            Self::None
        }
    }

    /// Display color as a hex string
    #[must_use]
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Complete => "#4CAF50",
            Self::High => "#8BC34A",
            Self::Medium => "#FFC107",
            Self::Low => "#FF9800",
            Self::None => "#9E9E9E",
        }
    }
}
