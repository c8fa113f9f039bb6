// ABOUTME: Weekday enum and the per-day activity schedule entry
// ABOUTME: Parses full and abbreviated day names and maps from chrono weekdays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::activity::Activity;
use super::ids::{DayId, UserId};
use crate::errors::AppError;

/// Day of the week, serialized by its full English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// Monday through Sunday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Full English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Three-letter tab label
    #[must_use]
    pub fn short_label(self) -> &'static str {
        &self.name()[..3]
    }

    /// Convert from chrono's weekday
    #[must_use]
    pub const fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_lowercase();
                name == needle || (needle.len() >= 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| AppError::invalid_input(format!("Unknown weekday '{}'", s.trim())))
    }
}

/// One weekday's schedule: an ordered list of activities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Remote identifier
    #[serde(rename = "_id")]
    pub id: DayId,
    /// Which weekday this entry covers
    pub day: Weekday,
    /// Activities in display order
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
}

impl Day {
    /// Look up an activity by identifier
    #[must_use]
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id.as_str() == id)
    }

    /// "1 activity" or "N activities"
    #[must_use]
    pub fn activity_count_label(&self) -> String {
        match self.activities.len() {
            1 => "1 activity".to_owned(),
            n => format!("{n} activities"),
        }
    }
}
