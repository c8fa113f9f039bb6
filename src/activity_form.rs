// ABOUTME: Add-activity form validation and the confirmation texts around activity edits
// ABOUTME: Converts raw string input into a NewActivity payload, minutes becoming seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use weekfit_core::constants::limits::SECONDS_PER_MINUTE;
use weekfit_core::errors::ValidationError;
use weekfit_core::models::{ActivityKind, ActivityType, NewActivity, Weekday};

/// Raw add-activity input, as typed
#[derive(Debug, Clone)]
pub struct ActivityForm {
    /// Activity name
    pub name: String,
    /// Optional description
    pub description: String,
    /// Number of sets
    pub sets: String,
    /// Rep-based or time-based
    pub activity_type: ActivityType,
    /// Reps per set, for rep-based activities
    pub reps: String,
    /// Minutes per set, for time-based activities
    pub minutes: String,
    /// Optional reference link
    pub reference_url: String,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            sets: String::new(),
            activity_type: ActivityType::Reps,
            reps: String::new(),
            minutes: String::new(),
            reference_url: String::new(),
        }
    }
}

impl ActivityForm {
    /// Check the form and build the creation payload
    ///
    /// Rules run in order and the first failure is returned: name, sets,
    /// then the goal matching the selected type. The goal of the other type
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule
    pub fn validate(&self) -> Result<NewActivity, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::missing("Activity name"));
        }
        let sets = positive(&self.sets).ok_or(ValidationError::not_positive("Sets"))?;
        let kind = match self.activity_type {
            ActivityType::Reps => ActivityKind::Reps {
                reps: positive(&self.reps).ok_or(ValidationError::not_positive("Reps"))?,
            },
            ActivityType::Time => {
                let minutes = positive(&self.minutes)
                    .ok_or(ValidationError::not_positive_in("Time", "in minutes"))?;
                ActivityKind::Time {
                    seconds: minutes.saturating_mul(SECONDS_PER_MINUTE),
                }
            }
        };
        Ok(NewActivity {
            name: name.to_owned(),
            description: non_empty(&self.description),
            reference_url: non_empty(&self.reference_url),
            sets,
            kind,
        })
    }
}

/// Alert text after an activity was created
#[must_use]
pub fn added_message(name: &str, day: Weekday) -> String {
    format!("Activity \"{name}\" added to {day}")
}

/// Confirmation prompt before deleting an activity
#[must_use]
pub fn delete_confirmation(name: &str) -> String {
    format!("Are you sure you want to delete \"{name}\"? This action cannot be undone.")
}

fn positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
