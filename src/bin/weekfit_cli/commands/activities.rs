// ABOUTME: Activity edit commands for the weekfit CLI
// ABOUTME: Adds validated activities to a day and deletes them after confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use weekfit::activity_form::{added_message, delete_confirmation, ActivityForm};
use weekfit::errors::{AppError, AppResult};
use weekfit::models::{ActivityId, ActivityType, Day, Weekday};
use weekfit::schedule::today;
use weekfit::session::Session;

use crate::Manager;

/// Raw add-activity flags
pub struct AddActivityInput {
    /// Activity name
    pub name: String,
    /// Number of sets
    pub sets: String,
    /// Reps per set
    pub reps: Option<String>,
    /// Minutes per set; selects a time-based activity
    pub minutes: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Reference link
    pub reference_url: Option<String>,
}

impl AddActivityInput {
    fn into_form(self) -> ActivityForm {
        let activity_type = if self.minutes.is_some() {
            ActivityType::Time
        } else {
            ActivityType::Reps
        };
        ActivityForm {
            name: self.name,
            description: self.description.unwrap_or_default(),
            sets: self.sets,
            activity_type,
            reps: self.reps.unwrap_or_default(),
            minutes: self.minutes.unwrap_or_default(),
            reference_url: self.reference_url.unwrap_or_default(),
        }
    }
}

/// Add an activity to a day
pub async fn add(
    manager: &Manager,
    weekday: Option<Weekday>,
    input: AddActivityInput,
) -> AppResult<()> {
    let activity = input.into_form().validate()?;
    let session = manager.restore().await?;
    let weekday = weekday.unwrap_or_else(today);
    let day = scheduled_day(&session, weekday)?;

    session.client().add_activity(&day.id, &activity).await?;
    info!(day.id = %day.id, name = %activity.name, "Activity added");
    println!("{}", added_message(&activity.name, weekday));
    Ok(())
}

/// Delete an activity from a day
pub async fn delete(
    manager: &Manager,
    weekday: Option<Weekday>,
    activity_id: &str,
    skip_confirmation: bool,
) -> AppResult<()> {
    let session = manager.restore().await?;
    let day = scheduled_day(&session, weekday.unwrap_or_else(today))?;
    let activity = day
        .activity(activity_id)
        .ok_or_else(|| AppError::not_found("Activity").with_resource_id(activity_id))?;

    if !skip_confirmation && !confirm(&delete_confirmation(&activity.name)).await? {
        println!("Cancelled.");
        return Ok(());
    }

    session
        .client()
        .delete_activity(&day.id, &ActivityId::from(activity_id))
        .await?;
    info!(day.id = %day.id, activity.id = %activity_id, "Activity deleted");
    println!("Activity \"{}\" deleted.", activity.name);
    Ok(())
}

fn scheduled_day(session: &Session, weekday: Weekday) -> AppResult<&Day> {
    session
        .user()
        .day(weekday)
        .ok_or_else(|| AppError::not_found(format!("{weekday} schedule")))
}

async fn confirm(prompt: &str) -> AppResult<bool> {
    let mut stdout = io::stdout();
    stdout
        .write_all(format!("{prompt} [y/N] ").as_bytes())
        .await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(io::stdin()).read_line(&mut answer).await?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
