// ABOUTME: Schedule commands for the weekfit CLI
// ABOUTME: Shows the week overview and the activities of one day with their progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::warn;
use weekfit::errors::AppResult;
use weekfit::models::{DayProgress, Weekday};
use weekfit::schedule::{today, WeekSchedule};

use crate::helpers::display::{display_day, display_week_row};
use crate::Manager;

/// Show every weekday with its activity count and overall progress
pub async fn week(manager: &Manager) -> AppResult<()> {
    let session = manager.restore().await?;
    let mut schedule = WeekSchedule::new(session.user());
    println!("Week of {}", session.user().name);

    for tab in schedule.tabs() {
        schedule.select(tab.weekday);
        let progress = match schedule.selected_day() {
            Some(day) => match session.client().fetch_day_progress(&day.id).await {
                Ok(progress) => progress,
                Err(e) => {
                    warn!(day = %tab.weekday, error = %e, "Could not load day progress");
                    DayProgress::new()
                }
            },
            None => DayProgress::new(),
        };
        display_week_row(&tab, &schedule, &progress);
    }
    Ok(())
}

/// Show one day's activities
pub async fn day(manager: &Manager, weekday: Option<Weekday>) -> AppResult<()> {
    let session = manager.restore().await?;
    let mut schedule = WeekSchedule::new(session.user());
    schedule.select(weekday.unwrap_or_else(today));

    let progress = match schedule.selected_day() {
        Some(day) => session.client().fetch_day_progress(&day.id).await?,
        None => DayProgress::new(),
    };
    display_day(&schedule, &progress);
    Ok(())
}
