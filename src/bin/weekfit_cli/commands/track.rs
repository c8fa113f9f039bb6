// ABOUTME: Interactive tracking command for the weekfit CLI
// ABOUTME: Drives one activity widget from stdin commands and prints its events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::info;
use weekfit::api::ProgressService;
use weekfit::errors::{AppError, AppResult};
use weekfit::models::Weekday;
use weekfit::schedule::today;
use weekfit::tracking::{Command, ProgressSnapshotStore, TrackingWidget, WidgetDriver};

use crate::helpers::display::{display_event, display_track_help, display_view};
use crate::Manager;

/// Track one activity until `quit` or end of input
pub async fn track(manager: &Manager, weekday: Option<Weekday>, activity_id: &str) -> AppResult<()> {
    let session = manager.restore().await?;
    let weekday = weekday.unwrap_or_else(today);
    let day = session
        .user()
        .day(weekday)
        .ok_or_else(|| AppError::not_found(format!("{weekday} schedule")))?;
    let activity = day
        .activity(activity_id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Activity").with_resource_id(activity_id))?;

    let snapshots = ProgressSnapshotStore::shared();
    let progress = session.client().fetch_day_progress(&day.id).await?;
    let mut widget = TrackingWidget::new(activity);
    if let Some(entry) = progress.get(&widget.activity().id) {
        widget.apply_progress(entry);
    }
    snapshots.write().await.replace_day(day.id.clone(), progress);

    let service: Arc<dyn ProgressService> = Arc::new(session.client().clone());
    let mut handle = WidgetDriver::new(widget, day.id.clone(), service, snapshots).spawn();
    info!(activity.id = %activity_id, day = %weekday, "Tracking started");
    display_track_help();

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                None => break,
                Some(line) => match parse_command(&line) {
                    Some(Command::Shutdown) => break,
                    Some(command) => handle.send(command)?,
                    None => display_track_help(),
                },
            },
            event = handle.next_event() => match event {
                Some(event) => display_event(&event),
                None => break,
            },
        }
    }

    let widget = handle.shutdown().await?;
    println!("Final state:");
    display_view(&widget.view());
    Ok(())
}

fn parse_command(line: &str) -> Option<Command> {
    let command = match line.trim().to_lowercase().as_str() {
        "t" | "toggle" => Command::ToggleExpanded,
        "s" | "start" => Command::StartTimer,
        "p" | "pause" => Command::PauseTimer,
        "r" | "reset" => Command::ResetTimer,
        "+" => Command::RepsUp,
        "-" => Command::RepsDown,
        "i" | "inc" => Command::Increment,
        "d" | "dec" => Command::Decrement,
        "x" | "reset-sets" => Command::ResetSets,
        "f" | "refresh" => Command::Refresh,
        "q" | "quit" => Command::Shutdown,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(" start "), Some(Command::StartTimer));
        assert_eq!(parse_command("+"), Some(Command::RepsUp));
        assert_eq!(parse_command("X"), Some(Command::ResetSets));
        assert_eq!(parse_command("q"), Some(Command::Shutdown));
        assert_eq!(parse_command("jump"), None);
    }
}
