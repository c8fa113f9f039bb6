// ABOUTME: Output formatting helpers for the weekfit CLI
// ABOUTME: Renders users, the week overview, day activity lists and tracking widget state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use weekfit::models::{Activity, ActivityKind, DayProgress, User};
use weekfit::schedule::{format_duration, DayTab, ProgressBand, WeekSchedule};
use weekfit::tracking::{Controls, DriverEvent, TimerState, WidgetView};

const BAR_WIDTH: usize = 20;

/// Display the signed-in user
pub fn display_user(user: &User) {
    println!("{} <{}>", user.name, user.email);
    if let Some(role) = &user.role {
        println!("   Role: {role}");
    }
    let activities: usize = user.days.iter().map(|d| d.activities.len()).sum();
    println!("   Scheduled days: {}", user.days.len());
    println!("   Activities: {activities}");
}

/// Display one line of the week overview
pub fn display_week_row(tab: &DayTab, schedule: &WeekSchedule, progress: &DayProgress) {
    let marker = if tab.today { "*" } else { " " };
    let overall = schedule.overall_progress(progress);
    println!(
        "{marker} {:<3}  {:<14} {} {overall:>3}%",
        tab.label,
        schedule.activity_count_label(),
        progress_bar(overall),
    );
}

/// Display the selected day's activities
pub fn display_day(schedule: &WeekSchedule, progress: &DayProgress) {
    let weekday = schedule.selected();
    let overall = schedule.overall_progress(progress);
    println!("\n{weekday} - {}", schedule.activity_count_label());
    println!("{}", "=".repeat(50));
    println!(
        "Overall: {} {overall}% ({} of {} complete)",
        progress_bar(overall),
        schedule.completed_activities(),
        schedule.activities().len()
    );

    if schedule.activities().is_empty() {
        println!("\nNo activities scheduled for {weekday}.");
        return;
    }

    for activity in schedule.activities() {
        let (done, percentage) = progress.get(&activity.id).map_or(
            (activity.sets_completed(), activity.completion_percentage()),
            |p| (p.sets_completed, p.sets_percentage.round() as u32),
        );
        println!("\n[{}] {}", activity.id, activity.name);
        println!("   Goal: {}", goal_label(activity));
        println!(
            "   Sets: {done}/{}  {} {percentage}%",
            activity.sets(),
            progress_bar(percentage)
        );
        if let Some(description) = &activity.description {
            println!("   {description}");
        }
        if let Some(url) = &activity.reference_url {
            println!("   Reference: {url}");
        }
    }
}

/// Display the tracking widget state
pub fn display_view(view: &WidgetView) {
    let status = if view.loading { " (saving...)" } else { "" };
    println!(
        "{}: {}/{} sets {} {}%{status}",
        view.name,
        view.sets_completed,
        view.sets,
        progress_bar(view.percentage),
        view.percentage
    );
    if !view.expanded {
        return;
    }
    match view.controls {
        Controls::Timer {
            state,
            remaining,
            duration,
        } => {
            let label = match state {
                TimerState::Idle { .. } => "ready",
                TimerState::Running { .. } => "running",
                TimerState::Paused { .. } => "paused",
                TimerState::Completed => "done",
            };
            println!(
                "   Timer: {} of {} ({label})",
                format_duration(i64::from(remaining)),
                format_duration(i64::from(duration))
            );
        }
        Controls::Stepper { reps, goal } => println!("   Reps: {reps}/{goal}"),
    }
    if view.reset_enabled {
        println!("   All sets done. Type 'reset-sets' to start over.");
    }
}

/// Display one driver event
pub fn display_event(event: &DriverEvent) {
    match event {
        DriverEvent::Updated(view) => display_view(view),
        DriverEvent::Notice(notice) => println!("\n{}\n{}\n", notice.title(), notice.message()),
        DriverEvent::Rejected(reason) => println!("{reason}"),
        DriverEvent::Failed { message } => println!("Error: {message}"),
    }
}

/// Display the interactive tracking commands
pub fn display_track_help() {
    println!("Commands:");
    println!("   t, toggle      show or hide details");
    println!("   s, start       start the timer");
    println!("   p, pause       pause the timer");
    println!("   r, reset       reset the timer");
    println!("   +, -           count reps");
    println!("   i, inc         mark a set done");
    println!("   d, dec         undo a set");
    println!("   x, reset-sets  clear all sets");
    println!("   f, refresh     reload progress");
    println!("   q, quit        stop tracking");
}

fn goal_label(activity: &Activity) -> String {
    match activity.kind() {
        ActivityKind::Reps { reps } => format!("{reps} reps per set"),
        ActivityKind::Time { seconds } => {
            format!("{} per set", format_duration(i64::from(seconds)))
        }
    }
}

fn progress_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize * BAR_WIDTH) / 100;
    let band = match ProgressBand::from_percentage(percentage) {
        ProgressBand::Complete => '#',
        ProgressBand::High | ProgressBand::Medium => '=',
        ProgressBand::Low | ProgressBand::None => '-',
    };
    format!(
        "[{}{}]",
        band.to_string().repeat(filled),
        " ".repeat(BAR_WIDTH - filled)
    )
}
