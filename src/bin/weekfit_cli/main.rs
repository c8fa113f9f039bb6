// ABOUTME: Weekfit CLI - command-line client for the weekly workout planner
// ABOUTME: Handles login, schedule browsing, activity edits and interactive set tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! export WEEKFIT_API_URL=https://api.example.com/
//!
//! # Sign in and keep the token for later commands
//! weekfit login --email me@example.com --password secret
//!
//! # Show the week and today's activities
//! weekfit week
//! weekfit day --day tue
//!
//! # Add a 3 x 2 minute plank to Tuesday
//! weekfit add-activity --day tue --name Plank --sets 3 --minutes 2
//!
//! # Track an activity interactively
//! weekfit track 665f1c2e9b1d --day tue
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use weekfit::api::ApiClient;
use weekfit::config::ClientConfig;
use weekfit::logging::LoggingConfig;
use weekfit::models::Weekday;
use weekfit::session::{FileTokenStore, SessionManager};

type Manager = SessionManager<FileTokenStore>;

#[derive(Parser)]
#[command(
    name = "weekfit",
    about = "Weekly workout planner client",
    long_about = "Plan a week of workouts, track sets with a countdown timer or rep counter, and sync progress with the weekfit API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Sign in and store the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Password confirmation (defaults to the password)
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the week with per-day activity counts and progress
    Week,

    /// Show one day's activities and progress
    Day {
        /// Weekday name or prefix (defaults to today)
        #[arg(long)]
        day: Option<Weekday>,
    },

    /// Add an activity to a day
    AddActivity {
        /// Weekday name or prefix (defaults to today)
        #[arg(long)]
        day: Option<Weekday>,

        /// Activity name
        #[arg(long)]
        name: String,

        /// Number of sets
        #[arg(long)]
        sets: String,

        /// Reps per set (rep-based activity)
        #[arg(long, conflicts_with = "minutes")]
        reps: Option<String>,

        /// Minutes per set (time-based activity)
        #[arg(long)]
        minutes: Option<String>,

        /// Optional description
        #[arg(long)]
        description: Option<String>,

        /// Optional reference link
        #[arg(long)]
        reference_url: Option<String>,
    },

    /// Delete an activity from a day
    DeleteActivity {
        /// Activity ID
        activity_id: String,

        /// Weekday name or prefix (defaults to today)
        #[arg(long)]
        day: Option<Weekday>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Track sets for an activity interactively
    Track {
        /// Activity ID
        activity_id: String,

        /// Weekday name or prefix (defaults to today)
        #[arg(long)]
        day: Option<Weekday>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = ClientConfig::from_env()?;
    debug!(
        api = %config.api_base_url,
        token_path = %config.token_path.display(),
        "Loaded client configuration"
    );
    let manager: Manager = SessionManager::new(
        ApiClient::new(&config)?,
        FileTokenStore::new(config.token_path.clone()),
    );

    execute_command(cli.command, &manager).await
}

async fn execute_command(command: Command, manager: &Manager) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            commands::account::login(manager, email, password).await?;
        }
        Command::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            commands::account::register(manager, name, email, password, confirm_password).await?;
        }
        Command::Logout => commands::account::logout(manager)?,
        Command::Whoami => commands::account::whoami(manager).await?,
        Command::Week => commands::week::week(manager).await?,
        Command::Day { day } => commands::week::day(manager, day).await?,
        Command::AddActivity {
            day,
            name,
            sets,
            reps,
            minutes,
            description,
            reference_url,
        } => {
            let input = commands::activities::AddActivityInput {
                name,
                sets,
                reps,
                minutes,
                description,
                reference_url,
            };
            commands::activities::add(manager, day, input).await?;
        }
        Command::DeleteActivity {
            activity_id,
            day,
            yes,
        } => commands::activities::delete(manager, day, &activity_id, yes).await?,
        Command::Track { activity_id, day } => {
            commands::track::track(manager, day, &activity_id).await?;
        }
    }
    Ok(())
}
