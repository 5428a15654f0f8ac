// ABOUTME: Dpapa CLI - command-line shell over the coaching client core
// ABOUTME: Runs onboarding, shows the dashboard and nutrition targets, manages the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Complete onboarding in one go
//! dpapa-cli onboard --name Sara --age 30 --gender female --activity moderate \
//!     --height 165 --weight 60 --goal fat_loss
//!
//! # Dashboard and nutrition targets for the stored profile
//! dpapa-cli show
//! dpapa-cli nutrition --json
//!
//! # Rename or forget the profile
//! dpapa-cli rename "Sara K"
//! dpapa-cli reset
//!
//! # Starter workout plan and sample progress
//! dpapa-cli workouts
//! dpapa-cli progress
//! ```

mod commands;
mod display;

use clap::{Parser, Subcommand};
use dpapa_coach::config::{AppConfig, StorageBackend};
use dpapa_coach::intelligence::NutritionConfig;
use dpapa_coach::state::AppState;
use dpapa_coach::storage::ProfileStorage;
use dpapa_coach::{AppError, AppResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dpapa-cli",
    about = "Dpapa coaching client",
    long_about = "Onboard a profile, then inspect the dashboard, nutrition targets, and starter plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (file storage)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep the profile in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run onboarding and store the finalized profile
    Onboard(commands::OnboardArgs),

    /// Show the dashboard for the stored profile
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show BMI, BMR, TDEE, and macro targets
    Nutrition {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Change the display name
    Rename {
        /// New name; blank clears it
        name: String,
    },

    /// Forget the stored profile
    Reset,

    /// Show the starter workout plan
    Workouts,

    /// Show the sample weight progress
    Progress,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config
        .logging
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if cli.ephemeral {
        config.storage_backend = StorageBackend::Memory;
    }

    let nutrition = NutritionConfig::global();
    let storage = ProfileStorage::from_config(&config);
    let mut state = AppState::load(storage, config.profile_key.clone()).await;

    match cli.command {
        Command::Onboard(args) => commands::onboard(&mut state, nutrition, &args).await?,
        Command::Show { json } => commands::show(&state, nutrition, json)?,
        Command::Nutrition { json } => commands::nutrition(&state, nutrition, json)?,
        Command::Rename { name } => commands::rename(&mut state, &name).await,
        Command::Reset => commands::reset(&mut state).await,
        Command::Workouts => commands::workouts(),
        Command::Progress => commands::progress(),
    }

    Ok(())
}
