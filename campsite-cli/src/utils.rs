//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration loading, manager construction, and output formatting.

use std::path::PathBuf;
use std::time::Duration;

use campsite::database::{Database, DatabaseConfig};
use campsite::{Config, ConfigBuilder, Reservation, ReservationManager};
use clap::ValueEnum;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default lock wait bound (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain human-readable text.
    #[default]
    Human,
    /// JSON on stdout.
    Json,
}

/// Load configuration, applying the global flags as overrides.
///
/// Precedence, later winning: config file, environment variables, CLI
/// flags.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .data_dir(global.data_dir.clone())
        .maximum_lock_wait_seconds(global.busy_timeout)
        .disable_autoinit(global.disable_autoinit.then_some(true))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database and wrap it in a reservation manager.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_manager(global: &GlobalOptions) -> Result<ReservationManager, CliError> {
    let config = load_configuration(global)?;

    let data_dir = config
        .data_dir
        .clone()
        .ok_or_else(|| CliError::Config("could not determine data directory".to_string()))?;
    let db_path = data_dir.join("campsite.db");

    if !db_path.exists() && config.disable_autoinit == Some(true) {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);
    if let Some(seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(Duration::from_secs(seconds));
    }

    let db = Database::open(db_config)?;
    Ok(ReservationManager::new(db))
}

/// Render one reservation as a human-readable line.
pub fn format_reservation(reservation: &Reservation) -> String {
    format!(
        "{:<6} {:<24} {:<28} {} to {}",
        reservation.id(),
        reservation.camper_name(),
        reservation.camper_email(),
        reservation.dates().start(),
        reservation.dates().end(),
    )
}
