//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AvailabilityCommand, CancelCommand, ListCommand, ModifyCommand, ReserveCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing campsite reservations.
#[derive(Parser)]
#[command(name = "campsite")]
#[command(version, about = "Manage campsite reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "CAMPSITE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default lock wait bound (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "CAMPSITE_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "CAMPSITE_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show open dates in a window
    Availability(AvailabilityCommand),

    /// Book a stay
    Reserve(ReserveCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Move a reservation to new dates
    Modify(ModifyCommand),

    /// List active reservations
    List(ListCommand),
}
