//! Cancel command implementation.

use campsite::ReservationId;
use clap::Args;

use crate::error::CliError;
use crate::utils::{open_manager, GlobalOptions};

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id to cancel
    #[arg(value_name = "ID")]
    pub id: ReservationId,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut manager = open_manager(global)?;
        manager.cancel(self.id)?;

        if !global.quiet {
            println!("Cancelled reservation {}", self.id);
        }
        Ok(())
    }
}
