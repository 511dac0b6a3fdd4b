//! Reserve command implementation.
//!
//! Books a stay for a camper. On success prints the assigned reservation
//! id, which later `cancel` and `modify` calls take as their argument.

use campsite::{DateRange, ReservationRequest};
use chrono::NaiveDate;
use clap::Args;

use crate::error::CliError;
use crate::utils::{open_manager, GlobalOptions, OutputFormat};

/// Book a stay.
#[derive(Args)]
pub struct ReserveCommand {
    /// Camper's full name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Camper's email address
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// First night of the stay
    #[arg(long, value_name = "DATE")]
    pub from: NaiveDate,

    /// Last night of the stay
    #[arg(long, value_name = "DATE")]
    pub to: NaiveDate,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dates = DateRange::new(self.from, self.to)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let request = ReservationRequest::new(self.name, self.email, dates)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let mut manager = open_manager(global)?;
        let reservation = manager.reserve(request)?;

        match self.format {
            OutputFormat::Human => println!("{}", reservation.id()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(&reservation).map_err(|e| CliError::Io(e.into()))?
            ),
        }
        Ok(())
    }
}
