//! Modify command implementation.
//!
//! Moves an existing reservation to new dates. Only the dates change; the
//! id and camper details are preserved.

use campsite::{DateRange, ReservationId};
use chrono::NaiveDate;
use clap::Args;

use crate::error::CliError;
use crate::utils::{format_reservation, open_manager, GlobalOptions, OutputFormat};

/// Move a reservation to new dates.
#[derive(Args)]
pub struct ModifyCommand {
    /// Reservation id to modify
    #[arg(value_name = "ID")]
    pub id: ReservationId,

    /// New first night of the stay
    #[arg(long, value_name = "DATE")]
    pub from: NaiveDate,

    /// New last night of the stay
    #[arg(long, value_name = "DATE")]
    pub to: NaiveDate,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

impl ModifyCommand {
    /// Execute the modify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dates = DateRange::new(self.from, self.to)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let mut manager = open_manager(global)?;
        let reservation = manager.modify(self.id, dates)?;

        match self.format {
            OutputFormat::Human => println!("{}", format_reservation(&reservation)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(&reservation).map_err(|e| CliError::Io(e.into()))?
            ),
        }
        Ok(())
    }
}
