//! List command implementation.

use clap::Args;

use crate::error::CliError;
use crate::utils::{format_reservation, open_manager, GlobalOptions, OutputFormat};

/// List active reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut manager = open_manager(global)?;
        let reservations = manager.list()?;

        match self.format {
            OutputFormat::Human => {
                for reservation in &reservations {
                    println!("{}", format_reservation(reservation));
                }
            }
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(&reservations).map_err(|e| CliError::Io(e.into()))?
            ),
        }
        Ok(())
    }
}
