//! Availability command implementation.
//!
//! Shows the open dates in a query window. With no bounds given, the
//! window defaults to tomorrow through one month out, mirroring the
//! booking window itself.

use campsite::DateRange;
use chrono::{Days, Local, Months, NaiveDate};
use clap::Args;

use crate::error::CliError;
use crate::utils::{open_manager, GlobalOptions, OutputFormat};

/// Show open dates in a window.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// First date of the window (default: tomorrow)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Last date of the window (default: one month from the first)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = resolve_window(self.from, self.to, Local::now().date_naive())?;

        let mut manager = open_manager(global)?;
        let open = manager.availability(range)?;

        match self.format {
            OutputFormat::Human => {
                for date in &open {
                    println!("{date}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&open).map_err(to_io_error)?);
            }
        }
        Ok(())
    }
}

fn to_io_error(err: serde_json::Error) -> CliError {
    CliError::Io(err.into())
}

/// Applies the window defaulting and ordering rules.
///
/// Both bounds must be given together or not at all; an absent window runs
/// from tomorrow through one month out. The window may not start in the
/// past.
fn resolve_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DateRange, CliError> {
    let (start, end) = match (from, to) {
        (None, None) => {
            let start = today + Days::new(1);
            let end = start
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX);
            (start, end)
        }
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(CliError::InvalidArguments(
                "provide both --from and --to, or neither".to_string(),
            ))
        }
    };

    if start < today {
        return Err(CliError::InvalidArguments(format!(
            "cannot check availability in the past ({start} is before {today})"
        )));
    }
    if start > end {
        return Err(CliError::InvalidArguments(format!(
            "start date {start} cannot be after end date {end}"
        )));
    }

    DateRange::new(start, end).map_err(|e| CliError::InvalidArguments(e.to_string()))
}
