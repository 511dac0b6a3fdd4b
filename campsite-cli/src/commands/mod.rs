//! CLI command implementations.
//!
//! Each command is a clap `Args` struct with an `execute` method taking the
//! global options.

mod availability;
mod cancel;
mod list;
mod modify;
mod reserve;

pub use availability::AvailabilityCommand;
pub use cancel::CancelCommand;
pub use list::ListCommand;
pub use modify::ModifyCommand;
pub use reserve::ReserveCommand;
