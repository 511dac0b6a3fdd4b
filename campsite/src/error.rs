//! Error types for the campsite library.
//!
//! This module provides the error hierarchy for all reservation operations,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::reservation::ReservationId;

/// Result type alias for operations that may fail with a campsite error.
///
/// # Examples
///
/// ```
/// use campsite::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the campsite library.
///
/// This enum encompasses all possible error conditions that can occur
/// while querying availability or creating, modifying, and cancelling
/// reservations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested dates violate the booking window rules.
    #[error("invalid date range: {reason}")]
    InvalidRange {
        /// The reason the range is invalid.
        reason: String,
    },

    /// The referenced reservation does not exist.
    #[error("no reservation found with id {id}")]
    NotFound {
        /// The id that was looked up.
        id: ReservationId,
    },

    /// The requested dates cannot be booked.
    ///
    /// Raised both when an overlapping reservation is found and when the
    /// calendar lock could not be acquired in time; callers cannot
    /// distinguish "someone else already booked" from "someone else is
    /// booking right now".
    #[error("reservation conflict: {details}")]
    ReservationConflict {
        /// Details about the conflict.
        details: String,
    },

    /// A database lock could not be acquired within the bounded wait.
    ///
    /// Internal condition; [`crate::ReservationManager`] translates it to
    /// [`Error::ReservationConflict`] before it reaches a caller.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error indicates a reservation conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use campsite::Error;
    ///
    /// let err = Error::ReservationConflict { details: "dates taken".into() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReservationConflict { .. })
    }

    /// Check if the error indicates a missing reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use campsite::{Error, ReservationId};
    ///
    /// let err = Error::NotFound { id: ReservationId::from(7) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
