//! Reservation types for tracking campsite bookings.
//!
//! This module provides the persisted reservation entity, the candidate
//! request used to create one, and the opaque reservation identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::DateRange;

/// A unique identifier for a reservation.
///
/// Identifiers are assigned by the store on creation, are immutable for the
/// lifetime of the reservation, and are never reused after deletion.
///
/// # Examples
///
/// ```
/// use campsite::ReservationId;
///
/// let id = ReservationId::from(7);
/// assert_eq!(format!("{id}"), "7");
/// assert_eq!("7".parse::<ReservationId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ReservationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A candidate reservation, not yet persisted.
///
/// The request carries everything a reservation needs except the identifier,
/// which the store assigns at creation. Construction trims the camper fields
/// and rejects empty values; whether the email is well-formed is the calling
/// layer's concern.
///
/// # Examples
///
/// ```
/// use campsite::{DateRange, ReservationRequest};
/// use chrono::NaiveDate;
///
/// let dates = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 8, 3).unwrap(),
/// ).unwrap();
///
/// let request = ReservationRequest::new("John Doe", "john@example.com", dates).unwrap();
/// assert_eq!(request.camper_name(), "John Doe");
///
/// // Empty fields are rejected
/// assert!(ReservationRequest::new("  ", "john@example.com", dates).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    camper_name: String,
    camper_email: String,
    dates: DateRange,
}

impl ReservationRequest {
    /// Creates a new reservation request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the camper name or email is empty
    /// after trimming whitespace.
    pub fn new(
        camper_name: impl Into<String>,
        camper_email: impl Into<String>,
        dates: DateRange,
    ) -> Result<Self, ValidationError> {
        let camper_name = non_empty("camper_name", camper_name.into())?;
        let camper_email = non_empty("camper_email", camper_email.into())?;
        Ok(Self {
            camper_name,
            camper_email,
            dates,
        })
    }

    /// Returns the camper's full name.
    #[must_use]
    pub fn camper_name(&self) -> &str {
        &self.camper_name
    }

    /// Returns the camper's email address.
    #[must_use]
    pub fn camper_email(&self) -> &str {
        &self.camper_email
    }

    /// Returns the requested dates.
    #[must_use]
    pub const fn dates(&self) -> &DateRange {
        &self.dates
    }
}

fn non_empty(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.to_string(),
            message: "must be non-empty after trimming whitespace".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// A persisted campsite reservation.
///
/// Reservations are only ever produced by the store, which assigns the
/// identifier. The camper fields are opaque to the library; only the dates
/// participate in conflict resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    camper_name: String,
    camper_email: String,
    dates: DateRange,
}

impl Reservation {
    /// Assembles a reservation from its stored parts.
    ///
    /// Intended for the storage layer when materializing rows; library
    /// callers obtain reservations from the manager instead.
    #[must_use]
    pub(crate) fn from_parts(
        id: ReservationId,
        camper_name: String,
        camper_email: String,
        dates: DateRange,
    ) -> Self {
        Self {
            id,
            camper_name,
            camper_email,
            dates,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the camper's full name.
    #[must_use]
    pub fn camper_name(&self) -> &str {
        &self.camper_name
    }

    /// Returns the camper's email address.
    #[must_use]
    pub fn camper_email(&self) -> &str {
        &self.camper_email
    }

    /// Returns the booked dates.
    #[must_use]
    pub const fn dates(&self) -> &DateRange {
        &self.dates
    }

    /// Returns a copy of this reservation with different dates.
    ///
    /// The identifier and camper fields are preserved; this is the shape a
    /// date modification takes before being written back to the store.
    #[must_use]
    pub fn with_dates(&self, dates: DateRange) -> Self {
        Self {
            dates,
            ..self.clone()
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reservation {} for {} ({})",
            self.id, self.camper_name, self.dates
        )
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
