//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{DateRange, ReservationRequest};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test reservation request for the given camper and dates.
///
/// # Panics
///
/// Panics if the dates or request are invalid. This is acceptable in test
/// code where we want to fail fast.
#[must_use]
pub fn test_request(camper: &str, start: NaiveDate, end: NaiveDate) -> ReservationRequest {
    let dates = DateRange::new(start, end).unwrap();
    ReservationRequest::new(camper, format!("{camper}@example.com"), dates).unwrap()
}
