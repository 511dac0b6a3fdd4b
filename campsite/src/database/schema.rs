//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the schema for the campsite reservation system.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked on every open to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Dates are stored as ISO-8601 text (`YYYY-MM-DD`), so lexicographic
/// comparison in SQL matches chronological order. AUTOINCREMENT keeps ids
/// from being reused after a reservation is deleted.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        camper_name TEXT NOT NULL,
        camper_email TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL
    )";

/// SQL statement to create an index on the reservation dates.
///
/// This index speeds up overlap scans over the calendar.
pub const CREATE_DATES_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_dates ON reservations(start_date, end_date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a new reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (camper_name, camper_email, start_date, end_date)
    VALUES (?, ?, ?, ?)
";

/// SQL statement to select a reservation by id.
pub const SELECT_BY_ID: &str = r"
    SELECT id, camper_name, camper_email, start_date, end_date
    FROM reservations
    WHERE id = ?
";

/// SQL statement to select all reservations overlapping a date range.
///
/// Two inclusive ranges overlap when each starts no later than the other
/// ends; parameters are the query range's start and end dates.
pub const SELECT_OVERLAPPING: &str = r"
    SELECT id, camper_name, camper_email, start_date, end_date
    FROM reservations
    WHERE start_date <= ?2 AND end_date >= ?1
    ORDER BY start_date ASC
";

/// SQL statement to rewrite a reservation's fields.
pub const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET camper_name = ?, camper_email = ?, start_date = ?, end_date = ?
    WHERE id = ?
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// SQL statement to list every reservation, earliest stay first.
pub const LIST_RESERVATIONS: &str = r"
    SELECT id, camper_name, camper_email, start_date, end_date
    FROM reservations
    ORDER BY start_date, id
";
