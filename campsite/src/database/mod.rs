//! Database layer for durable storage of campsite reservations.
//!
//! This module provides a SQLite-based storage layer with the locking
//! discipline the reservation manager relies on: all writes go through an
//! exclusive transaction that is held from the overlap check until commit,
//! so concurrent callers can never both observe "no conflict" and then both
//! write.
//!
//! # Examples
//!
//! ```no_run
//! use campsite::database::{Database, DatabaseConfig};
//! use campsite::{DateRange, ReservationRequest};
//! use chrono::NaiveDate;
//!
//! let config = DatabaseConfig::new("/tmp/campsite.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let dates = DateRange::new(
//!     NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 8, 3).unwrap(),
//! ).unwrap();
//! let request = ReservationRequest::new("John Doe", "john@example.com", dates).unwrap();
//!
//! let tx = db.begin_write().unwrap();
//! let created = tx.insert(&request).unwrap();
//! tx.commit().unwrap();
//! println!("reserved under id {}", created.id());
//! ```

mod config;
mod connection;
pub mod migrations;
mod schema;
mod store;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;
pub use store::StoreTransaction;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
