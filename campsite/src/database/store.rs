//! Transactional store operations for reservations.
//!
//! This module implements the storage contract the reservation manager
//! builds on: an exclusive write transaction that spans the overlap check
//! and the write, so the check-then-write sequence appears atomic to
//! concurrent callers.
//!
//! A range-overlap lock cannot be a single-row lock, because on create the
//! conflicting row does not exist yet. `BEGIN IMMEDIATE` takes SQLite's
//! single write lock up front instead: every query made through the guard
//! observes a calendar no concurrent writer can change until the guard
//! commits or rolls back.

use rusqlite::{params, OptionalExtension, Transaction, TransactionBehavior};

use crate::calendar::DateRange;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId, ReservationRequest};

use super::connection::Database;
use super::schema::{
    DELETE_RESERVATION, INSERT_RESERVATION, LIST_RESERVATIONS, SELECT_BY_ID, SELECT_OVERLAPPING,
    UPDATE_RESERVATION,
};

/// Maps a busy-timeout expiry to [`Error::LockTimeout`].
///
/// SQLite reports an expired busy timeout as `SQLITE_BUSY`; everything else
/// passes through as a database error.
fn lock_error(err: rusqlite::Error, seconds: u64) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::DatabaseBusy => {
            Error::LockTimeout { seconds }
        }
        other => Error::Database(other),
    }
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, `camper_name`, `camper_email`,
/// `start_date`, `end_date`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let camper_name: String = row.get(1)?;
    let camper_email: String = row.get(2)?;
    let start_date: chrono::NaiveDate = row.get(3)?;
    let end_date: chrono::NaiveDate = row.get(4)?;

    let dates = DateRange::new(start_date, end_date)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Reservation::from_parts(
        ReservationId::from(id),
        camper_name,
        camper_email,
        dates,
    ))
}

/// An exclusive write transaction over the reservation calendar.
///
/// The guard holds SQLite's write lock from creation until [`commit`]
/// returns; dropping it without committing rolls every change back. Any
/// read made through the guard is therefore stable for the transaction's
/// lifetime, which is what lets the manager trust an overlap check long
/// enough to act on it.
///
/// [`commit`]: StoreTransaction::commit
pub struct StoreTransaction<'conn> {
    tx: Transaction<'conn>,
    busy_timeout_secs: u64,
}

impl std::fmt::Debug for StoreTransaction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreTransaction")
            .field("busy_timeout_secs", &self.busy_timeout_secs)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Begins an exclusive write transaction.
    ///
    /// Blocks until the write lock is acquired or the configured busy
    /// timeout expires.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if a concurrent writer holds the lock
    /// for longer than the busy timeout, or a database error if the
    /// transaction cannot be started.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use campsite::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/campsite.db")).unwrap();
    /// let tx = db.begin_write().unwrap();
    /// // ... queries and writes ...
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_write(&mut self) -> Result<StoreTransaction<'_>> {
        let seconds = self.config.busy_timeout.as_secs();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| lock_error(e, seconds))?;
        Ok(StoreTransaction {
            tx,
            busy_timeout_secs: seconds,
        })
    }

    /// Lists every reservation, earliest stay first.
    ///
    /// Plain read outside the write lock; intended for display, not for
    /// conflict decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(LIST_RESERVATIONS)?;
        let rows = stmt.query_map([], row_to_reservation)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::from)
    }
}

impl StoreTransaction<'_> {
    /// Returns all reservations whose dates overlap the given range,
    /// ordered by start date ascending.
    ///
    /// Because the write lock is already held, the result cannot be
    /// invalidated by a concurrent writer before this transaction ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_overlapping(&self, range: &DateRange) -> Result<Vec<Reservation>> {
        let mut stmt = self.tx.prepare(SELECT_OVERLAPPING)?;
        let rows = stmt.query_map(params![range.start(), range.end()], row_to_reservation)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::from)
    }

    /// Looks up a single reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if it doesn't
    pub fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        self.tx
            .query_row(SELECT_BY_ID, params![id.value()], row_to_reservation)
            .optional()
            .map_err(Error::from)
    }

    /// Inserts a new reservation and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, request: &ReservationRequest) -> Result<Reservation> {
        self.tx.execute(
            INSERT_RESERVATION,
            params![
                request.camper_name(),
                request.camper_email(),
                request.dates().start(),
                request.dates().end(),
            ],
        )?;
        let id = ReservationId::from(self.tx.last_insert_rowid());
        Ok(Reservation::from_parts(
            id,
            request.camper_name().to_string(),
            request.camper_email().to_string(),
            *request.dates(),
        ))
    }

    /// Rewrites an existing reservation's fields.
    ///
    /// The caller is expected to have located the reservation through
    /// [`find_by_id`] within this same transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// [`find_by_id`]: StoreTransaction::find_by_id
    pub fn update(&self, reservation: &Reservation) -> Result<()> {
        self.tx.execute(
            UPDATE_RESERVATION,
            params![
                reservation.camper_name(),
                reservation.camper_email(),
                reservation.dates().start(),
                reservation.dates().end(),
                reservation.id().value(),
            ],
        )?;
        Ok(())
    }

    /// Deletes a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    ///
    /// # Returns
    ///
    /// `true` if a row was deleted, `false` if no such id existed.
    pub fn delete(&self, id: ReservationId) -> Result<bool> {
        let deleted = self.tx.execute(DELETE_RESERVATION, params![id.value()])?;
        Ok(deleted > 0)
    }

    /// Commits the transaction, releasing the write lock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if the commit itself times out
    /// waiting on the database, or a database error otherwise. The
    /// transaction is rolled back on failure.
    pub fn commit(self) -> Result<()> {
        let Self {
            tx,
            busy_timeout_secs,
        } = self;
        tx.commit().map_err(|e| lock_error(e, busy_timeout_secs))
    }
}
