//! Availability computation over the reservation calendar.
//!
//! Pure date arithmetic: given a query range and the reservations already
//! known to overlap it, produce the dates that remain open. Locking and
//! storage access are the manager's and store's business, not this module's.

use chrono::NaiveDate;

use crate::calendar::DateRange;
use crate::reservation::Reservation;

/// Returns every date in `range` not covered by any reservation in
/// `overlapping`, in ascending order.
///
/// The caller is expected to pass the reservations overlapping `range` as
/// read from the store; reservations entirely outside the range are simply
/// never matched. The scan is O(days × reservations), which stays small
/// because the booking window caps both factors.
///
/// # Examples
///
/// ```
/// use campsite::{available_dates, DateRange};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2023, 8, day).unwrap();
/// let range = DateRange::new(d(1), d(4)).unwrap();
///
/// let open = available_dates(&range, &[]);
/// assert_eq!(open, vec![d(1), d(2), d(3), d(4)]);
/// ```
#[must_use]
pub fn available_dates(range: &DateRange, overlapping: &[Reservation]) -> Vec<NaiveDate> {
    range
        .iter_days()
        .filter(|date| !overlapping.iter().any(|r| r.dates().contains(*date)))
        .collect()
}
