//! Calendar date ranges.
//!
//! This module provides the inclusive date range type used for reservations
//! and availability queries, with overlap and iteration helpers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An inclusive range of calendar dates.
///
/// Both endpoints are part of the range; a single-day stay has
/// `start == end`. The constructor guarantees `start <= end`, so every
/// `DateRange` in the system is well-formed.
///
/// # Examples
///
/// ```
/// use campsite::DateRange;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 8, 3).unwrap();
/// let range = DateRange::new(start, end).unwrap();
///
/// assert_eq!(range.span_days(), 2);
/// assert_eq!(range.nights(), 3);
///
/// // Inverted ranges are rejected
/// assert!(DateRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange {
                reason: format!("start date {start} is after end date {end}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the distance between the endpoints in days.
    ///
    /// A single-day range spans 0 days.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Returns the number of calendar dates covered by the range.
    #[must_use]
    pub fn nights(&self) -> i64 {
        self.span_days() + 1
    }

    /// Checks whether two ranges share at least one calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use campsite::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2023, 8, day).unwrap();
    /// let a = DateRange::new(d(1), d(3)).unwrap();
    /// let b = DateRange::new(d(3), d(5)).unwrap();
    /// let c = DateRange::new(d(4), d(6)).unwrap();
    ///
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Checks whether the range covers the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates over every date in the range in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use campsite::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2023, 8, day).unwrap();
    /// let range = DateRange::new(d(1), d(3)).unwrap();
    /// let dates: Vec<_> = range.iter_days().collect();
    /// assert_eq!(dates, vec![d(1), d(2), d(3)]);
    /// ```
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_valid_range() {
        let range = DateRange::new(date(2023, 8, 1), date(2023, 8, 4)).unwrap();
        assert_eq!(range.start(), date(2023, 8, 1));
        assert_eq!(range.end(), date(2023, 8, 4));
    }

    #[test]
    fn test_new_single_day_range() {
        let range = DateRange::new(date(2023, 8, 1), date(2023, 8, 1)).unwrap();
        assert_eq!(range.span_days(), 0);
        assert_eq!(range.nights(), 1);
    }

    #[test]
    fn test_new_inverted_range_rejected() {
        let result = DateRange::new(date(2023, 8, 4), date(2023, 8, 1));
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_span_days_across_month_boundary() {
        let range = DateRange::new(date(2023, 7, 30), date(2023, 8, 2)).unwrap();
        assert_eq!(range.span_days(), 3);
    }

    #[test]
    fn test_overlaps_shared_endpoint() {
        let a = DateRange::new(date(2023, 8, 1), date(2023, 8, 3)).unwrap();
        let b = DateRange::new(date(2023, 8, 3), date(2023, 8, 5)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_contained_range() {
        let outer = DateRange::new(date(2023, 8, 1), date(2023, 8, 10)).unwrap();
        let inner = DateRange::new(date(2023, 8, 4), date(2023, 8, 5)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_overlaps_disjoint_ranges() {
        let a = DateRange::new(date(2023, 8, 1), date(2023, 8, 3)).unwrap();
        let b = DateRange::new(date(2023, 8, 4), date(2023, 8, 6)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(2023, 8, 1), date(2023, 8, 3)).unwrap();
        assert!(range.contains(date(2023, 8, 1)));
        assert!(range.contains(date(2023, 8, 2)));
        assert!(range.contains(date(2023, 8, 3)));
        assert!(!range.contains(date(2023, 7, 31)));
        assert!(!range.contains(date(2023, 8, 4)));
    }

    #[test]
    fn test_iter_days_ascending() {
        let range = DateRange::new(date(2023, 7, 30), date(2023, 8, 2)).unwrap();
        let dates: Vec<_> = range.iter_days().collect();
        assert_eq!(
            dates,
            vec![
                date(2023, 7, 30),
                date(2023, 7, 31),
                date(2023, 8, 1),
                date(2023, 8, 2),
            ]
        );
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2023, 8, 1), date(2023, 8, 3)).unwrap();
        assert_eq!(format!("{range}"), "2023-08-01..2023-08-03");
    }

    #[test]
    fn test_serde_round_trip() {
        let range = DateRange::new(date(2023, 8, 1), date(2023, 8, 3)).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        let back: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }

    #[cfg(feature = "property-tests")]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = NaiveDate> {
            (0i64..3000).prop_map(|offset| {
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(offset as u64)
            })
        }

        fn range_strategy() -> impl Strategy<Value = DateRange> {
            (date_strategy(), 0i64..30).prop_map(|(start, span)| {
                DateRange::new(start, start + chrono::Days::new(span as u64)).unwrap()
            })
        }

        proptest! {
            // Overlap is symmetric: a.overlaps(b) == b.overlaps(a)
            #[test]
            fn prop_overlap_symmetric(a in range_strategy(), b in range_strategy()) {
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }
        }

        proptest! {
            // A range always overlaps itself
            #[test]
            fn prop_overlap_reflexive(a in range_strategy()) {
                prop_assert!(a.overlaps(&a));
            }
        }

        proptest! {
            // Two ranges overlap exactly when some date is in both
            #[test]
            fn prop_overlap_matches_contains(a in range_strategy(), b in range_strategy()) {
                let shared = a.iter_days().any(|d| b.contains(d));
                prop_assert_eq!(a.overlaps(&b), shared);
            }
        }

        proptest! {
            // iter_days yields exactly nights() dates, in strictly ascending order
            #[test]
            fn prop_iter_days_count_and_order(a in range_strategy()) {
                let dates: Vec<_> = a.iter_days().collect();
                prop_assert_eq!(dates.len() as i64, a.nights());
                prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
