// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Civil Time Types
//!
//! Calendar time for a single local civil calendar, built on
//! `chrono::NaiveDate`.
//!
//! ## Key Concepts
//!
//! - `DayMinute`: A minute of day in `0..=1440`. The upper bound `1440`
//!   is the exclusive end-of-day instant `24:00`, which `NaiveTime`
//!   cannot represent but full-day occupancy windows require.
//! - `DayWindow`: The half-open slice `[start, end)` of one calendar day
//!   that a stay occupies.
//! - `CivilDateTime`: A date plus an optional minute of day. A `None`
//!   minute means the source record carried no usable time-of-day; the
//!   scheduling engine treats such records conservatively rather than
//!   inventing a default instant.
//! - `DayRange`: Iterator over consecutive calendar days.

use crate::primitives::Interval;
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt::Display;
use std::iter::FusedIterator;

/// Number of minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A minute of day in `0..=1440`.
///
/// `DayMinute::DAY_END` (`24:00`) is a valid value so that a full-day
/// occupancy window can be written as `[MIDNIGHT, DAY_END)`.
///
/// # Examples
///
/// ```
/// use room_grid_core::time::DayMinute;
///
/// let checkout = DayMinute::from_hm(11, 0);
/// assert_eq!(checkout.value(), 660);
/// assert_eq!(checkout.to_string(), "11:00");
/// assert!(checkout < DayMinute::DAY_END);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayMinute(u16);

impl DayMinute {
    /// Start of day, `00:00`.
    pub const MIDNIGHT: DayMinute = DayMinute(0);

    /// Exclusive end of day, `24:00`.
    pub const DAY_END: DayMinute = DayMinute(MINUTES_PER_DAY);

    /// Creates a minute of day, saturating at `24:00`.
    #[inline]
    pub const fn new(minutes: u16) -> Self {
        if minutes > MINUTES_PER_DAY {
            DayMinute(MINUTES_PER_DAY)
        } else {
            DayMinute(minutes)
        }
    }

    /// Creates a minute of day from an hour/minute pair, saturating at
    /// `24:00`.
    ///
    /// # Examples
    ///
    /// ```
    /// use room_grid_core::time::DayMinute;
    ///
    /// assert_eq!(DayMinute::from_hm(14, 30).value(), 870);
    /// assert_eq!(DayMinute::from_hm(24, 0), DayMinute::DAY_END);
    /// ```
    #[inline]
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        Self::new(hour * 60 + minute)
    }

    /// Returns the raw minute count since midnight.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the hour component (`0..=24`).
    #[inline]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute-of-hour component (`0..=59`).
    #[inline]
    pub const fn minute_of_hour(self) -> u16 {
        self.0 % 60
    }
}

impl Display for DayMinute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute_of_hour())
    }
}

impl From<NaiveTime> for DayMinute {
    fn from(time: NaiveTime) -> Self {
        DayMinute::new((time.hour() * 60 + time.minute()) as u16)
    }
}

/// The half-open slice of one calendar day a stay occupies.
pub type DayWindow = Interval<DayMinute>;

/// Returns the window covering an entire day, `[00:00, 24:00)`.
#[inline]
pub fn full_day_window() -> DayWindow {
    DayWindow::new(DayMinute::MIDNIGHT, DayMinute::DAY_END)
}

/// A calendar date plus an optional minute of day.
///
/// The minute is optional because source records sometimes arrive with
/// no usable time-of-day. Ordering is total: by date first, then by
/// minute, with a missing minute ordering before any known minute of the
/// same date. Equality is exact, so a missing minute only equals a
/// missing minute.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use room_grid_core::time::{CivilDateTime, DayMinute};
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let arrival = CivilDateTime::new(date, DayMinute::from_hm(14, 0));
/// let unknown = CivilDateTime::date_only(date);
/// assert!(unknown < arrival);
/// assert!(arrival.has_time());
/// assert!(!unknown.has_time());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    date: NaiveDate,
    minute: Option<DayMinute>,
}

impl CivilDateTime {
    /// Creates a date-time with a known minute of day.
    #[inline]
    pub const fn new(date: NaiveDate, minute: DayMinute) -> Self {
        Self {
            date,
            minute: Some(minute),
        }
    }

    /// Creates a date-time whose time-of-day is unknown.
    #[inline]
    pub const fn date_only(date: NaiveDate) -> Self {
        Self { date, minute: None }
    }

    /// Returns the calendar date.
    #[inline]
    pub const fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns the minute of day, if known.
    #[inline]
    pub const fn minute(self) -> Option<DayMinute> {
        self.minute
    }

    /// Returns `true` if the time-of-day is known.
    #[inline]
    pub const fn has_time(self) -> bool {
        self.minute.is_some()
    }

    /// Returns `true` if `self` is *provably* after `other`.
    ///
    /// A later date is provably after; on the same date the relation can
    /// only be proven when both minutes are known. Used for
    /// malformed-interval detection, where a record is rejected only
    /// when its bounds are demonstrably reversed.
    pub fn definitely_after(&self, other: &CivilDateTime) -> bool {
        match self.date.cmp(&other.date) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match (self.minute, other.minute) {
                (Some(a), Some(b)) => a > b,
                _ => false,
            },
        }
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.minute {
            Some(minute) => write!(f, "{} {}", self.date, minute),
            None => write!(f, "{} --:--", self.date),
        }
    }
}

/// An iterator over consecutive calendar days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use room_grid_core::time::DayRange;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap();
/// let week: Vec<_> = DayRange::new(monday, 7).collect();
/// assert_eq!(week.len(), 7);
/// assert_eq!(week[0], monday);
/// assert_eq!(week[6], NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<NaiveDate>,
    remaining: usize,
}

impl DayRange {
    /// Creates a range of `days` consecutive days starting at `start`.
    #[inline]
    pub fn new(start: NaiveDate, days: usize) -> Self {
        Self {
            next: Some(start),
            remaining: days,
        }
    }
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.next?;
        self.remaining -= 1;
        self.next = day.succ_opt();
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for DayRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_minute_saturates_at_day_end() {
        assert_eq!(DayMinute::new(5000), DayMinute::DAY_END);
        assert_eq!(DayMinute::from_hm(25, 30), DayMinute::DAY_END);
    }

    #[test]
    fn test_day_minute_display() {
        assert_eq!(DayMinute::from_hm(9, 5).to_string(), "09:05");
        assert_eq!(DayMinute::DAY_END.to_string(), "24:00");
        assert_eq!(DayMinute::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_day_minute_from_naive_time() {
        let time = NaiveTime::from_hms_opt(11, 30, 59).unwrap();
        // Seconds truncate at minute resolution.
        assert_eq!(DayMinute::from(time), DayMinute::from_hm(11, 30));
    }

    #[test]
    fn test_civil_ordering_missing_minute_first() {
        let d = date(2024, 5, 1);
        let unknown = CivilDateTime::date_only(d);
        let midnight = CivilDateTime::new(d, DayMinute::MIDNIGHT);
        let later_date = CivilDateTime::date_only(date(2024, 5, 2));
        assert!(unknown < midnight);
        assert!(midnight < later_date);
    }

    #[test]
    fn test_definitely_after_needs_proof() {
        let d = date(2024, 5, 1);
        let noon = CivilDateTime::new(d, DayMinute::from_hm(12, 0));
        let nine = CivilDateTime::new(d, DayMinute::from_hm(9, 0));
        let unknown = CivilDateTime::date_only(d);
        let next_day = CivilDateTime::date_only(date(2024, 5, 2));

        assert!(noon.definitely_after(&nine));
        assert!(!nine.definitely_after(&noon));
        // Same date with a missing minute cannot be proven reversed.
        assert!(!unknown.definitely_after(&noon));
        assert!(!noon.definitely_after(&unknown));
        assert!(next_day.definitely_after(&noon));
    }

    #[test]
    fn test_day_range_crosses_month_boundary() {
        let days: Vec<_> = DayRange::new(date(2024, 4, 29), 4).collect();
        assert_eq!(
            days,
            vec![
                date(2024, 4, 29),
                date(2024, 4, 30),
                date(2024, 5, 1),
                date(2024, 5, 2),
            ]
        );
    }

    #[test]
    fn test_day_range_empty() {
        assert_eq!(DayRange::new(date(2024, 1, 1), 0).count(), 0);
    }

    #[test]
    fn test_full_day_window_bounds() {
        let window = full_day_window();
        assert_eq!(window.start(), DayMinute::MIDNIGHT);
        assert_eq!(window.end(), DayMinute::DAY_END);
        assert!(!window.is_empty());
    }
}
