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

//! # Per-Day Conflict Detection
//!
//! Two stays conflict on a day when their occupied windows intersect;
//! conflicting stays cannot share a display lane. Windows are half-open,
//! so an exact boundary touch — checkout at 11:00, next check-in at
//! 11:00 — is back-to-back use of the room, not a conflict.

use chrono::NaiveDate;
use room_grid_model::stay::StaySpan;

/// Decides whether two stays conflict on `day`.
///
/// Both stays must be active on `day` (see [`StaySpan::active_on`]);
/// windows of inactive stays are meaningless.
///
/// If either window cannot be determined because a required time-of-day
/// is missing, the stays are reported as conflicting. Splitting them
/// onto separate lanes unnecessarily is a harmless display artifact; a
/// false "no conflict" would draw two bookings on top of each other.
pub fn conflicts_on<S: StaySpan>(a: &S, b: &S, day: NaiveDate) -> bool {
    let (Some(window_a), Some(window_b)) = (a.window_on(day), b.window_on(day)) else {
        return true;
    };
    window_a.intersects(&window_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_grid_core::time::{CivilDateTime, DayMinute};
    use room_grid_model::id::{RoomId, StayId};
    use room_grid_model::stay::{OccupantKey, Stay, StayKind, StayStatus};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn at(d: u32, hour: u16, minute: u16) -> CivilDateTime {
        CivilDateTime::new(date(d), DayMinute::from_hm(hour, minute))
    }

    fn pass_through(id: u64, d: u32, from: (u16, u16), to: (u16, u16)) -> Stay {
        Stay::new(
            StayId::new(id),
            RoomId::new(1),
            at(d, from.0, from.1),
            at(d, to.0, to.1),
            StayKind::PassThrough,
            StayStatus::Confirmed,
            0,
            OccupantKey::new("guest", "guest@example.com"),
        )
    }

    fn overnight(id: u64, arrival: CivilDateTime, departure: CivilDateTime) -> Stay {
        Stay::new(
            StayId::new(id),
            RoomId::new(1),
            arrival,
            departure,
            StayKind::Overnight,
            StayStatus::Confirmed,
            1,
            OccupantKey::new("guest", "guest@example.com"),
        )
    }

    #[test]
    fn test_back_to_back_pass_throughs_do_not_conflict() {
        let a = pass_through(1, 1, (9, 0), (10, 30));
        let b = pass_through(2, 1, (10, 30), (12, 0));
        assert!(!conflicts_on(&a, &b, date(1)));
        assert!(!conflicts_on(&b, &a, date(1)));
    }

    #[test]
    fn test_overlapping_pass_throughs_conflict() {
        let a = pass_through(1, 1, (9, 0), (11, 0));
        let b = pass_through(2, 1, (10, 0), (12, 0));
        assert!(conflicts_on(&a, &b, date(1)));
    }

    #[test]
    fn test_full_day_overlap_of_two_overnights() {
        // A spans day 1..4, B spans day 2..3; on day 2, A holds the full
        // day and B holds arrival-to-end-of-day.
        let a = overnight(1, at(1, 14, 0), at(4, 11, 0));
        let b = overnight(2, at(2, 15, 0), at(3, 10, 0));
        assert!(conflicts_on(&a, &b, date(2)));
    }

    #[test]
    fn test_checkout_and_checkin_same_minute_do_not_conflict() {
        // A departs day 2 at 11:00, B arrives day 2 at 11:00. On day 2
        // A's window is [00:00, 11:00) and B's is [11:00, 24:00).
        let a = overnight(1, at(1, 14, 0), at(2, 11, 0));
        let b = overnight(2, at(2, 11, 0), at(3, 10, 0));
        assert!(!conflicts_on(&a, &b, date(2)));
    }

    #[test]
    fn test_missing_time_is_conservatively_a_conflict() {
        let known = pass_through(1, 1, (9, 0), (10, 0));
        let unknown = Stay::new(
            StayId::new(2),
            RoomId::new(1),
            CivilDateTime::date_only(date(1)),
            at(1, 18, 0),
            StayKind::PassThrough,
            StayStatus::Confirmed,
            0,
            OccupantKey::new("guest", "guest@example.com"),
        );
        // The two windows would be disjoint if the time were known;
        // without it the engine refuses to claim they are.
        assert!(conflicts_on(&known, &unknown, date(1)));
        assert!(conflicts_on(&unknown, &known, date(1)));
    }

    #[test]
    fn test_missing_time_is_harmless_on_full_middle_days() {
        // A's arrival time is unknown, but on a full middle day its
        // window is the whole day regardless, so detection still works
        // without falling back to the conservative default.
        let a = overnight(1, CivilDateTime::date_only(date(1)), at(4, 11, 0));
        let b = overnight(2, at(2, 15, 0), at(3, 10, 0));
        assert!(conflicts_on(&a, &b, date(2)));
        assert!(conflicts_on(&b, &a, date(2)));
    }
}
