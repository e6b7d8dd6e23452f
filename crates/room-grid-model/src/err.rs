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

use crate::id::StayId;
use room_grid_core::time::CivilDateTime;
use std::fmt::Display;

/// A stay whose interval is provably reversed: its arrival is after its
/// departure.
///
/// The grid builder excludes such records individually and reports their
/// ids instead of aborting the whole computation; a broken upstream row
/// must not take down the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidStayError {
    id: StayId,
    arrival: CivilDateTime,
    departure: CivilDateTime,
}

impl InvalidStayError {
    #[inline]
    pub fn new(id: StayId, arrival: CivilDateTime, departure: CivilDateTime) -> Self {
        Self {
            id,
            arrival,
            departure,
        }
    }

    #[inline]
    pub fn id(&self) -> StayId {
        self.id
    }

    #[inline]
    pub fn arrival(&self) -> CivilDateTime {
        self.arrival
    }

    #[inline]
    pub fn departure(&self) -> CivilDateTime {
        self.departure
    }
}

impl Display for InvalidStayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stay {} has arrival after departure: {} > {}",
            self.id, self.arrival, self.departure
        )
    }
}

impl std::error::Error for InvalidStayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use room_grid_core::time::DayMinute;

    #[test]
    fn test_display_names_the_offending_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let err = InvalidStayError::new(
            StayId::new(9),
            CivilDateTime::new(date, DayMinute::from_hm(12, 0)),
            CivilDateTime::new(date, DayMinute::from_hm(9, 30)),
        );
        assert_eq!(
            err.to_string(),
            "Stay StayId(9) has arrival after departure: 2024-05-02 12:00 > 2024-05-02 09:30"
        );
        assert_eq!(err.id(), StayId::new(9));
    }
}
