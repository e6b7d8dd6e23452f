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

//! # Stay Chain Merging
//!
//! Collapses chains of exactly-contiguous stay records into single
//! logical occupancies. A guest relocated into a contiguous successor
//! record (same grouping id, same occupant, same status, zero gap) is
//! one physical occupancy and must render as one bar, not two.

use room_grid_model::stay::{MergedStay, Stay, StaySpan};

/// Merges chains of contiguous stay records into [`MergedStay`]s.
///
/// Stays are ordered by arrival (stable, so equal arrivals keep their
/// input order) and walked once with an accumulator. A record is
/// absorbed into the running chain iff it continues it exactly (see
/// [`MergedStay::can_absorb`]); otherwise the chain is emitted and the
/// record starts a new one.
///
/// The output is ordered by arrival, which is exactly the order the lane
/// assigner requires. Merging is not transitive across gaps: any gap,
/// however small, breaks a chain.
///
/// Callers must pass stays of a single room; the grid builder merges per
/// room. A chain never crosses rooms either way, since the adjacency
/// predicate refuses a room mismatch.
pub fn merge_stays(stays: &[Stay]) -> Vec<MergedStay> {
    let mut ordered: Vec<&Stay> = stays.iter().collect();
    ordered.sort_by_key(|stay| stay.arrival());

    let mut merged = Vec::new();
    let mut iter = ordered.into_iter();
    let Some(first) = iter.next() else {
        return merged;
    };

    let mut current = MergedStay::from_stay(first);
    for next in iter {
        if !current.try_absorb(next) {
            merged.push(std::mem::replace(&mut current, MergedStay::from_stay(next)));
        }
    }
    merged.push(current);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use room_grid_core::time::{CivilDateTime, DayMinute};
    use room_grid_model::id::{RoomId, StayId};
    use room_grid_model::stay::{OccupantKey, StayKind, StayStatus};

    fn at(d: u32, hour: u16, minute: u16) -> CivilDateTime {
        CivilDateTime::new(
            NaiveDate::from_ymd_opt(2024, 5, d).unwrap(),
            DayMinute::from_hm(hour, minute),
        )
    }

    fn stay(id: u64, arrival: CivilDateTime, departure: CivilDateTime, nights: u32) -> Stay {
        Stay::new(
            StayId::new(id),
            RoomId::new(1),
            arrival,
            departure,
            if arrival.date() == departure.date() {
                StayKind::PassThrough
            } else {
                StayKind::Overnight
            },
            StayStatus::Confirmed,
            nights,
            OccupantKey::new("smith", "smith@example.com"),
        )
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(merge_stays(&[]).is_empty());
    }

    #[test]
    fn test_single_stay_yields_single_chain() {
        let merged = merge_stays(&[stay(1, at(1, 14, 0), at(3, 11, 0), 2)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].sources(), &[StayId::new(1)]);
        assert_eq!(merged[0].nights(), 2);
    }

    #[test]
    fn test_three_record_chain_fuses_into_one() {
        // First record arrives with an unknown time; the chain still
        // fuses because the shared boundaries are exact.
        let first = Stay::new(
            StayId::new(5),
            RoomId::new(1),
            CivilDateTime::date_only(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            at(1, 12, 0),
            StayKind::PassThrough,
            StayStatus::Confirmed,
            0,
            OccupantKey::new("smith", "smith@example.com"),
        );
        let second = stay(5, at(1, 12, 0), at(2, 12, 0), 1);
        let third = stay(5, at(2, 12, 0), at(3, 10, 0), 1);

        let merged = merge_stays(&[third.clone(), first.clone(), second.clone()]);
        assert_eq!(merged.len(), 1);
        let chain = &merged[0];
        assert_eq!(chain.sources().len(), 3);
        assert_eq!(chain.arrival(), first.arrival());
        assert_eq!(chain.departure(), at(3, 10, 0));
        assert_eq!(chain.nights(), 2);
    }

    #[test]
    fn test_gap_breaks_chain() {
        let a = stay(2, at(1, 14, 0), at(2, 12, 0), 1);
        let b = stay(2, at(2, 12, 1), at(3, 12, 0), 1);
        let merged = merge_stays(&[a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_adjacent_but_different_occupant_stays_apart() {
        let a = stay(3, at(1, 14, 0), at(2, 12, 0), 1);
        let mut b = stay(3, at(2, 12, 0), at(3, 12, 0), 1);
        b = Stay::new(
            b.id(),
            b.room(),
            b.arrival(),
            b.departure(),
            StayKind::Overnight,
            b.status(),
            b.nights(),
            OccupantKey::new("jones", "jones@example.com"),
        );
        let merged = merge_stays(&[a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let records = vec![
            stay(1, at(1, 12, 0), at(2, 12, 0), 1),
            stay(1, at(2, 12, 0), at(3, 10, 0), 1),
            stay(9, at(2, 15, 0), at(4, 11, 0), 2),
        ];
        let once = merge_stays(&records);

        // Re-express the merged results as stays and merge again; the
        // second pass must be a no-op on intervals and night counts.
        let as_stays: Vec<Stay> = once
            .iter()
            .map(|m| {
                Stay::new(
                    m.id(),
                    m.room(),
                    m.arrival(),
                    m.departure(),
                    m.kind(),
                    m.status(),
                    m.nights(),
                    m.occupant().clone(),
                )
            })
            .collect();
        let twice = merge_stays(&as_stays);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.arrival(), b.arrival());
            assert_eq!(a.departure(), b.departure());
            assert_eq!(a.nights(), b.nights());
        }
    }

    #[test]
    fn test_chain_tiles_the_union_interval() {
        let records = vec![
            stay(4, at(1, 12, 0), at(2, 12, 0), 1),
            stay(4, at(2, 12, 0), at(3, 12, 0), 1),
            stay(4, at(3, 12, 0), at(4, 10, 0), 1),
        ];
        let merged = merge_stays(&records);
        assert_eq!(merged.len(), 1);
        let chain = &merged[0];

        // Sorted by arrival, the source intervals tile the union exactly.
        let mut sorted = records.clone();
        sorted.sort_by_key(|s| s.arrival());
        assert_eq!(sorted.first().unwrap().arrival(), chain.arrival());
        assert_eq!(sorted.last().unwrap().departure(), chain.departure());
        for pair in sorted.windows(2) {
            assert_eq!(pair[0].departure(), pair[1].arrival());
        }
    }

    #[test]
    fn test_output_ordered_by_arrival() {
        let records = vec![
            stay(8, at(3, 9, 0), at(4, 11, 0), 1),
            stay(6, at(1, 9, 0), at(2, 11, 0), 1),
            stay(7, at(2, 9, 0), at(3, 11, 0), 1),
        ];
        let merged = merge_stays(&records);
        let arrivals: Vec<_> = merged.iter().map(|m| m.arrival()).collect();
        let mut sorted = arrivals.clone();
        sorted.sort();
        assert_eq!(arrivals, sorted);
    }
}
