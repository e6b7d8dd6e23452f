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

//! # Lane Assignment
//!
//! Greedy first-fit partitioning of the stays active on one (room, day)
//! into display lanes such that no two stays in a lane conflict.
//!
//! This is interval-graph coloring. Greedy first-fit does not reach the
//! chromatic number for arbitrary conflict graphs, but the per-day
//! conflict relation here is an interval graph, and for interval graphs
//! greedy in start order is exact: the lane count equals the maximum
//! number of stays simultaneously active at any instant of the day.

use crate::overlap::conflicts_on;
use chrono::NaiveDate;
use room_grid_model::stay::StaySpan;

/// Partitions `stays` into the minimum number of conflict-free lanes on
/// `day`.
///
/// Stays are processed in their given order; callers supply them sorted
/// by arrival (ties in original record order), which both makes lane
/// numbers reproducible across calls and puts windows in start order so
/// the greedy pass is minimal. Each stay lands in the lowest-index lane
/// where it conflicts with nothing already placed, or opens a new lane.
///
/// Lane 0 is rendered topmost.
pub fn assign_lanes<S: StaySpan + Clone>(stays: &[S], day: NaiveDate) -> Vec<Vec<S>> {
    let mut lanes: Vec<Vec<S>> = Vec::new();
    'placement: for stay in stays {
        for lane in lanes.iter_mut() {
            if lane.iter().all(|placed| !conflicts_on(placed, stay, day)) {
                lane.push(stay.clone());
                continue 'placement;
            }
        }
        lanes.push(vec![stay.clone()]);
    }
    lanes
}
