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

//! # Occupancy Grid Building
//!
//! The orchestrating pass: raw stays in, a fully-laned calendar grid
//! out. The build is a pure function of its inputs and rebuilds every
//! cell from scratch on each call; callers own caching and invalidation.

use crate::lanes::assign_lanes;
use crate::merge::merge_stays;
use chrono::NaiveDate;
use room_grid_model::id::{RoomId, StayId};
use room_grid_model::stay::{MergedStay, Stay, StaySpan};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// The built calendar grid: ordered lanes of merged stays per
/// (room, day), plus the ids of stays rejected as malformed.
///
/// Only non-empty cells are stored; [`OccupancyGrid::lanes`] returns an
/// empty slice for any (room, day) without one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyGrid {
    cells: HashMap<(RoomId, NaiveDate), Vec<Vec<MergedStay>>>,
    skipped: Vec<StayId>,
}

impl OccupancyGrid {
    /// Returns the lanes of one cell; lane 0 is rendered topmost.
    #[inline]
    pub fn lanes(&self, room: RoomId, day: NaiveDate) -> &[Vec<MergedStay>] {
        self.cells
            .get(&(room, day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of lanes a cell needs.
    #[inline]
    pub fn lane_count(&self, room: RoomId, day: NaiveDate) -> usize {
        self.lanes(room, day).len()
    }

    /// Iterates over all non-empty cells in arbitrary order.
    pub fn cells(&self) -> impl Iterator<Item = (RoomId, NaiveDate, &[Vec<MergedStay>])> {
        self.cells
            .iter()
            .map(|((room, day), lanes)| (*room, *day, lanes.as_slice()))
    }

    /// Number of non-empty cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell holds any stay.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The widest cell of the grid, in lanes.
    pub fn max_lanes(&self) -> usize {
        self.cells.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Ids of stays excluded because their interval was provably
    /// reversed, in input order. Surfaces upstream data problems without
    /// taking down the view.
    #[inline]
    pub fn skipped(&self) -> &[StayId] {
        &self.skipped
    }
}

/// Builds the occupancy grid for `rooms` over `days` from raw `stays`.
///
/// Steps, in order:
///
/// 1. Cancelled stays are dropped entirely.
/// 2. Malformed stays (arrival provably after departure) are dropped
///    individually and their ids recorded in [`OccupancyGrid::skipped`].
/// 3. Stays referencing a room outside `rooms` are dropped silently —
///    the visible room set is routinely a subset.
/// 4. Per room, contiguous stay chains are merged ([`merge_stays`]).
/// 5. Per (room, day), the active merged stays are laned
///    ([`assign_lanes`]); activity follows [`StaySpan::active_on`], so
///    overnight stays do not occupy their checkout day.
///
/// Empty `rooms` or `days` yield an empty grid, never an error.
#[instrument(level = "debug", skip_all, fields(
    rooms = rooms.len(),
    days = days.len(),
    stays = stays.len(),
))]
pub fn build_grid(rooms: &[RoomId], days: &[NaiveDate], stays: &[Stay]) -> OccupancyGrid {
    let mut skipped = Vec::new();
    let room_set: HashSet<RoomId> = rooms.iter().copied().collect();
    let mut by_room: HashMap<RoomId, Vec<Stay>> = HashMap::new();

    for stay in stays {
        if stay.status().is_cancelled() {
            continue;
        }
        if let Err(err) = stay.validate() {
            debug!(%err, "skipping malformed stay");
            skipped.push(stay.id());
            continue;
        }
        if !room_set.contains(&stay.room()) {
            continue;
        }
        by_room.entry(stay.room()).or_default().push(stay.clone());
    }

    let mut cells = HashMap::new();
    for (room, room_stays) in by_room {
        let merged = merge_stays(&room_stays);
        for &day in days {
            // merge_stays returns arrival order, so the active subset is
            // already in the order the lane assigner requires.
            let active: Vec<MergedStay> = merged
                .iter()
                .filter(|stay| stay.active_on(day))
                .cloned()
                .collect();
            if active.is_empty() {
                continue;
            }
            cells.insert((room, day), assign_lanes(&active, day));
        }
    }

    OccupancyGrid { cells, skipped }
}
