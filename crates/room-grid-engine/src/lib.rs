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

//! # Room Grid Engine (`room-grid-engine`)
//!
//! The room-occupancy scheduling engine behind the weekly booking
//! calendar. Data flows one way:
//!
//! ```text
//! raw stays -> merge -> merged stays -> per (room, day) slicing
//!           -> lane assignment -> occupancy grid
//! ```
//!
//! - [`merge`]: collapses chains of exactly-contiguous stay records that
//!   represent one continuous occupancy into single logical entries.
//! - [`overlap`]: decides whether two stays conflict on a given day,
//!   i.e. whether their occupied windows intersect and they must be
//!   displayed on separate lanes.
//! - [`lanes`]: greedily partitions the stays active on one (room, day)
//!   into the minimum number of mutually conflict-free lanes.
//! - [`grid`]: orchestrates the above over a room list and a day range
//!   into the final occupancy grid.
//!
//! Every operation is a pure, synchronous function of its arguments;
//! there is no shared state anywhere, so callers may freely shard work
//! (e.g. by room) across threads and concatenate the results.

pub mod grid;
pub mod lanes;
pub mod merge;
pub mod overlap;

pub use grid::{OccupancyGrid, build_grid};
pub use lanes::assign_lanes;
pub use merge::merge_stays;
pub use overlap::conflicts_on;
