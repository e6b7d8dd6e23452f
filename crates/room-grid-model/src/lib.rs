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

//! # Room Grid Model (`room-grid-model`)
//!
//! Domain model for the room-occupancy scheduling engine. It builds on
//! the civil-calendar primitives of `room-grid-core` to describe hotel
//! stays the way the booking calendar consumes them.
//!
//! ## Key Data Structures
//!
//! - **`StayId` / `RoomId`**: Opaque identifiers. `StayId` doubles as the
//!   continuation key for stay chains: records that represent one
//!   continuous occupancy split across several rows share it.
//!
//! - **`Stay`**: One room-occupancy record, check-in to check-out. An
//!   immutable value; the engine never mutates or retains it.
//!
//! - **`MergedStay`**: The aggregate of an unbroken chain of contiguous
//!   stay records: union interval, summed night count, and the list of
//!   source record ids.
//!
//! - **`StaySpan`**: The trait carrying per-day stay time semantics —
//!   which days a stay is active on, and which slice of a given day it
//!   occupies. Both `Stay` and `MergedStay` implement it, so the
//!   conflict detector and lane assigner work over either.
//!
//! - **`StayGenerator`**: A seeded random week-instance generator used by
//!   the demo binary and randomized tests.
//!
//! All entities are plain values. Cloning a `Stay` is cheap enough for
//! grid building, and nothing here holds interior mutability, so every
//! operation downstream stays a pure function of its inputs.

pub mod err;
pub mod generator;
pub mod id;
pub mod stay;

pub mod prelude {
    //! Flat re-export of the names almost every consumer needs.

    pub use crate::err::InvalidStayError;
    pub use crate::generator::{StayGenerator, WeekGenConfig, WeekGenConfigBuilder};
    pub use crate::id::{RoomId, StayId};
    pub use crate::stay::{MergedStay, OccupantKey, Stay, StayKind, StaySpan, StayStatus};
}
