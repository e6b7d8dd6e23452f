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

//! # Room Grid Core Primitives (`room-grid-core`)
//!
//! Foundational data types for the room-occupancy scheduling engine.
//! Everything here is calendar plumbing with no hotel semantics attached:
//!
//! - **Intervals**:
//!   - `Interval<T>`: A generic half-open interval `[start, end)` with
//!     containment and intersection queries.
//!
//! - **Civil time**:
//!   - `DayMinute`: A minute-of-day in `0..=1440`. Unlike
//!     `chrono::NaiveTime` it can express the exclusive end-of-day bound
//!     `24:00`, which full-day occupancy windows need.
//!   - `DayWindow`: The slice of one calendar day a stay occupies,
//!     `Interval<DayMinute>`.
//!   - `CivilDateTime`: A calendar date plus an *optional* minute of day.
//!     Source systems sometimes deliver records whose time-of-day cannot
//!     be determined; the missing case is first-class here so downstream
//!     logic can handle it conservatively instead of guessing.
//!   - `DayRange`: An iterator over consecutive calendar days, typically
//!     the displayed week.
//!
//! All times live in a single local civil calendar. There is no timezone
//! handling anywhere in this workspace.

pub mod primitives;
pub mod time;
