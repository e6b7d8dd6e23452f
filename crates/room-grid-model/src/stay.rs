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

//! # Stays and Merged Occupancies
//!
//! The record types the booking calendar is built from, plus the
//! `StaySpan` trait that pins down the two pieces of per-day time
//! semantics everything downstream depends on:
//!
//! - **Activity** (`StaySpan::active_on`): which displayed days a stay
//!   occupies a row on. An overnight stay is active from its arrival day
//!   up to but excluding its departure day — standard hotel semantics,
//!   the room counts as free on checkout day. A pass-through stay is
//!   active only on its single day.
//! - **Occupied window** (`StaySpan::window_on`): which slice of a given
//!   day the room is held. Full middle days of a multi-night stay are
//!   the entire day regardless of time-of-day; arrival and departure
//!   days are bounded by the recorded times. When a bound that matters
//!   is missing the window is undeterminable (`None`), and the conflict
//!   detector treats that conservatively.

use crate::err::InvalidStayError;
use crate::id::{RoomId, StayId};
use chrono::NaiveDate;
use room_grid_core::time::{CivilDateTime, DayMinute, DayWindow, full_day_window};
use std::fmt::Display;

/// Whether a stay spans at least one night or is same-day use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StayKind {
    /// Spans at least one night.
    Overnight,
    /// Arrival and departure fall on the same calendar day.
    PassThrough,
}

impl Display for StayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StayKind::Overnight => write!(f, "Overnight"),
            StayKind::PassThrough => write!(f, "PassThrough"),
        }
    }
}

/// Lifecycle status of a stay record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StayStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Draft,
    Cancelled,
    Reserved,
}

impl StayStatus {
    /// Cancelled stays never appear in the grid.
    #[inline]
    pub const fn is_cancelled(self) -> bool {
        matches!(self, StayStatus::Cancelled)
    }
}

impl Display for StayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StayStatus::Confirmed => "Confirmed",
            StayStatus::CheckedIn => "CheckedIn",
            StayStatus::CheckedOut => "CheckedOut",
            StayStatus::Draft => "Draft",
            StayStatus::Cancelled => "Cancelled",
            StayStatus::Reserved => "Reserved",
        };
        write!(f, "{name}")
    }
}

/// Guest identity fields used for merge-chain matching.
///
/// Two records only fuse into one occupancy when their occupant keys are
/// equal; unrelated back-to-back bookings must never merge even when
/// their intervals touch exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccupantKey {
    name: String,
    contact: String,
}

impl OccupantKey {
    #[inline]
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl Display for OccupantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.contact)
    }
}

/// Per-day stay time semantics, shared by raw and merged stays.
///
/// The conflict detector and lane assigner only ever look at a stay
/// through this trait, so they work identically over `Stay` and
/// `MergedStay`.
pub trait StaySpan {
    fn arrival(&self) -> CivilDateTime;
    fn departure(&self) -> CivilDateTime;
    fn kind(&self) -> StayKind;

    /// Returns `true` if the stay occupies a row on `day`.
    ///
    /// Pass-through stays are active only on their arrival day.
    /// Overnight stays are active on `arrival_day <= day < departure_day`
    /// — the checkout day itself is not occupied.
    fn active_on(&self, day: NaiveDate) -> bool {
        if day < self.arrival().date() {
            return false;
        }
        match self.kind() {
            StayKind::PassThrough => day == self.arrival().date(),
            StayKind::Overnight => day < self.departure().date(),
        }
    }

    /// Returns the slice of `day` the stay holds the room for, or `None`
    /// when a required time-of-day is missing and the window cannot be
    /// determined.
    ///
    /// Full days strictly between arrival and departure never need a
    /// time-of-day; they are always the entire day.
    fn window_on(&self, day: NaiveDate) -> Option<DayWindow> {
        let arrival = self.arrival();
        let departure = self.departure();
        match self.kind() {
            StayKind::PassThrough => Some(DayWindow::new(arrival.minute()?, departure.minute()?)),
            StayKind::Overnight => {
                if day == arrival.date() {
                    Some(DayWindow::new(arrival.minute()?, DayMinute::DAY_END))
                } else if day == departure.date() {
                    Some(DayWindow::new(DayMinute::MIDNIGHT, departure.minute()?))
                } else {
                    Some(full_day_window())
                }
            }
        }
    }
}

/// One room-occupancy record, check-in to check-out.
///
/// Immutable value; constructed once from the upstream data source and
/// only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    id: StayId,
    room: RoomId,
    arrival: CivilDateTime,
    departure: CivilDateTime,
    kind: StayKind,
    status: StayStatus,
    nights: u32,
    occupant: OccupantKey,
}

impl Stay {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: StayId,
        room: RoomId,
        arrival: CivilDateTime,
        departure: CivilDateTime,
        kind: StayKind,
        status: StayStatus,
        nights: u32,
        occupant: OccupantKey,
    ) -> Self {
        Self {
            id,
            room,
            arrival,
            departure,
            kind,
            status,
            nights,
            occupant,
        }
    }

    #[inline]
    pub fn id(&self) -> StayId {
        self.id
    }

    #[inline]
    pub fn room(&self) -> RoomId {
        self.room
    }

    #[inline]
    pub fn status(&self) -> StayStatus {
        self.status
    }

    /// Number of nights billed; 0 for pass-through stays.
    #[inline]
    pub fn nights(&self) -> u32 {
        self.nights
    }

    #[inline]
    pub fn occupant(&self) -> &OccupantKey {
        &self.occupant
    }

    /// Checks the `arrival <= departure` invariant.
    ///
    /// A record is only rejected when its bounds are provably reversed;
    /// a missing time-of-day on the same date cannot prove anything and
    /// passes.
    pub fn validate(&self) -> Result<(), InvalidStayError> {
        if self.arrival.definitely_after(&self.departure) {
            return Err(InvalidStayError::new(self.id, self.arrival, self.departure));
        }
        Ok(())
    }
}

impl StaySpan for Stay {
    #[inline]
    fn arrival(&self) -> CivilDateTime {
        self.arrival
    }

    #[inline]
    fn departure(&self) -> CivilDateTime {
        self.departure
    }

    #[inline]
    fn kind(&self) -> StayKind {
        self.kind
    }
}

impl Display for Stay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stay {{ id: {}, room: {}, {} -> {}, {}, {}, nights: {} }}",
            self.id, self.room, self.arrival, self.departure, self.kind, self.status, self.nights
        )
    }
}

/// The aggregate of an unbroken chain of contiguous stay records.
///
/// Carries the union interval `[earliest arrival, latest departure]`,
/// the summed night count, and the ids of the source records in chain
/// order. A single record yields a chain of length one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedStay {
    id: StayId,
    sources: Vec<StayId>,
    room: RoomId,
    occupant: OccupantKey,
    status: StayStatus,
    arrival: CivilDateTime,
    departure: CivilDateTime,
    nights: u32,
}

impl MergedStay {
    /// Starts a chain from a single record.
    pub fn from_stay(stay: &Stay) -> Self {
        Self {
            id: stay.id(),
            sources: vec![stay.id()],
            room: stay.room(),
            occupant: stay.occupant().clone(),
            status: stay.status(),
            arrival: stay.arrival(),
            departure: stay.departure(),
            nights: stay.nights(),
        }
    }

    /// Returns `true` if `next` continues this chain.
    ///
    /// Requires the same grouping id, the same room, the same occupant
    /// key, the same status, and `next` starting at the exact instant
    /// this chain ends.
    /// Any gap, however small, breaks the chain; equality on the instant
    /// is exact, so a missing time-of-day only matches a missing one.
    pub fn can_absorb(&self, next: &Stay) -> bool {
        self.id == next.id()
            && self.room == next.room()
            && self.occupant == *next.occupant()
            && self.status == next.status()
            && self.departure == next.arrival()
    }

    /// Absorbs `next` into the chain if it continues it.
    ///
    /// On success extends the union interval, adds the night count, and
    /// appends the source id; returns `false` untouched otherwise.
    pub fn try_absorb(&mut self, next: &Stay) -> bool {
        if !self.can_absorb(next) {
            return false;
        }
        self.departure = next.departure();
        self.nights += next.nights();
        self.sources.push(next.id());
        true
    }

    /// The grouping id shared by every record in the chain.
    #[inline]
    pub fn id(&self) -> StayId {
        self.id
    }

    /// Source record ids in chain order.
    #[inline]
    pub fn sources(&self) -> &[StayId] {
        &self.sources
    }

    #[inline]
    pub fn room(&self) -> RoomId {
        self.room
    }

    #[inline]
    pub fn occupant(&self) -> &OccupantKey {
        &self.occupant
    }

    #[inline]
    pub fn status(&self) -> StayStatus {
        self.status
    }

    /// Total nights billed across the chain.
    #[inline]
    pub fn nights(&self) -> u32 {
        self.nights
    }
}

impl StaySpan for MergedStay {
    #[inline]
    fn arrival(&self) -> CivilDateTime {
        self.arrival
    }

    #[inline]
    fn departure(&self) -> CivilDateTime {
        self.departure
    }

    /// Derived from the union interval: a chain that ends on a later
    /// calendar day than it starts behaves as the overnight occupancy it
    /// physically is, even if its pieces were pass-throughs.
    #[inline]
    fn kind(&self) -> StayKind {
        if self.arrival.date() == self.departure.date() {
            StayKind::PassThrough
        } else {
            StayKind::Overnight
        }
    }
}

impl Display for MergedStay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MergedStay {{ id: {}, room: {}, {} -> {}, chain: {}, nights: {} }}",
            self.id,
            self.room,
            self.arrival,
            self.departure,
            self.sources.len(),
            self.nights
        )
    }
}
