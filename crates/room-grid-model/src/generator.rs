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

//! # Week Instance Generator
//!
//! Seeded random generation of realistic stay populations for the demo
//! binary and randomized tests. The same seed always produces the same
//! instance.
//!
//! Populations include the awkward shapes the engine must survive:
//! multi-night stays, same-day pass-throughs, cancelled records, records
//! with missing time-of-day, and occupancy chains split across
//! contiguous records that the merger is expected to fuse.

use crate::id::{RoomId, StayId};
use crate::stay::{OccupantKey, Stay, StayKind, StayStatus};
use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Normal};
use room_grid_core::time::{CivilDateTime, DayMinute};
use std::fmt::Display;

/// Configuration for one generated week instance.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGenConfig {
    seed: u64,
    rooms: u64,
    first_day: NaiveDate,
    days: u64,
    mean_stays_per_room: f64,
    pass_through_ratio: f64,
    chain_ratio: f64,
    cancelled_ratio: f64,
    missing_time_ratio: f64,
    max_nights: u64,
}

impl WeekGenConfig {
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn rooms(&self) -> u64 {
        self.rooms
    }

    #[inline]
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    #[inline]
    pub fn days(&self) -> u64 {
        self.days
    }
}

impl Default for WeekGenConfig {
    fn default() -> Self {
        WeekGenConfigBuilder::new().build()
    }
}

impl Display for WeekGenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WeekGenConfig {{ seed: {}, rooms: {}, first_day: {}, days: {}, \
             mean_stays_per_room: {:.2} }}",
            self.seed, self.rooms, self.first_day, self.days, self.mean_stays_per_room
        )
    }
}

/// Builder for [`WeekGenConfig`].
#[derive(Debug, Clone)]
pub struct WeekGenConfigBuilder {
    seed: u64,
    rooms: u64,
    first_day: NaiveDate,
    days: u64,
    mean_stays_per_room: f64,
    pass_through_ratio: f64,
    chain_ratio: f64,
    cancelled_ratio: f64,
    missing_time_ratio: f64,
    max_nights: u64,
}

impl WeekGenConfigBuilder {
    pub fn new() -> Self {
        Self {
            seed: 42,
            rooms: 10,
            first_day: NaiveDate::from_ymd_opt(2024, 4, 29).expect("valid default date"),
            days: 7,
            mean_stays_per_room: 2.5,
            pass_through_ratio: 0.2,
            chain_ratio: 0.15,
            cancelled_ratio: 0.1,
            missing_time_ratio: 0.05,
            max_nights: 5,
        }
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = value;
        self
    }

    pub fn rooms(mut self, value: u64) -> Self {
        self.rooms = value;
        self
    }

    pub fn first_day(mut self, value: NaiveDate) -> Self {
        self.first_day = value;
        self
    }

    pub fn days(mut self, value: u64) -> Self {
        self.days = value.max(1);
        self
    }

    pub fn mean_stays_per_room(mut self, value: f64) -> Self {
        self.mean_stays_per_room = value;
        self
    }

    pub fn pass_through_ratio(mut self, value: f64) -> Self {
        self.pass_through_ratio = value;
        self
    }

    pub fn chain_ratio(mut self, value: f64) -> Self {
        self.chain_ratio = value;
        self
    }

    pub fn cancelled_ratio(mut self, value: f64) -> Self {
        self.cancelled_ratio = value;
        self
    }

    pub fn missing_time_ratio(mut self, value: f64) -> Self {
        self.missing_time_ratio = value;
        self
    }

    pub fn max_nights(mut self, value: u64) -> Self {
        self.max_nights = value.max(1);
        self
    }

    pub fn build(self) -> WeekGenConfig {
        WeekGenConfig {
            seed: self.seed,
            rooms: self.rooms,
            first_day: self.first_day,
            days: self.days,
            mean_stays_per_room: self.mean_stays_per_room,
            pass_through_ratio: self.pass_through_ratio,
            chain_ratio: self.chain_ratio,
            cancelled_ratio: self.cancelled_ratio,
            missing_time_ratio: self.missing_time_ratio,
            max_nights: self.max_nights,
        }
    }
}

impl Default for WeekGenConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeded stay-population generator.
pub struct StayGenerator {
    config: WeekGenConfig,
    rng: SmallRng,
    next_id: u64,
    next_guest: u64,
}

impl StayGenerator {
    pub fn new(config: WeekGenConfig) -> Self {
        let seed = config.seed();
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            next_id: 1,
            next_guest: 1,
        }
    }

    #[inline]
    fn fresh_id(&mut self) -> StayId {
        let id = self.next_id;
        self.next_id += 1;
        StayId::new(id)
    }

    fn fresh_guest(&mut self) -> OccupantKey {
        let n = self.next_guest;
        self.next_guest += 1;
        OccupantKey::new(format!("guest-{n}"), format!("guest{n}@example.com"))
    }

    fn sample_status(&mut self) -> StayStatus {
        if self.rng.random_bool(self.config.cancelled_ratio) {
            return StayStatus::Cancelled;
        }
        match self.rng.random_range(0..5u8) {
            0 => StayStatus::Confirmed,
            1 => StayStatus::CheckedIn,
            2 => StayStatus::CheckedOut,
            3 => StayStatus::Reserved,
            _ => StayStatus::Draft,
        }
    }

    /// Samples a minute of day from a normal distribution centered at
    /// `mean_minutes`, clamped into `[0, 23:59]`.
    fn sample_minute(&mut self, mean_minutes: f64, sigma: f64) -> DayMinute {
        let normal = Normal::new(mean_minutes, sigma).expect("valid time distribution");
        let sampled = normal.sample(&mut self.rng).round();
        DayMinute::new(sampled.clamp(0.0, 1439.0) as u16)
    }

    fn maybe_missing(&mut self, stamp: CivilDateTime) -> CivilDateTime {
        if self.rng.random_bool(self.config.missing_time_ratio) {
            CivilDateTime::date_only(stamp.date())
        } else {
            stamp
        }
    }

    /// Generates the full stay population for every room of the
    /// configured window.
    pub fn generate(&mut self) -> Vec<Stay> {
        let mut stays = Vec::new();
        for room_number in 1..=self.config.rooms {
            let room = RoomId::new(room_number);
            let count = self.sample_room_stay_count();
            for _ in 0..count {
                self.generate_reservation(room, &mut stays);
            }
        }
        stays
    }

    fn sample_room_stay_count(&mut self) -> u64 {
        let mean = self.config.mean_stays_per_room.max(0.0);
        let normal = Normal::new(mean, (mean / 2.0).max(0.1)).expect("valid count distribution");
        let sampled = normal.sample(&mut self.rng).round();
        sampled.clamp(0.0, mean * 3.0 + 1.0) as u64
    }

    /// Generates one logical reservation, possibly split into a chain of
    /// contiguous records sharing the grouping id.
    fn generate_reservation(&mut self, room: RoomId, out: &mut Vec<Stay>) {
        let id = self.fresh_id();
        let occupant = self.fresh_guest();
        let status = self.sample_status();
        let day_offset = self.rng.random_range(0..self.config.days);
        let first_day = self
            .config
            .first_day
            .checked_add_days(Days::new(day_offset))
            .expect("date within range");

        if self.rng.random_bool(self.config.pass_through_ratio) {
            let start = self.sample_minute(12.0 * 60.0, 180.0);
            let duration = self.rng.random_range(30..360u16);
            let end = DayMinute::new(start.value().saturating_add(duration));
            out.push(Stay::new(
                id,
                room,
                self.maybe_missing(CivilDateTime::new(first_day, start)),
                self.maybe_missing(CivilDateTime::new(first_day, end)),
                StayKind::PassThrough,
                status,
                0,
                occupant,
            ));
            return;
        }

        let nights = self.rng.random_range(1..=self.config.max_nights);
        let last_day = first_day
            .checked_add_days(Days::new(nights))
            .expect("date within range");
        let arrival = CivilDateTime::new(first_day, self.sample_minute(15.0 * 60.0, 90.0));
        let departure = CivilDateTime::new(last_day, self.sample_minute(11.0 * 60.0, 60.0));

        if nights >= 2 && self.rng.random_bool(self.config.chain_ratio) {
            // Split the reservation at noon of an intermediate day; the
            // pieces stay exactly adjacent so the merger can fuse them.
            let split_offset = self.rng.random_range(1..nights);
            let split_day = first_day
                .checked_add_days(Days::new(split_offset))
                .expect("date within range");
            let split = CivilDateTime::new(split_day, DayMinute::from_hm(12, 0));
            out.push(Stay::new(
                id,
                room,
                self.maybe_missing(arrival),
                split,
                StayKind::Overnight,
                status,
                split_offset as u32,
                occupant.clone(),
            ));
            out.push(Stay::new(
                id,
                room,
                split,
                self.maybe_missing(departure),
                StayKind::Overnight,
                status,
                (nights - split_offset) as u32,
                occupant,
            ));
            return;
        }

        out.push(Stay::new(
            id,
            room,
            self.maybe_missing(arrival),
            self.maybe_missing(departure),
            StayKind::Overnight,
            status,
            nights as u32,
            occupant,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stay::{MergedStay, StaySpan};

    fn generate_with_seed(seed: u64) -> Vec<Stay> {
        let config = WeekGenConfigBuilder::new().seed(seed).build();
        StayGenerator::new(config).generate()
    }

    #[test]
    fn test_same_seed_same_instance() {
        assert_eq!(generate_with_seed(7), generate_with_seed(7));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_with_seed(1), generate_with_seed(2));
    }

    #[test]
    fn test_generated_stays_are_well_formed() {
        let config = WeekGenConfigBuilder::new().seed(11).rooms(20).build();
        let first_day = config.first_day();
        let rooms = config.rooms();
        let stays = StayGenerator::new(config).generate();
        assert!(!stays.is_empty());
        for stay in &stays {
            assert!(stay.validate().is_ok(), "generated malformed stay: {stay}");
            assert!(stay.room().value() >= 1 && stay.room().value() <= rooms);
            assert!(stay.arrival().date() >= first_day);
        }
    }

    #[test]
    fn test_chains_are_exactly_adjacent() {
        let config = WeekGenConfigBuilder::new()
            .seed(3)
            .rooms(30)
            .chain_ratio(1.0)
            .pass_through_ratio(0.0)
            .missing_time_ratio(0.0)
            .build();
        let stays = StayGenerator::new(config).generate();

        let mut chain_pairs = 0;
        for pair in stays.windows(2) {
            if pair[0].id() == pair[1].id() {
                let mut chain = MergedStay::from_stay(&pair[0]);
                assert!(chain.try_absorb(&pair[1]), "chain pieces not adjacent");
                assert_eq!(chain.nights(), pair[0].nights() + pair[1].nights());
                chain_pairs += 1;
            }
        }
        assert!(chain_pairs > 0, "expected at least one split reservation");
    }
}
