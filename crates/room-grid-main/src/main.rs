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

use chrono::NaiveDate;
use room_grid_core::time::DayRange;
use room_grid_engine::build_grid;
use room_grid_model::prelude::*;
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    rooms: u64,
    days: u64,
    stay_count: usize,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    cell_count: usize,
    max_lanes: usize,
    skipped_count: usize,
    build_elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct OccupancyReport {
    description: String,
    instances: Vec<RunResult>,
}

fn interpolate_u(val0: u64, val1: u64, step: usize, steps: usize) -> u64 {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as i64 - val0 as i64) * step as i64;
    (val0 as i64 + num / (steps as i64 - 1)).max(0) as u64
}

fn print_week(rooms: &[RoomId], days: &[NaiveDate], grid: &room_grid_engine::OccupancyGrid) {
    print!("{:>10}", "room");
    for day in days {
        print!("{:>7}", day.format("%d.%m"));
    }
    println!();
    for &room in rooms {
        print!("{:>10}", room.value());
        for &day in days {
            let lanes = grid.lane_count(room, day);
            if lanes == 0 {
                print!("{:>7}", ".");
            } else {
                print!("{lanes:>7}");
            }
        }
        println!();
    }
}

fn main() {
    enable_tracing();

    let n_instances = 5usize;
    let min_rooms = 8u64;
    let max_rooms = 64u64;

    let mut results: Vec<RunResult> = Vec::with_capacity(n_instances);

    for i in 0..n_instances {
        let rooms_count = interpolate_u(min_rooms, max_rooms, i, n_instances);
        let seed = 42 + i as u64;

        let config = WeekGenConfigBuilder::new()
            .seed(seed)
            .rooms(rooms_count)
            .build();
        let first_day = config.first_day();
        let day_count = config.days();

        let rooms: Vec<RoomId> = (1..=config.rooms()).map(RoomId::new).collect();
        let days: Vec<NaiveDate> = DayRange::new(first_day, day_count as usize).collect();
        let stays = StayGenerator::new(config).generate();

        let started = Instant::now();
        let grid = build_grid(&rooms, &days, &stays);
        let build_elapsed_us = started.elapsed().as_micros();

        println!(
            "\ninstance {i}: seed {seed}, {rooms_count} rooms, {} stays, \
             {} cells, max {} lanes, {} skipped, built in {build_elapsed_us} us",
            stays.len(),
            grid.cell_count(),
            grid.max_lanes(),
            grid.skipped().len(),
        );
        print_week(&rooms, &days, &grid);

        results.push(RunResult {
            instance: InstanceInfo {
                idx: i,
                seed,
                rooms: rooms_count,
                days: day_count,
                stay_count: stays.len(),
            },
            cell_count: grid.cell_count(),
            max_lanes: grid.max_lanes(),
            skipped_count: grid.skipped().len(),
            build_elapsed_us,
        });
    }

    let report = OccupancyReport {
        description: "room-grid weekly occupancy build over generated instances".to_string(),
        instances: results,
    };

    let file = File::create("occupancy_report.json").expect("create report file");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");
    println!("\nwrote occupancy_report.json");
}
