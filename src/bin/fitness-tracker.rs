// ABOUTME: Console driver that processes the bundled demo sensor packages
// ABOUTME: Dispatches each package to its training record and prints the summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Console driver for the fitness tracker.
//!
//! Processes a fixed in-memory list of sensor packages and prints one
//! summary line per workout to stdout. Configuration is environment-only:
//!
//! ```bash
//! # Default run
//! cargo run --bin fitness-tracker
//!
//! # With debug logging in compact format
//! RUST_LOG=debug LOG_FORMAT=compact cargo run --bin fitness-tracker
//! ```

use anyhow::Result;
use fitness_tracker::logging::LoggingConfig;
use fitness_tracker::read_package;
use tracing::info;

/// Demo sensor packages: (workout code, readings)
const PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    for &(code, data) in PACKAGES {
        let training = read_package(code, data)?;
        let summary = training.summary();
        info!(
            workout = %summary.workout_type,
            distance_km = summary.distance_km,
            "processed sensor package"
        );
        println!("{}", summary.message());
    }

    Ok(())
}
