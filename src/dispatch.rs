// ABOUTME: Sensor package dispatcher mapping workout codes to training records
// ABOUTME: Validates package arity and reading values before construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Sensor Package Dispatcher
//!
//! A sensor package is a workout code plus a fixed-order sequence of `f64`
//! readings. The layout is `[action, duration_hours, weight_kg]` followed by
//! the per-type extras: height in centimeters for walking, pool length in
//! meters and lap count for swimming.

use tracing::debug;

use crate::errors::{TrackerError, TrackerResult};
use crate::models::WorkoutType;
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Readings in a running package: action, duration, weight
const RUNNING_READINGS: usize = 3;

/// Readings in a walking package: action, duration, weight, height
const WALKING_READINGS: usize = 4;

/// Readings in a swimming package: action, duration, weight, pool length, laps
const SWIMMING_READINGS: usize = 5;

/// Dispatch one sensor package to its training record
///
/// # Errors
///
/// Returns [`TrackerError::UnknownWorkoutCode`] for an unrecognized code,
/// [`TrackerError::MalformedPackage`] when the reading count does not match
/// the workout type, and [`TrackerError::InvalidReading`] when a reading
/// fails validation (non-positive duration, weight, height, or pool length;
/// fractional or negative counts).
pub fn read_package(workout_type: &str, data: &[f64]) -> TrackerResult<Box<dyn Training>> {
    let workout_type = WorkoutType::from_code(workout_type)?;
    check_arity(workout_type, data)?;
    debug!(workout_type = %workout_type, readings = data.len(), "dispatching sensor package");

    let training: Box<dyn Training> = match workout_type {
        WorkoutType::Running => Box::new(Running::new(
            reading_to_count("action", data[0])?,
            data[1],
            data[2],
        )?),
        WorkoutType::SportsWalking => Box::new(SportsWalking::new(
            reading_to_count("action", data[0])?,
            data[1],
            data[2],
            data[3],
        )?),
        WorkoutType::Swimming => Box::new(Swimming::new(
            reading_to_count("action", data[0])?,
            data[1],
            data[2],
            data[3],
            reading_to_count("lap count", data[4])?,
        )?),
    };

    Ok(training)
}

fn check_arity(workout_type: WorkoutType, data: &[f64]) -> TrackerResult<()> {
    let expected = match workout_type {
        WorkoutType::Running => RUNNING_READINGS,
        WorkoutType::SportsWalking => WALKING_READINGS,
        WorkoutType::Swimming => SWIMMING_READINGS,
    };
    if data.len() == expected {
        Ok(())
    } else {
        Err(TrackerError::MalformedPackage {
            workout_type,
            expected,
            actual: data.len(),
        })
    }
}

/// Counts arrive on the wire as floats; reject fractional or out-of-range values
fn reading_to_count(field: &'static str, value: f64) -> TrackerResult<u32> {
    if value >= 0.0 && value <= f64::from(u32::MAX) && value.fract().abs() < f64::EPSILON {
        Ok(value as u32)
    } else {
        Err(TrackerError::InvalidReading { field, value })
    }
}
