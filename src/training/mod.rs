// ABOUTME: Training records and the polymorphic metric calculation trait
// ABOUTME: Shared distance/speed defaults with per-record calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Training Records
//!
//! The [`Training`] trait is the calculation seam of the crate: every record
//! supplies its raw readings through accessor methods and its own calorie
//! formula, while distance and mean speed have shared defaults that
//! individual records may override (swimming overrides both step length and
//! mean speed).
//!
//! Records are immutable after construction and every metric is a pure
//! function of the stored readings, so repeated calls yield identical
//! values.

use crate::constants::physiology::STEP_LENGTH_M;
use crate::constants::units::METERS_PER_KM;
use crate::errors::{TrackerError, TrackerResult};
use crate::formatters::TrainingSummary;
use crate::models::WorkoutType;

/// Running training record
pub mod running;

/// Sports walking training record
pub mod sports_walking;

/// Swimming training record
pub mod swimming;

pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;

/// Polymorphic workout metric calculator
///
/// `spent_calories` has no default implementation: every concrete record
/// must supply its own formula, so a record without one fails to compile
/// instead of failing at runtime. `Debug` is a supertrait so boxed records
/// stay debuggable behind `dyn Training`.
pub trait Training: std::fmt::Debug {
    /// Workout type of this record
    fn workout_type(&self) -> WorkoutType;

    /// Raw action count (steps or strokes)
    fn action(&self) -> u32;

    /// Training duration in hours
    fn duration_hours(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Distance covered by a single action, in meters
    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Total distance covered, in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.step_length_m() / METERS_PER_KM
    }

    /// Mean speed over the whole training, in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Calories spent over the training, in kcal
    fn spent_calories(&self) -> f64;

    /// Build the read-only summary for this training
    fn summary(&self) -> TrainingSummary {
        TrainingSummary::new(
            self.workout_type(),
            self.duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

/// Validate a reading that must be strictly positive
pub(crate) fn check_positive(field: &'static str, value: f64) -> TrackerResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::InvalidReading { field, value })
    }
}
