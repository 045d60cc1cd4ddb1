// ABOUTME: Swimming training record with pool-based speed and stroke-length distance
// ABOUTME: Overrides step length and mean speed; calories scale with speed and weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::physiology::{
    STROKE_LENGTH_M, SWIMMING_SPEED_SHIFT, SWIMMING_WEIGHT_MULTIPLIER,
};
use crate::constants::units::METERS_PER_KM;
use crate::errors::TrackerResult;
use crate::models::WorkoutType;
use crate::training::{check_positive, Training};

/// Swimming training record
///
/// Distance comes from stroke count like the other records, but mean speed
/// is derived from the pool length and lap count instead of the distance.
#[derive(Debug, Clone)]
pub struct Swimming {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    lap_count: u32,
}

impl Swimming {
    /// Create a swimming record, validating the readings
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TrackerError::InvalidReading`] when
    /// duration, weight, or pool length is not strictly positive.
    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: u32,
    ) -> TrackerResult<Self> {
        check_positive("duration", duration_hours)?;
        check_positive("weight", weight_kg)?;
        check_positive("pool length", pool_length_m)?;
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
            pool_length_m,
            lap_count,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of completed pool laps
    #[must_use]
    pub const fn lap_count(&self) -> u32 {
        self.lap_count
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.lap_count) / METERS_PER_KM / self.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWIMMING_SPEED_SHIFT)
            * SWIMMING_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}
