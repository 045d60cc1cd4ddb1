// ABOUTME: Running training record and its calorie formula
// ABOUTME: Calories scale with mean speed, body weight, and duration in minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::physiology::{RUNNING_SPEED_MULTIPLIER, RUNNING_SPEED_SHIFT};
use crate::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use crate::errors::TrackerResult;
use crate::models::WorkoutType;
use crate::training::{check_positive, Training};

/// Running training record
#[derive(Debug, Clone)]
pub struct Running {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Running {
    /// Create a running record, validating the readings
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TrackerError::InvalidReading`] when duration
    /// or weight is not strictly positive.
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> TrackerResult<Self> {
        check_positive("duration", duration_hours)?;
        check_positive("weight", weight_kg)?;
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
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

    fn spent_calories(&self) -> f64 {
        RUNNING_SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), RUNNING_SPEED_SHIFT)
            * self.weight_kg
            / METERS_PER_KM
            * (self.duration_hours * MINUTES_PER_HOUR)
    }
}
