// ABOUTME: Sports walking training record and its calorie formula
// ABOUTME: Calories combine body weight with a squared-speed over height term
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::physiology::{WALKING_SPEED_HEIGHT_MULTIPLIER, WALKING_WEIGHT_MULTIPLIER};
use crate::constants::units::{CM_PER_METER, KMH_TO_MS, MINUTES_PER_HOUR};
use crate::errors::TrackerResult;
use crate::models::WorkoutType;
use crate::training::{check_positive, Training};

/// Sports walking training record
#[derive(Debug, Clone)]
pub struct SportsWalking {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a walking record, validating the readings
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TrackerError::InvalidReading`] when
    /// duration, weight, or height is not strictly positive.
    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> TrackerResult<Self> {
        check_positive("duration", duration_hours)?;
        check_positive("weight", weight_kg)?;
        check_positive("height", height_cm)?;
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
            height_cm,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
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
        let speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
        let height_m = self.height_cm / CM_PER_METER;
        let minutes = self.duration_hours * MINUTES_PER_HOUR;

        WALKING_WEIGHT_MULTIPLIER.mul_add(
            self.weight_kg,
            speed_ms.powi(2) / height_m * WALKING_SPEED_HEIGHT_MULTIPLIER * self.weight_kg,
        ) * minutes
    }
}
