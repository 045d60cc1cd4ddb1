// ABOUTME: Training summary rendering and output format abstraction
// ABOUTME: Supports the fixed text summary line (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Output Formatting
//!
//! [`TrainingSummary`] is the read-only record derived from one training:
//! the workout label plus duration, distance, mean speed, and calories. It
//! renders to the fixed one-line text message the console driver prints, or
//! to JSON for programmatic consumers.
//!
//! Numeric fields are formatted with three decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::TrackerResult;
use crate::models::WorkoutType;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed one-line text summary (default)
    #[default]
    Text,
    /// JSON object with the summary fields
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    ///
    /// Returns `Text` for unrecognized values.
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only summary derived from one training record
///
/// Created once per record on demand and never mutated; building it twice
/// from the same record yields identical field values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Workout type of the summarized training
    pub workout_type: WorkoutType,
    /// Training duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories spent in kcal
    pub calories_kcal: f64,
}

impl TrainingSummary {
    /// Build a summary from computed metric values
    #[must_use]
    pub const fn new(
        workout_type: WorkoutType,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            workout_type,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    /// Render the fixed one-line summary message
    ///
    /// All numeric fields carry three decimal places.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type.display_name(),
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Format a training summary to the requested output format
///
/// # Errors
///
/// Returns [`crate::errors::TrackerError::Serialization`] if JSON
/// serialization fails.
pub fn format_summary(summary: &TrainingSummary, format: OutputFormat) -> TrackerResult<String> {
    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}
