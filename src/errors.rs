// ABOUTME: Unified error handling for sensor package processing
// ABOUTME: Defines TrackerError and the crate-wide TrackerResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling
//!
//! Every fallible operation in the crate returns [`TrackerResult`]. Unknown
//! workout codes and malformed packages are reported to the caller; nothing
//! is silently defaulted.

use thiserror::Error;

use crate::models::WorkoutType;

/// Unified error type for sensor package processing
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Workout code is not one of the supported values
    #[error("unknown workout code: {0}")]
    UnknownWorkoutCode(String),

    /// Package carried the wrong number of readings for its workout type
    #[error("{workout_type} package expects {expected} readings, got {actual}")]
    MalformedPackage {
        /// Workout type the package was addressed to
        workout_type: WorkoutType,
        /// Number of readings the workout type requires
        expected: usize,
        /// Number of readings the package actually carried
        actual: usize,
    },

    /// A reading failed validation
    #[error("invalid {field} reading: {value}")]
    InvalidReading {
        /// Name of the offending reading
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Summary serialization failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type TrackerResult<T> = Result<T, TrackerError>;
