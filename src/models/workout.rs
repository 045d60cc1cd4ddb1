// ABOUTME: Workout type enumeration for sensor packages
// ABOUTME: Defines supported workout types with code parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{TrackerError, TrackerResult};

/// Enumeration of supported workout types
///
/// Each sensor package addresses exactly one workout type through its
/// three-letter code. An unrecognized code is an error, never a fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running activity
    Running,
    /// Sports (race) walking activity
    SportsWalking,
    /// Pool swimming activity
    Swimming,
}

impl WorkoutType {
    /// Parse a sensor package code into a `WorkoutType`
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownWorkoutCode`] when the code is not
    /// one of `"RUN"`, `"WLK"`, `"SWM"`.
    pub fn from_code(code: &str) -> TrackerResult<Self> {
        match code {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(TrackerError::UnknownWorkoutCode(other.to_owned())),
        }
    }

    /// Sensor package code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Human-readable label used in summary messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
