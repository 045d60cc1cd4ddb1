// ABOUTME: Unit conversion constants for distance, time, and speed measurements
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// km/h to m/s conversion factor (truncated, matches the sensor firmware)
pub const KMH_TO_MS: f64 = 0.278;
