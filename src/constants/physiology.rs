// ABOUTME: Physiological coefficients for the per-workout calorie formulas
// ABOUTME: Step lengths and calorie multipliers, fixed per workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Stride length in meters for running and sports walking
pub const STEP_LENGTH_M: f64 = 0.65;

/// Stroke length in meters for swimming
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie formula: multiplier applied to mean speed
pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;

/// Running calorie formula: shift added to the scaled mean speed
pub const RUNNING_SPEED_SHIFT: f64 = 1.79;

/// Walking calorie formula: coefficient applied to body weight
pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Walking calorie formula: coefficient applied to the speed/height term
pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Swimming calorie formula: shift added to mean speed, in km/h
pub const SWIMMING_SPEED_SHIFT: f64 = 1.1;

/// Swimming calorie formula: multiplier applied to body weight
pub const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;
