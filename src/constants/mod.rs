// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Unit conversions and physiological coefficients used in metric calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application constants organized by domain

/// Physiological coefficients for the calorie formulas
pub mod physiology;

/// Unit conversion constants for distance, time, and speed
pub mod units;
