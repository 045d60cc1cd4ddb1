// ABOUTME: Core data models for the fitness tracker
// ABOUTME: Re-exports the workout type enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Core data models

/// Workout type enumeration with sensor code parsing
pub mod workout;

pub use workout::WorkoutType;
