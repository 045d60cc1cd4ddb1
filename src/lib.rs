// ABOUTME: Fitness tracker library for processing raw workout sensor packages
// ABOUTME: Computes distance, mean speed, and calories for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Small data-processing library for raw workout sensor packages. Each
//! package carries a workout code (`"RUN"`, `"WLK"`, `"SWM"`) and a
//! fixed-order sequence of readings; the library dispatches the package to
//! the matching training record, computes distance, mean speed, and spent
//! calories, and renders a one-line summary message.
//!
//! ## Modules
//!
//! - **constants**: unit conversions and physiological coefficients
//! - **errors**: unified error handling with `TrackerError`
//! - **models**: `WorkoutType` with sensor code parsing and display names
//! - **training**: the `Training` trait and its three concrete records
//! - **dispatch**: sensor package to training record dispatcher
//! - **formatters**: `TrainingSummary` and output format abstraction
//! - **logging**: tracing subscriber configuration from environment

/// Unit conversion and physiological constants organized by domain
pub mod constants;

/// Sensor package to training record dispatcher
pub mod dispatch;

/// Unified error handling with `TrackerError` and `TrackerResult`
pub mod errors;

/// Training summary rendering and output format abstraction
pub mod formatters;

/// Tracing subscriber configuration from environment variables
pub mod logging;

/// Core data models (`WorkoutType`)
pub mod models;

/// Training records and the metric calculation trait
pub mod training;

pub use dispatch::read_package;
pub use errors::{TrackerError, TrackerResult};
pub use formatters::{format_summary, OutputFormat, TrainingSummary};
pub use models::WorkoutType;
pub use training::{Running, SportsWalking, Swimming, Training};
