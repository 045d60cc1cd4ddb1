// ABOUTME: Unit tests for the sensor package dispatcher
// ABOUTME: Validates code parsing, arity checks, and reading validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::{read_package, TrackerError, WorkoutType};

const EPSILON: f64 = 1e-6;

#[test]
fn test_read_package_running() {
    let training = read_package("RUN", &[15_000.0, 1.0, 75.0]).unwrap();

    assert_eq!(training.workout_type(), WorkoutType::Running);
    assert_eq!(training.action(), 15_000);
    assert!((training.duration_hours() - 1.0).abs() < EPSILON);
    assert!((training.weight_kg() - 75.0).abs() < EPSILON);
}

#[test]
fn test_read_package_swimming_uses_pool_readings() {
    let training = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

    assert_eq!(training.workout_type(), WorkoutType::Swimming);
    assert!((training.mean_speed_kmh() - 1.0).abs() < EPSILON);
    assert!((training.spent_calories() - 336.0).abs() < EPSILON);
}

#[test]
fn test_read_package_walking() {
    let training = read_package("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();

    assert_eq!(training.workout_type(), WorkoutType::SportsWalking);
    assert!((training.distance_km() - 5.85).abs() < EPSILON);
}

#[test]
fn test_read_package_unknown_code() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();

    match err {
        TrackerError::UnknownWorkoutCode(code) => assert_eq!(code, "XYZ"),
        other => panic!("expected UnknownWorkoutCode, got {other:?}"),
    }
}

#[test]
fn test_read_package_wrong_arity() {
    let err = read_package("RUN", &[15_000.0, 1.0]).unwrap_err();

    assert!(matches!(
        err,
        TrackerError::MalformedPackage {
            workout_type: WorkoutType::Running,
            expected: 3,
            actual: 2,
        }
    ));
}

#[test]
fn test_read_package_fractional_action() {
    let err = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err();

    assert!(matches!(
        err,
        TrackerError::InvalidReading { field: "action", .. }
    ));
}

#[test]
fn test_read_package_negative_lap_count() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]).unwrap_err();

    assert!(matches!(
        err,
        TrackerError::InvalidReading {
            field: "lap count",
            ..
        }
    ));
}

#[test]
fn test_boxed_training_is_debuggable() {
    let training = read_package("RUN", &[15_000.0, 1.0, 75.0]).unwrap();

    let rendered = format!("{training:?}");
    assert!(rendered.contains("Running"));
}

#[test]
fn test_workout_type_code_round_trip() {
    for workout_type in [
        WorkoutType::Running,
        WorkoutType::SportsWalking,
        WorkoutType::Swimming,
    ] {
        assert_eq!(
            WorkoutType::from_code(workout_type.code()).unwrap(),
            workout_type
        );
    }
}
