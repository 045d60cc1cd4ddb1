// ABOUTME: Unit tests for the training records and their metric formulas
// ABOUTME: Validates distance, mean speed, calories, and construction invariants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::{Running, SportsWalking, Swimming, TrackerError, Training, WorkoutType};

const EPSILON: f64 = 1e-6;

#[test]
fn test_distance_uses_step_length() {
    let running = Running::new(15_000, 1.0, 75.0).unwrap();
    assert!((running.distance_km() - 15_000.0 * 0.65 / 1000.0).abs() < EPSILON);

    let walking = SportsWalking::new(9_000, 1.0, 75.0, 180.0).unwrap();
    assert!((walking.distance_km() - 9_000.0 * 0.65 / 1000.0).abs() < EPSILON);

    let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
    assert!((swimming.distance_km() - 720.0 * 1.38 / 1000.0).abs() < EPSILON);
}

#[test]
fn test_running_metrics() {
    let running = Running::new(15_000, 1.0, 75.0).unwrap();

    assert_eq!(running.workout_type(), WorkoutType::Running);
    assert!((running.distance_km() - 9.75).abs() < EPSILON);
    assert!((running.mean_speed_kmh() - 9.75).abs() < EPSILON);

    // (18 * 9.75 + 1.79) * 75 / 1000 * 60
    assert!((running.spent_calories() - 797.805).abs() < EPSILON);
}

#[test]
fn test_sports_walking_metrics() {
    let walking = SportsWalking::new(9_000, 1.0, 75.0, 180.0).unwrap();

    assert_eq!(walking.workout_type(), WorkoutType::SportsWalking);
    assert!((walking.distance_km() - 5.85).abs() < EPSILON);
    assert!((walking.mean_speed_kmh() - 5.85).abs() < EPSILON);

    // (0.035*75 + (5.85*0.278)^2 / 1.8 * 0.029*75) * 60
    assert!((walking.spent_calories() - 349.251_747_525).abs() < EPSILON);
    assert!((walking.height_cm() - 180.0).abs() < EPSILON);
}

#[test]
fn test_swimming_metrics() {
    let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();

    assert_eq!(swimming.workout_type(), WorkoutType::Swimming);
    assert!((swimming.distance_km() - 0.9936).abs() < EPSILON);

    // Speed comes from the pool, not from stroke distance
    assert!((swimming.mean_speed_kmh() - 1.0).abs() < EPSILON);

    // (1.0 + 1.1) * 2 * 80 * 1
    assert!((swimming.spent_calories() - 336.0).abs() < EPSILON);

    assert!((swimming.pool_length_m() - 25.0).abs() < EPSILON);
    assert_eq!(swimming.lap_count(), 40);
}

#[test]
fn test_non_positive_duration_rejected() {
    let err = Running::new(15_000, 0.0, 75.0).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidReading {
            field: "duration",
            ..
        }
    ));
}

#[test]
fn test_non_positive_weight_rejected() {
    let err = Swimming::new(720, 1.0, -80.0, 25.0, 40).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidReading { field: "weight", .. }
    ));
}

#[test]
fn test_non_positive_height_rejected() {
    let err = SportsWalking::new(9_000, 1.0, 75.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidReading { field: "height", .. }
    ));
}

#[test]
fn test_non_positive_pool_length_rejected() {
    let err = Swimming::new(720, 1.0, 80.0, 0.0, 40).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidReading {
            field: "pool length",
            ..
        }
    ));
}

#[test]
fn test_summary_is_idempotent() {
    let running = Running::new(15_000, 1.0, 75.0).unwrap();

    let first = running.summary();
    let second = running.summary();

    assert_eq!(first.workout_type, second.workout_type);
    assert!((first.duration_hours - second.duration_hours).abs() < EPSILON);
    assert!((first.distance_km - second.distance_km).abs() < EPSILON);
    assert!((first.mean_speed_kmh - second.mean_speed_kmh).abs() < EPSILON);
    assert!((first.calories_kcal - second.calories_kcal).abs() < EPSILON);
}
