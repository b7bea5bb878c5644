//! Core domain types for workout statistics.
//!
//! This module defines:
//! - Workout kinds and their sensor type codes
//! - Packages (a type code plus raw readings)
//! - The built-in demo package list

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Workout Kinds
// ============================================================================

/// Kind of workout a package describes
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in factory table order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    /// Sensor type code for this kind
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the summary line
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "Walking",
            WorkoutKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Packages
// ============================================================================

/// Raw sensor package: a workout type code and positional readings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Built-in demo packages reported when no input is given
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![1500.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
