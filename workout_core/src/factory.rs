//! Workout factory: maps sensor type codes to workout constructors.
//!
//! The table is built once and looked up by exact (case-sensitive) code.
//! The code is resolved before the reading count is checked, so an unknown
//! code always reports `InvalidWorkoutType`.

use crate::{
    Error, Package, Result, Running, Swimming, Training, Walking, WorkoutKind,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Builds a training from readings already checked against the arity
type Constructor = fn(&[f64]) -> Result<Training>;

/// One entry of the factory table
#[derive(Clone, Copy)]
pub struct FactoryEntry {
    pub kind: WorkoutKind,
    /// Number of positional readings the constructor takes
    pub arity: usize,
    build: Constructor,
}

static FACTORY_TABLE: Lazy<HashMap<&'static str, FactoryEntry>> = Lazy::new(|| {
    WorkoutKind::ALL
        .iter()
        .map(|&kind| (kind.code(), entry_for(kind)))
        .collect()
});

fn entry_for(kind: WorkoutKind) -> FactoryEntry {
    match kind {
        WorkoutKind::Running => FactoryEntry {
            kind,
            arity: 3,
            build: |r| Ok(Running::new(r[0], r[1], r[2])?.into()),
        },
        WorkoutKind::Walking => FactoryEntry {
            kind,
            arity: 4,
            build: |r| Ok(Walking::new(r[0], r[1], r[2], r[3])?.into()),
        },
        WorkoutKind::Swimming => FactoryEntry {
            kind,
            arity: 5,
            build: |r| Ok(Swimming::new(r[0], r[1], r[2], r[3], r[4])?.into()),
        },
    }
}

/// Look up the factory entry for a type code
pub fn lookup(workout_type: &str) -> Result<&'static FactoryEntry> {
    FACTORY_TABLE
        .get(workout_type)
        .ok_or_else(|| Error::InvalidWorkoutType(workout_type.to_string()))
}

/// Build a workout from a type code and its positional readings
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training> {
    let entry = lookup(workout_type)?;

    if data.len() != entry.arity {
        return Err(Error::InvalidReadingCount {
            code: workout_type.to_string(),
            expected: entry.arity,
            actual: data.len(),
        });
    }

    let training = (entry.build)(data)?;
    tracing::debug!("Built {} workout from {:?}", entry.kind, data);
    Ok(training)
}

/// Build every package in order, stopping at the first failure
pub fn read_packages(packages: &[Package]) -> Result<Vec<Training>> {
    packages
        .iter()
        .map(|p| read_package(&p.workout_type, &p.data))
        .collect()
}
