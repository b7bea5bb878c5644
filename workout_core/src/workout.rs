//! Workout variants and their calculation formulas.
//!
//! Every variant shares the base readings (action count, duration, weight)
//! and the [`Workout`] contract. Distance and mean speed have default
//! formulas that a variant may override; calories are always variant
//! specific.

use crate::{Error, InfoMessage, Result, WorkoutKind};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const HOUR_TO_MIN: f64 = 60.0;

/// Step length shared by running and walking
pub const LEN_STEP_M: f64 = 0.65;

// ============================================================================
// Base Readings
// ============================================================================

/// Readings common to every workout variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readings {
    /// Steps or strokes
    pub action: f64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Readings {
    /// Validate and build base readings
    ///
    /// Duration divides every speed formula, so it must be strictly positive.
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        require_finite("action", action)?;
        require_finite("weight_kg", weight_kg)?;
        require_positive("duration_hours", duration_hours)?;
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidReading(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidReading(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

// ============================================================================
// Workout Contract
// ============================================================================

/// Calculation contract shared by all workout variants
pub trait Workout {
    fn kind(&self) -> WorkoutKind;

    fn readings(&self) -> &Readings;

    /// Distance covered per unit of action, in meters
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        self.readings().action * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.readings().duration_hours
    }

    /// Calories burned over the whole workout
    fn spent_calories(&self) -> f64;

    /// Build the summary message for this workout
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().name(),
            self.readings().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

// ============================================================================
// Running
// ============================================================================

/// Running workout
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    base: Readings,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            base: Readings::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn readings(&self) -> &Readings {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let base = &self.base;
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() - Self::SPEED_SHIFT) * base.weight_kg
            / M_IN_KM
            * base.duration_hours
            * HOUR_TO_MIN
    }
}

// ============================================================================
// Walking
// ============================================================================

/// Sports walking workout
#[derive(Clone, Debug, PartialEq)]
pub struct Walking {
    base: Readings,
    pub height_cm: f64,
}

impl Walking {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: f64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Result<Self> {
        let base = Readings::new(action, duration_hours, weight_kg)?;
        require_positive("height_cm", height_cm)?;
        Ok(Self { base, height_cm })
    }
}

impl Workout for Walking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn readings(&self) -> &Readings {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let base = &self.base;
        // Floor division: the squared-speed term is truncated to a whole number.
        let speed_term = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();
        (Self::WEIGHT_MULTIPLIER * base.weight_kg
            + speed_term * Self::SPEED_HEIGHT_MULTIPLIER * base.weight_kg)
            * base.duration_hours
            * HOUR_TO_MIN
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Swimming workout
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    base: Readings,
    pub pool_length_m: f64,
    pub pool_laps: f64,
}

impl Swimming {
    const LEN_STROKE_M: f64 = 1.38;
    const SPEED_SHIFT: f64 = 1.1;
    const SPEED_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Result<Self> {
        let base = Readings::new(action, duration_hours, weight_kg)?;
        require_positive("pool_length_m", pool_length_m)?;
        require_positive("pool_laps", pool_laps)?;
        Ok(Self {
            base,
            pool_length_m,
            pool_laps,
        })
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn readings(&self) -> &Readings {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        Self::LEN_STROKE_M
    }

    /// Pool-based speed; stroke count plays no part
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT) * Self::SPEED_MULTIPLIER * self.base.weight_kg
    }
}

// ============================================================================
// Training (tagged variant)
// ============================================================================

/// A constructed workout of any kind
#[derive(Clone, Debug, PartialEq)]
pub enum Training {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Training {
    fn as_workout(&self) -> &dyn Workout {
        match self {
            Training::Running(w) => w,
            Training::Walking(w) => w,
            Training::Swimming(w) => w,
        }
    }
}

impl Workout for Training {
    fn kind(&self) -> WorkoutKind {
        self.as_workout().kind()
    }

    fn readings(&self) -> &Readings {
        self.as_workout().readings()
    }

    fn step_length_m(&self) -> f64 {
        self.as_workout().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_workout().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_workout().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_workout().spent_calories()
    }
}

impl From<Running> for Training {
    fn from(w: Running) -> Self {
        Training::Running(w)
    }
}

impl From<Walking> for Training {
    fn from(w: Walking) -> Self {
        Training::Walking(w)
    }
}

impl From<Swimming> for Training {
    fn from(w: Swimming) -> Self {
        Training::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_running_formulas() {
        crate::logging::init_test();
        let run = Running::new(1500.0, 1.0, 75.0).unwrap();

        assert_close(run.distance_km(), 0.975);
        assert_close(run.mean_speed_kmh(), 0.975);
        // (18 * 0.975 - 20) * 75 / 1000 * 1 * 60
        assert_close(run.spent_calories(), -11.025);
    }

    #[test]
    fn test_walking_formulas() {
        let walk = Walking::new(9000.0, 1.0, 75.0, 180.0).unwrap();

        assert_close(walk.distance_km(), 5.85);
        assert_close(walk.mean_speed_kmh(), 5.85);
        // 5.85^2 / 180 floors to 0, leaving only the weight term
        assert_close(walk.spent_calories(), 0.035 * 75.0 * 60.0);
        assert_close(walk.spent_calories(), 157.5);
    }

    #[test]
    fn test_walking_truncates_speed_term() {
        // 2 h, 26000 steps: distance 16.9 km, speed 8.45 km/h, 8.45^2 = 71.4025
        let walk = Walking::new(26000.0, 2.0, 70.0, 35.0).unwrap();
        let speed_sq = walk.mean_speed_kmh().powi(2);
        assert!(speed_sq / 35.0 > 2.0 && speed_sq / 35.0 < 3.0);

        let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 2.0 * 60.0;
        assert_close(walk.spent_calories(), expected);
    }

    #[test]
    fn test_swimming_formulas() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();

        assert_close(swim.distance_km(), 0.9936);
        assert_close(swim.mean_speed_kmh(), 1.0);
        assert_close(swim.spent_calories(), 336.0);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few = Swimming::new(10.0, 2.0, 80.0, 50.0, 20.0).unwrap();
        let many = Swimming::new(10_000.0, 2.0, 80.0, 50.0, 20.0).unwrap();
        assert_close(few.mean_speed_kmh(), many.mean_speed_kmh());
        assert_close(few.mean_speed_kmh(), 0.5);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = Running::new(1500.0, 0.0, 75.0).unwrap_err();
        assert!(matches!(err, Error::InvalidReading(_)));
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(matches!(
            Running::new(1500.0, -1.0, 75.0),
            Err(Error::InvalidReading(_))
        ));
    }

    #[test]
    fn test_negative_action_and_weight_accepted() {
        let heavy = Running::new(1500.0, 1.0, -75.0).unwrap();
        assert_close(heavy.readings().weight_kg, -75.0);

        let backwards = Running::new(-1500.0, 1.0, 75.0).unwrap();
        assert_close(backwards.distance_km(), -0.975);
        assert_close(backwards.spent_calories(), -168.975);
    }

    #[test]
    fn test_non_positive_variant_fields_rejected() {
        assert!(matches!(
            Walking::new(9000.0, 1.0, 75.0, 0.0),
            Err(Error::InvalidReading(_))
        ));
        assert!(matches!(
            Swimming::new(720.0, 1.0, 80.0, -25.0, 40.0),
            Err(Error::InvalidReading(_))
        ));
        assert!(matches!(
            Swimming::new(720.0, 1.0, 80.0, 25.0, 0.0),
            Err(Error::InvalidReading(_))
        ));
    }

    #[test]
    fn test_non_finite_reading_rejected() {
        assert!(matches!(
            Running::new(f64::NAN, 1.0, 75.0),
            Err(Error::InvalidReading(_))
        ));
        assert!(matches!(
            Running::new(1500.0, f64::INFINITY, 75.0),
            Err(Error::InvalidReading(_))
        ));
    }

    #[test]
    fn test_training_delegates_to_variant() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
        let training = Training::from(swim.clone());

        assert_eq!(training.kind(), WorkoutKind::Swimming);
        assert_close(training.step_length_m(), 1.38);
        assert_close(training.mean_speed_kmh(), swim.mean_speed_kmh());
        assert_close(training.spent_calories(), swim.spent_calories());
    }

    #[test]
    fn test_show_training_info() {
        let info = Running::new(1500.0, 1.0, 75.0)
            .unwrap()
            .show_training_info();

        assert_eq!(info.training_type, "Running");
        assert_close(info.duration, 1.0);
        assert_close(info.distance, 0.975);
        assert_close(info.calories, -11.025);
    }
}
