//! Running workout calculator.

use super::{M_IN_KM, MIN_IN_H, STEP_LENGTH_M};

/// Calibration multiplier on mean speed.
const SPEED_FACTOR: f64 = 18.0;
/// Calibration offset subtracted from the scaled speed.
const SPEED_SHIFT: f64 = 20.0;

/// A running session: step count, duration and body weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    steps: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    pub fn new(steps: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            steps,
            duration_h,
            weight_kg,
        }
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    /// Distance covered in km.
    pub fn distance_km(&self) -> f64 {
        f64::from(self.steps) * STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed in km/h. Zero duration is a caller contract violation
    /// and yields infinity.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h
    }

    /// Calories spent, calibrated for running.
    pub fn spent_calories(&self) -> f64 {
        (SPEED_FACTOR * self.mean_speed_kmh() - SPEED_SHIFT) * self.weight_kg / M_IN_KM
            * self.duration_h
            * MIN_IN_H
    }
}
