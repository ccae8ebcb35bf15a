//! Sports walking workout calculator.

use super::{M_IN_KM, MIN_IN_H, STEP_LENGTH_M};

/// Calibration factor on body weight.
const WEIGHT_FACTOR: f64 = 0.035;
/// Calibration factor on the speed/height term.
const SPEED_HEIGHT_FACTOR: f64 = 0.029;

/// A sports walking session: step count, duration, body weight and the
/// walker's height value.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    steps: u32,
    duration_h: f64,
    weight_kg: f64,
    height: f64,
}

impl SportsWalking {
    pub fn new(steps: u32, duration_h: f64, weight_kg: f64, height: f64) -> Self {
        Self {
            steps,
            duration_h,
            weight_kg,
            height,
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

    /// Calories spent, calibrated for sports walking.
    ///
    /// The squared speed is floor-divided by the height value (toward
    /// negative infinity, hence `div_euclid`). The height is consumed
    /// exactly as supplied: call sites pass centimetre-scale numbers and
    /// the calibration bakes that in, so no unit conversion happens here.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        (WEIGHT_FACTOR * self.weight_kg
            + speed.powi(2).div_euclid(self.height) * SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_h
            * MIN_IN_H
    }
}
