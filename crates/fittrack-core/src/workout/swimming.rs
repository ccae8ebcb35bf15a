//! Swimming workout calculator.
//!
//! Swimming is the odd one out: mean speed comes from the pool geometry
//! rather than from stroke distance, and the stroke length replaces the
//! step length in the distance formula.

use super::M_IN_KM;

/// Average stroke length in metres.
const STROKE_LENGTH_M: f64 = 1.38;
/// Calibration offset added to mean speed.
const SPEED_OFFSET: f64 = 1.1;
/// Calibration multiplier on body weight.
const WEIGHT_FACTOR: f64 = 2.0;

/// A swimming session: stroke count, duration, body weight and pool
/// geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    strokes: u32,
    duration_h: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_laps: f64,
}

impl Swimming {
    pub fn new(
        strokes: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            strokes,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_laps,
        }
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    /// Distance covered in km, from the stroke count.
    pub fn distance_km(&self) -> f64 {
        f64::from(self.strokes) * STROKE_LENGTH_M / M_IN_KM
    }

    /// Mean speed in km/h, from the pool geometry. Zero duration is a
    /// caller contract violation and yields infinity.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.duration_h
    }

    /// Calories spent, calibrated for swimming.
    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_OFFSET) * WEIGHT_FACTOR * self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_comes_from_pool_geometry_not_strokes() {
        let a = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
        let b = Swimming::new(9999, 1.0, 80.0, 25.0, 40.0);
        assert_eq!(a.mean_speed_kmh(), 1.0);
        assert_eq!(a.mean_speed_kmh(), b.mean_speed_kmh());
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
        assert!((swimming.distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_calories_reference_vector() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
        assert!((swimming.spent_calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_calories_ignore_stroke_distance() {
        // Calories depend on speed and weight only
        let a = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
        let b = Swimming::new(100, 1.0, 80.0, 25.0, 40.0);
        assert_eq!(a.spent_calories(), b.spent_calories());
    }
}
