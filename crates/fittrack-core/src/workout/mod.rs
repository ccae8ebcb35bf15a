//! Workout calculators for the three supported activity types.
//!
//! Each variant derives distance, mean speed and spent calories from one
//! sensor packet using its calibrated formulas. The variant set is closed:
//! there is no generic workout to instantiate, so every constructed value
//! has a calorie formula and dispatch is a plain match.
//!
//! The derived metrics are pure functions of the packet fields and the
//! per-variant constants; calling them twice yields identical results.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::{CoreError, Result};
use crate::packet::SensorPacket;
use crate::summary::WorkoutSummary;

/// Metres per kilometre.
pub(crate) const M_IN_KM: f64 = 1000.0;
/// Minutes per hour.
pub(crate) const MIN_IN_H: f64 = 60.0;
/// Average step length in metres (running and walking).
pub(crate) const STEP_LENGTH_M: f64 = 0.65;

/// A dispatched workout, ready to derive its metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Dispatch a sensor packet to its workout variant.
    ///
    /// Values are assigned positionally per activity code: `RUN` takes
    /// count/duration/weight, `WLK` adds the height value, `SWM` adds pool
    /// length and lap count. Counts are whole numbers by the sensor
    /// contract and are narrowed accordingly.
    pub fn from_packet(packet: &SensorPacket) -> Result<Self> {
        let values = packet.values();
        match packet.code() {
            "RUN" => {
                let [count, duration_h, weight_kg] = expect_arity::<3>("Running", values)?;
                Ok(Self::Running(Running::new(count as u32, duration_h, weight_kg)))
            }
            "WLK" => {
                let [count, duration_h, weight_kg, height] =
                    expect_arity::<4>("SportsWalking", values)?;
                Ok(Self::SportsWalking(SportsWalking::new(
                    count as u32,
                    duration_h,
                    weight_kg,
                    height,
                )))
            }
            "SWM" => {
                let [count, duration_h, weight_kg, pool_length_m, pool_laps] =
                    expect_arity::<5>("Swimming", values)?;
                Ok(Self::Swimming(Swimming::new(
                    count as u32,
                    duration_h,
                    weight_kg,
                    pool_length_m,
                    pool_laps,
                )))
            }
            other => Err(CoreError::UnknownActivity(other.to_string())),
        }
    }

    /// Activity label used in the summary line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running(_) => "Running",
            Self::SportsWalking(_) => "SportsWalking",
            Self::Swimming(_) => "Swimming",
        }
    }

    /// Session duration in hours.
    pub fn duration_h(&self) -> f64 {
        match self {
            Self::Running(w) => w.duration_h(),
            Self::SportsWalking(w) => w.duration_h(),
            Self::Swimming(w) => w.duration_h(),
        }
    }

    /// Distance covered in km.
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance_km(),
            Self::SportsWalking(w) => w.distance_km(),
            Self::Swimming(w) => w.distance_km(),
        }
    }

    /// Mean speed in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed_kmh(),
            Self::SportsWalking(w) => w.mean_speed_kmh(),
            Self::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    /// Calories spent, per the variant's calibrated formula.
    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.spent_calories(),
            Self::SportsWalking(w) => w.spent_calories(),
            Self::Swimming(w) => w.spent_calories(),
        }
    }

    /// Derive all metrics and package them for display.
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            activity: self.label().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            avg_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

/// Check positional arity for a variant and unpack the values.
fn expect_arity<const N: usize>(kind: &'static str, values: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| CoreError::ArityMismatch {
        kind,
        expected: N,
        got: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_reference_vector() {
        let packet = SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]);
        let workout = Workout::from_packet(&packet).unwrap();

        assert_close(workout.distance_km(), 9.75);
        assert_close(workout.mean_speed_kmh(), 9.75);
        assert_close(workout.spent_calories(), (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0);
        assert_eq!(
            workout.summary().to_string(),
            "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories: 699.750."
        );
    }

    #[test]
    fn test_walking_reference_vector() {
        let packet = SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let workout = Workout::from_packet(&packet).unwrap();

        assert_close(workout.distance_km(), 5.85);
        assert_close(workout.mean_speed_kmh(), 5.85);
        // 5.85^2 / 180 floors to zero, only the base weight term remains
        assert_close(workout.spent_calories(), 0.035 * 75.0 * 60.0);
        assert_eq!(
            workout.summary().to_string(),
            "Activity type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories: 157.500."
        );
    }

    #[test]
    fn test_swimming_reference_vector() {
        let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let workout = Workout::from_packet(&packet).unwrap();

        assert_close(workout.mean_speed_kmh(), 1.0);
        assert_close(workout.distance_km(), 0.9936);
        assert_close(workout.spent_calories(), (1.0 + 1.1) * 2.0 * 80.0);
        assert_eq!(
            workout.summary().to_string(),
            "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_unknown_activity_code() {
        let packet = SensorPacket::new("BIKE", vec![1.0, 2.0, 3.0]);
        let err = Workout::from_packet(&packet).unwrap_err();
        assert!(matches!(err, CoreError::UnknownActivity(code) if code == "BIKE"));
    }

    #[test]
    fn test_arity_mismatch_reports_expected_and_got() {
        let packet = SensorPacket::new("RUN", vec![15000.0, 1.0]);
        let err = Workout::from_packet(&packet).unwrap_err();
        match err {
            CoreError::ArityMismatch {
                kind,
                expected,
                got,
            } => {
                assert_eq!(kind, "Running");
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected ArityMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_mismatch_on_extra_values() {
        let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0, 7.0]);
        let err = Workout::from_packet(&packet).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ArityMismatch {
                expected: 5,
                got: 6,
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn distance_and_speed_are_deterministic(
            count in 0u32..200_000,
            duration_h in 0.1f64..24.0,
            weight_kg in 30.0f64..150.0,
        ) {
            let workout = Workout::Running(Running::new(count, duration_h, weight_kg));
            prop_assert_eq!(workout.distance_km(), workout.distance_km());
            prop_assert_eq!(workout.mean_speed_kmh(), workout.mean_speed_kmh());
            prop_assert_eq!(workout.spent_calories(), workout.spent_calories());
        }

        #[test]
        fn summary_agrees_with_direct_metrics(
            count in 0u32..200_000,
            duration_h in 0.1f64..24.0,
            weight_kg in 30.0f64..150.0,
            pool_length_m in 10.0f64..50.0,
            pool_laps in 1.0f64..200.0,
        ) {
            let workout = Workout::Swimming(Swimming::new(
                count, duration_h, weight_kg, pool_length_m, pool_laps,
            ));
            let summary = workout.summary();
            prop_assert_eq!(summary.distance_km, workout.distance_km());
            prop_assert_eq!(summary.avg_speed_kmh, workout.mean_speed_kmh());
            prop_assert_eq!(summary.calories_kcal, workout.spent_calories());
            prop_assert_eq!(summary.duration_h, duration_h);
        }
    }
}
