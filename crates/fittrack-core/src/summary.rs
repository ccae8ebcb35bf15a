//! Workout summary record and the fixed-format summary line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived metrics for one completed workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Activity label ("Running", "SportsWalking", "Swimming")
    pub activity: String,
    /// Duration in hours
    pub duration_h: f64,
    /// Distance covered in kilometres
    pub distance_km: f64,
    /// Mean speed in km/h
    pub avg_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    /// Render the summary line. All numeric fields carry exactly three
    /// decimal digits, fixed-point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.activity,
            self.duration_h,
            self.distance_km,
            self.avg_speed_kmh,
            self.calories_kcal
        )
    }
}
