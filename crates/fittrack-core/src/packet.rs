//! Sensor packet wire model and batch ingestion.
//!
//! A packet arrives as a two-element array of activity code and positional
//! numeric values, e.g. `["RUN", [15000, 1, 75]]`. Where the values come
//! from (file, stdin, a test fixture) is the caller's business; this module
//! only parses and holds them.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One packet from the sensor feed: activity code plus positional values.
///
/// The first value is always the raw movement count (steps or strokes, a
/// whole number); the remaining values depend on the activity code and are
/// assigned positionally by [`crate::Workout::from_packet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket(String, Vec<f64>);

impl SensorPacket {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self(code.into(), values)
    }

    /// Three-letter activity code (`RUN`, `WLK`, `SWM`).
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Positional sensor values, in wire order.
    pub fn values(&self) -> &[f64] {
        &self.1
    }
}

/// Read a JSON packet batch from any reader.
pub fn read_packets<R: Read>(reader: R) -> Result<Vec<SensorPacket>> {
    Ok(serde_json::from_reader(reader)?)
}
