//! # Fittrack Core Library
//!
//! This library provides the core business logic for the Fittrack workout
//! tracker. It implements a CLI-first philosophy where the full processing
//! pipeline is available as a library, with the CLI binary being a thin
//! driver over the same core.
//!
//! ## Architecture
//!
//! - **Packets**: Wire model for sensor packets (activity code plus
//!   positional numeric values) and JSON batch ingestion
//! - **Workouts**: A closed set of calculators (running, sports walking,
//!   swimming), each deriving distance, mean speed and spent calories from
//!   one packet
//! - **Summaries**: A display record plus the fixed-format summary line
//!
//! ## Key Components
//!
//! - [`SensorPacket`]: One packet from the sensor feed
//! - [`Workout`]: Dispatched calculator for one workout
//! - [`WorkoutSummary`]: Derived metrics ready for display
//! - [`CoreError`]: Error taxonomy for dispatch and ingestion

pub mod error;
pub mod packet;
pub mod summary;
pub mod workout;

pub use error::{CoreError, Result};
pub use packet::{read_packets, SensorPacket};
pub use summary::WorkoutSummary;
pub use workout::{Running, SportsWalking, Swimming, Workout};
