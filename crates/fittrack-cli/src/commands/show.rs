//! Single-packet command.

use clap::Args;
use fittrack_core::{SensorPacket, Workout};

#[derive(Args)]
pub struct ShowArgs {
    /// Activity code (RUN, WLK or SWM)
    pub code: String,
    /// Positional sensor values for the activity
    #[arg(required = true)]
    pub values: Vec<f64>,
    /// Emit the summary as JSON instead of a text line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let packet = SensorPacket::new(args.code, args.values);
    let summary = Workout::from_packet(&packet)?.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
