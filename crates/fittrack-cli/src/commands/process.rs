//! Batch processing command.
//!
//! Reads a JSON packet batch, processes packets in input order and prints
//! one summary per packet. The first failing packet aborts the batch.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Args;
use fittrack_core::{read_packets, Workout};

#[derive(Args)]
pub struct ProcessArgs {
    /// Packet batch as a JSON file, or `-` for stdin
    pub input: PathBuf,
    /// Emit summaries as JSON instead of text lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ProcessArgs) -> Result<(), Box<dyn std::error::Error>> {
    let packets = if args.input.as_os_str() == "-" {
        read_packets(io::stdin().lock())?
    } else {
        read_packets(File::open(&args.input)?)?
    };

    for packet in &packets {
        let summary = Workout::from_packet(packet)?.summary();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{summary}");
        }
    }
    Ok(())
}
