use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fittrack-cli", version, about = "Fittrack CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a batch of sensor packets
    Process(commands::process::ProcessArgs),
    /// Summarize a single sensor packet from positional values
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Show(args) => commands::show::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
