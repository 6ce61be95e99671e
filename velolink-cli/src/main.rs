//! VeloLink CLI - command-line interface
//!
//! Drives the display pipeline from the terminal: simulate a ride against
//! a route and watch the frames that would go over the wireless link, or
//! compose a single frame and inspect its commands.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "velolink", version, about = "Remote bike-navigation display pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a ride and print every frame pushed to the transport
    Simulate(commands::simulate::SimulateArgs),
    /// Compose one frame and dump its drawing commands
    Frame(commands::frame::FrameArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Simulate(args) => commands::simulate::run(args).await,
        Commands::Frame(args) => commands::frame::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
