mod commands;
mod config;
mod providers;
mod webhook;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "streamcal")]
#[command(about = "Maintain the stream schedule: ICS feed, AI description backfill, weekly Discord digest")]
struct Cli {
    /// Path to the schedule data file
    #[arg(long, default_value = "data/streams.yml", global = true)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the ICS calendar feed from the schedule (future events only)
    BuildIcs {
        /// Output path for the feed
        #[arg(long, default_value = "static/schedule.ics")]
        out: PathBuf,
    },
    /// Generate missing descriptions for streams scheduled tomorrow
    GenerateDescriptions,
    /// Post the next week's schedule to the Discord webhook
    PostDigest,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::BuildIcs { out } => commands::build_ics::run(&cli.data, &out),
        Commands::GenerateDescriptions => {
            commands::generate::run(&cli.data, &config).await
        }
        Commands::PostDigest => commands::post_digest::run(&cli.data, &config).await,
    }
}
