use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mv")]
#[command(about = "MedVision CLI: emulated backend for medical image analysis")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
