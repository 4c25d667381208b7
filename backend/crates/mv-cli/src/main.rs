//! mv - MedVision CLI
//!
//! Drives the emulated backend from the command line. Every command prints
//! a `{data, error}` JSON envelope.
//!
//! # Examples
//!
//! ```bash
//! # Create an account
//! mv auth sign-up --email jane@clinic.org --password secret --display-name "Dr. Jane"
//!
//! # Analyze a chest X-ray
//! mv analyze --patient "John Doe" --type xray --region Chest --image ./chest.png --pretty
//!
//! # Search history
//! mv history --search pneumonia --type xray
//! ```

use mv_cli::{App, Cli, Result as CliErrorResult, logger};
use mv_config::Config;
use mv_core::Envelope;

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = match config.logging.file {
        Some(ref file) => Some(Config::config_dir()?.join(file)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    if *config.logging.level >= LevelFilter::Debug {
        config.log_summary();
    }

    let app = App::from_config(&config)?;
    let envelope = app.execute(cli.command).await?;

    Ok(print_envelope(&envelope, cli.pretty))
}

fn print_envelope(envelope: &Envelope<Value>, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if envelope.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
