// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rei - compress any context into a fixed 128-character token.
//!
//! This is the binary entry point.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rei_config::ReiConfig;
use rei_pipeline::Compressor;
use serde::Serialize;

use crate::commands::{CliError, InputMode};

/// Rei - compress any context into a fixed 128-character token.
#[derive(Parser, Debug)]
#[command(name = "rei", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the standard lookup paths.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Target model, overriding `[model] name`.
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode input into a token and reconstruction descriptor.
    Encode(InputArgs),
    /// Decode an envelope written by `encode`.
    Decode {
        /// Envelope file, or `-` for stdin.
        path: Option<PathBuf>,
    },
    /// Report sizes and ratios without encoding.
    Stats(InputArgs),
    /// List supported target models.
    Models,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file, or `-` for stdin.
    path: Option<PathBuf>,

    /// Treat input as raw bytes.
    #[arg(long, conflicts_with = "json")]
    binary: bool,

    /// Parse input as a JSON value.
    #[arg(long)]
    json: bool,
}

impl InputArgs {
    fn mode(&self) -> InputMode {
        if self.binary {
            InputMode::Binary
        } else if self.json {
            InputMode::Json
        } else {
            InputMode::Text
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => rei_config::load_and_validate_path(path),
        None => rei_config::load_and_validate(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            rei_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };
    if let Some(model) = cli.model.clone() {
        config.model.name = model;
    }

    init_tracing(&config.logging.level);
    tracing::debug!(model = %config.model.name, "configuration loaded");

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rei: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &ReiConfig) -> Result<(), CliError> {
    match command {
        Commands::Encode(args) => {
            let compressor = Compressor::from_config(config)?;
            let bytes = commands::read_source(args.path.as_deref())?;
            let input = commands::parse_input(bytes, args.mode())?;
            print_json(&commands::run_encode(&compressor, &input)?)
        }
        Commands::Decode { path } => {
            let compressor = Compressor::from_config(config)?;
            let bytes = commands::read_source(path.as_deref())?;
            let envelope = commands::parse_envelope(&bytes)?;
            print_json(&commands::run_decode(&compressor, &envelope)?)
        }
        Commands::Stats(args) => {
            let compressor = Compressor::from_config(config)?;
            let bytes = commands::read_source(args.path.as_deref())?;
            let input = commands::parse_input(bytes, args.mode())?;
            print_json(&commands::run_stats(&compressor, &input))
        }
        Commands::Models => print_json(&commands::run_models()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| CliError::Json {
        what: "output".to_string(),
        source,
    })?;
    println!("{text}");
    Ok(())
}

/// Initialize the tracing subscriber on stderr. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rei={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
