// ABOUTME: NutriLens CLI - offline evaluation of scanned product fixtures
// ABOUTME: Scores product JSON against an optional health profile and dumps static catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors
//!
//! Usage:
//! ```bash
//! # Score a product
//! nutrilens-cli score --input product.json
//!
//! # Score a product for one user's profile, single-line output
//! nutrilens-cli score --input product.json --profile profile.json --compact
//!
//! # Dump a knowledge base catalog
//! nutrilens-cli catalog additives
//! ```

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use nutrilens::constants::service_names;
use nutrilens::errors::{AppError, AppResult};
use nutrilens::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "nutrilens-cli",
    about = "NutriLens food label analysis CLI",
    long_about = "Scores scanned product fixtures and prints personalized alerts as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score a product and print its report
    Score {
        /// Product JSON file
        #[arg(long)]
        input: PathBuf,

        /// Health profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Print a static knowledge base catalog
    Catalog {
        /// Catalog to print
        #[arg(value_enum)]
        kind: CatalogKind,
    },
}

/// Knowledge base catalogs available for dumping
#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogKind {
    /// Additive risk catalog
    Additives,
    /// Allergen keyword catalog
    Allergens,
    /// Disease avoid-keyword catalog
    Diseases,
}

fn init_logging(verbose: bool) -> AppResult<()> {
    let mut config = LoggingConfig::from_env().with_service_name(service_names::NUTRILENS_CLI);
    if verbose {
        config = config.with_level("debug");
    } else if env::var("RUST_LOG").is_err() {
        config = config.with_level("warn");
    }
    config
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
}

fn run(cli: Cli) -> AppResult<()> {
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Score {
            input,
            profile,
            compact,
        } => commands::score::run(&input, profile.as_deref(), compact),
        Command::Catalog { kind } => commands::catalog::run(kind),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(u8::try_from(error.code.exit_status()).unwrap_or(1))
        }
    }
}
