// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `lmst`: print the Local Mean Sidereal Time for a longitude.

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use lmst::{Hms, LmstCalculator, Longitude};

/// Exit status for a malformed command line (`-1` as an 8-bit status).
const USAGE_EXIT: u8 = 255;

#[derive(Parser, Debug)]
#[command(name = "lmst")]
#[command(about = "Compute the Local Mean Sidereal Time for a longitude")]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(after_help = "Where longitude is in degrees and E is positive.\n\
[date time] is optional and should be in the computer's time zone and in the format YYYY-MM-DDTHH:MM")]
struct Cli {
    /// Log intermediate values to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Longitude in decimal degrees, East positive, West negative
    longitude: String,

    /// Observation time in the local time zone (YYYY-MM-DDTHH:MM); defaults to now
    #[arg(value_name = "DATE_TIME")]
    date_time: Option<String>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: &Cli) -> Result<Hms> {
    let longitude: Longitude = cli.longitude.parse()?;
    let lmst = LmstCalculator::system().compute(longitude, cli.date_time.as_deref())?;
    Ok(lmst.hms())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            err.print().ok();
            return ExitCode::from(USAGE_EXIT);
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(hms) => {
            println!("{hms}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(?err, "lmst failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
