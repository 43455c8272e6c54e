mod commands;
mod config;
mod engine;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::HarnessConfig;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "OFFICEPARSER_LOG";

/// Exit status for a malformed command line.
const EXIT_USAGE: i32 = 2;

/// Golden-file conformance runner for officeparser extraction engines.
///
/// With no EXT, checks the engine's capability list and runs every format in
/// file and buffer mode. With one EXT, prints that format's extracted text.
#[derive(Parser)]
#[command(
    name = "officeparser-test",
    version,
    about = "Golden-file conformance runner for officeparser extraction engines"
)]
struct Cli {
    /// Path to a TOML config file (default: ./officeparser-test.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding test.<ext> and test.<ext>.txt fixtures
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Extension to extract and print instead of running the suite
    #[arg(value_name = "EXT")]
    extensions: Vec<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if cli.extensions.len() > 1 {
        eprintln!("Invalid arguments");
        process::exit(EXIT_USAGE);
    }

    let mut config = match HarnessConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    if let Some(dir) = cli.fixtures {
        config.fixture_root = dir;
    }

    match cli.extensions.first() {
        None => commands::test::cmd_test(&config),
        Some(ext) => commands::extract::cmd_extract(&config, ext),
    }
}
