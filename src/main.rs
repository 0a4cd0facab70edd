// Entrypoint for the CLI application.
// - Parses flags and environment into a `Config`; incomplete input prints
//   usage and exits cleanly without touching the network.
// - Runs list / delete / upload and prints the server's upload response.
// - Any failure is printed to stdout as a single error line, exit status 1.

use std::io::Write;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use zdkbattach::api::HttpTransport;
use zdkbattach::config::{Args, Config};
use zdkbattach::sync::SyncRunner;

fn main() {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            debug!("{err}");
            if let Err(err) = Args::command().print_help() {
                eprintln!("{err}");
            }
            return;
        }
    };

    if let Err(err) = run(&config) {
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn run(config: &Config) -> anyhow::Result<()> {
    let transport =
        HttpTransport::new(config.credentials().clone()).context("failed to build HTTP client")?;
    let report = SyncRunner::new(config, transport).run()?;
    debug!(deleted = ?report.deleted, "sync finished");

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&report.response)?;
    writeln!(stdout)?;
    Ok(())
}
