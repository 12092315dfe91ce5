//! Command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use abc_scan::scan::{export_tables, scan_directory};

/// Scan a directory tree for Alembic archives and export their geometry
/// objects and attributes as CSV tables.
#[derive(Parser)]
#[command(name = "abc-scan", version)]
struct Args {
    /// Directory to scan recursively
    root: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                // Wrong argument count prints usage and exits 1
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "scan failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> abc_scan::Result<()> {
    let files = scan_directory(&args.root)?;

    let num_objects: usize = files.iter().map(|f| f.objects.len()).sum();
    info!(
        files = files.len(),
        objects = num_objects,
        "scan complete"
    );

    export_tables(&files)
}
