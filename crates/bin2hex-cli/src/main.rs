use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "bin2hex",
    version,
    about = "Print a binary file as little-endian 64-bit words, one hex word per line"
)]
struct Cli {
    /// Input file path
    input: PathBuf,
}

fn init_tracing() {
    // stdout carries only hex lines; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    match bin2hex_core::convert_file(&cli.input, out) {
        Ok(_) => Ok(()),
        // Reader went away (e.g. piped into `head`); nothing left to report.
        Err(e) if e.is_broken_pipe() => Ok(()),
        Err(e) => {
            // anyhow reports the failure itself
            debug!(input = %cli.input.display(), error = %e, "conversion failed");
            Err(e).with_context(|| format!("failed to convert {}", cli.input.display()))
        }
    }
}
