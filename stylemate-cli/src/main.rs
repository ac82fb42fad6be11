//! Binary crate for the `stylemate` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive form entry
//! - Drawing the recommendation page in the terminal

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod form;
mod presenter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the rendered page.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
