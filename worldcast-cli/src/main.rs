//! Binary crate for the `worldcast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the core fetch pipeline
//! - Human-friendly report output

use clap::Parser;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldcast_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cmd = cli::Cli::parse();
    if let Err(e) = cmd.run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
