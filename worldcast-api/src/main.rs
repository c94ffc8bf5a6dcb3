//! worldcast API server binary.
//!
//! Serves the world geography dataset over HTTP.

use std::env;
use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worldcast_api::{ServerError, config::ApiConfig, start_server};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldcast_core=info,worldcast_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ApiConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        ApiConfig::default()
    };

    start_server(config).await
}

fn print_help() {
    println!("worldcast-api - World Geography REST API");
    println!();
    println!("USAGE:");
    println!("    worldcast-api [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 8000)");
    println!();
}
