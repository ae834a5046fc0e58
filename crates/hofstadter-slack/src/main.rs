//! Hofstadter Slack Service CLI
//!
//! Starts the HTTP server that answers the delay-estimator slash command.

use hofstadter_slack::{config::SlackConfig, start_server, ServiceError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServiceError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        SlackConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        // Every field has a default, so no config file is required
        SlackConfig::default()
    };

    // Start the server
    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Hofstadter - Contextual Delay Estimator Slash Command");
    println!();
    println!("USAGE:");
    println!("    hofstadter-slack [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    hofstadter-slack --config config/slack.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8080)");
    println!();
    println!("    Both fields are optional; without a config file the service");
    println!("    listens on 127.0.0.1:8080.");
    println!();
}
