//! `fdesk` - CLI for flightdesk
//!
//! This binary seeds the flight index from configuration and runs the
//! interactive reservation menu on stdin/stdout.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use flightdesk::cli::{Cli, Command, ConfigCommand, Menu, OutputFormat};
use flightdesk::{init_logging, Config, ReservationSystem};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Execute the command
    match cli.command.unwrap_or_default() {
        Command::Menu => handle_menu(&config),
        Command::Flights(cmd) => handle_flights(&config, cmd.format),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_menu(config: &Config) -> anyhow::Result<()> {
    let mut system = ReservationSystem::from_config(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock())
        .run(&mut system)
        .context("menu session failed")?;
    Ok(())
}

fn handle_flights(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let system = ReservationSystem::from_config(config);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&system.summaries())?);
        }
        OutputFormat::Plain => {
            println!("Available Flights:");
            for summary in system.summaries() {
                println!("{summary}");
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Fleet]");
                println!("  Flights:            {}", config.fleet.flights.len());
                for seed in &config.fleet.flights {
                    println!("  {:<8}            {} seats", seed.number, seed.seats);
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
