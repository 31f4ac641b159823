//! Command-line interface for flightdesk.
//!
//! This module provides the CLI structure and the interactive menu for the
//! `fdesk` binary. The menu is the only caller of the reservation core; it
//! turns each result into text and never holds state of its own.

mod commands;
mod menu;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, FlightsCommand, OutputFormat};
pub use menu::{Menu, MenuChoice};

/// fdesk - Flight reservation desk
///
/// Keeps an in-memory registry of flights and their seats, and lets you book,
/// inspect and cancel seats from an interactive menu.
#[derive(Debug, Parser)]
#[command(name = "fdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Default, Subcommand)]
pub enum Command {
    /// Run the interactive reservation menu
    #[default]
    Menu,

    /// List the configured flights and exit
    Flights(FlightsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "fdesk");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_no_subcommand_defaults_to_menu() {
        let cli = Cli::try_parse_from(["fdesk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Menu));
    }

    #[test]
    fn test_parse_menu() {
        let cli = Cli::try_parse_from(["fdesk", "menu"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Menu)));
    }

    #[test]
    fn test_parse_flights_json() {
        let cli = Cli::try_parse_from(["fdesk", "flights", "--format", "json"]).unwrap();
        match cli.command {
            Some(Command::Flights(cmd)) => assert_eq!(cmd.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["fdesk", "config", "validate", "--file", "/tmp/x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Validate { file: Some(_) }))
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["fdesk", "-c", "/custom/config.toml", "flights"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let cli = Cli::try_parse_from(["fdesk", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_with_quiet() {
        let cli = Cli::try_parse_from(["fdesk", "-q", "menu"]).unwrap();
        assert!(cli.quiet);
    }
}
