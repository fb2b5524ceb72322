//! Graft CLI - Main entry point

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use graft_cli::config::{CONFIG_FILE, Config};
use graft_cli::error::CliError;
use graft_cli::output;

/// Graft - typed GraphQL model accessor generator
#[derive(Parser, Debug)]
#[command(name = "graft")]
#[command(author, version, about = "Model accessor generator for graft", long_about = None)]
struct Cli {
    /// Path to config file (default: graft.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a starter graft.toml
    Init,

    /// Validate configuration file
    Check,

    /// Generate accessors for the given types and their relations
    Generate {
        /// Comma-separated type names (default: every declared model)
        #[arg(short, long, value_delimiter = ',')]
        types: Vec<String>,

        /// Override the configured output file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Init => {
            let path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            graft_cli::commands::init::run(&path)
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref())?;
            graft_cli::commands::check::run(&config)
        }
        Command::Generate { types, output } => {
            let config = load_config(cli.config.as_deref())?;
            graft_cli::commands::generate::run(&config, &types, output.as_deref())
        }
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}
