//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod generate;
mod locate;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, Config};
use crate::logging;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// charsheet - Generate the cast sprite sheets
#[derive(Parser)]
#[command(name = "charsheet")]
#[command(about = "charsheet - Generate pixel-art character sprite sheets")]
#[command(version)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the generating commands
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory to write the sheets to (default: public)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// TOML file overriding the built-in tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip writing the JSON atlas next to each sheet
    #[arg(long)]
    pub no_atlas: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the cast from rectangles and write both sheets
    Redraw {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Tint and decorate tiles from a reference sheet and write both sheets
    Tinted {
        /// Reference sprite sheet (default: the Kenney roguelike characters sheet)
        #[arg(short, long)]
        source: Option<PathBuf>,

        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Show where an agent's sprite for a pose lives on the sheets
    Locate {
        /// Agent identifier, e.g. "main" or "02-threat-hunter"
        agent_id: String,

        /// Pose name: idle, typing, thinking, walk1, walk2 or sleeping
        pose: String,

        /// TOML file overriding the built-in tables
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Redraw { args } => generate::run_redraw(&args),
        Commands::Tinted { source, args } => generate::run_tinted(source.as_deref(), &args),
        Commands::Locate { agent_id, pose, config } => {
            locate::run_locate(&agent_id, &pose, config.as_deref())
        }
    }
}

/// Load the configuration for a command, reporting failures on stderr.
pub(crate) fn load_or_report(path: Option<&Path>) -> Result<Config, ExitCode> {
    load_config(path).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}
