//! Main CLI application structure

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::args::SolverArgs;
use super::output::{Output, OutputFormat};
use super::show;
use crate::capability::gurobi_enabled;
use crate::domain::OptionId;
use crate::storage::{read_global, write_global};

#[derive(Parser)]
#[command(name = "solver-opts")]
#[command(author, version, about = "Inspect the solver's option registry")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub solver: SolverArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every option with its current value
    Show,

    /// Show one option
    Get {
        /// Option name (e.g. num-workers, split-strategy, gamma)
        option: OptionId,
    },

    /// Show the strategies resolved from the current options
    Strategies,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("solver-opts starting");

    // Configuration phase: every write happens before the first read
    {
        let mut options = write_global();
        cli.solver
            .apply(&mut options, &output)
            .context("Failed to apply command-line options")?;
    }

    let options = read_global();

    match cli.command {
        Commands::Show => show::all(&options, &output),
        Commands::Get { option } => show::one(&options, &output, option)?,
        Commands::Strategies => show::strategies(&options, &output, gurobi_enabled()),
    }

    Ok(())
}
