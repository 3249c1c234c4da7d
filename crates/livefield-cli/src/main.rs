mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "livefield")]
#[command(version, about = "Livefield - headless form validation demo", long_about = None)]
struct Cli {
    /// Config file (defaults to ./livefield.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script against the registration form
    Run {
        /// Script file; reads stdin when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registration form's validation rules
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => livefield::Config::load(path)?,
        None => livefield::Config::load_default()?,
    };
    commands::init_tracing(&config);

    match cli.command {
        Commands::Run { script, json } => {
            commands::run::execute(&config, script.as_deref(), json)?;
        }
        Commands::Rules => {
            commands::rules::execute();
        }
    }

    Ok(())
}
