//! Linebroad CLI - Spectral Line Broadening
//!
//! Command-line interface for the line broadening engine.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use linebroad::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Linebroad v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Linebroad v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Broaden {
            atmosphere,
            lines,
            config,
            enhancement,
            output,
        } => {
            commands::broaden(&atmosphere, &lines, config.as_deref(), enhancement, &output)
                .with_context(|| format!("broadening {} failed", lines.display()))?;
        }
        Commands::Classify { lines } => {
            commands::classify_lines(&lines)
                .with_context(|| format!("classifying {} failed", lines.display()))?;
        }
        Commands::Lookup {
            table,
            low,
            high,
            l_low,
            l_high,
            charge,
        } => {
            commands::lookup(&table, low, high, l_low, l_high, charge)?;
        }
    }
    Ok(())
}
