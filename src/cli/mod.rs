//! CLI Module
//!
//! Command-line interface for the line broadening engine.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linebroad - Doppler widths and damping parameters for spectral lines
#[derive(Parser, Debug)]
#[command(name = "linebroad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Broaden a line list over a model atmosphere
    #[command(name = "broaden")]
    Broaden {
        /// Model atmosphere (JSON)
        #[arg(short, long)]
        atmosphere: PathBuf,

        /// Line list (JSON array)
        #[arg(short, long)]
        lines: PathBuf,

        /// Broadening configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// van der Waals enhancement factor; overrides the configuration
        #[arg(short, long)]
        enhancement: Option<f64>,

        /// Where to write the broadened line list
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the broadening regime chosen for each line
    #[command(name = "classify")]
    Classify {
        /// Line list (JSON array)
        #[arg(short, long)]
        lines: PathBuf,
    },

    /// Interpolate an ABO cross-section table
    #[command(name = "lookup")]
    Lookup {
        /// Table to query
        #[arg(short, long, value_parser = ["sp", "pd", "df"])]
        table: String,

        /// Effective quantum number of the lower level
        #[arg(long)]
        low: f64,

        /// Effective quantum number of the upper level
        #[arg(long)]
        high: f64,

        /// Orbital momentum of the lower level (defaults to the table's row orbital)
        #[arg(long)]
        l_low: Option<u8>,

        /// Orbital momentum of the upper level (defaults to the table's column orbital)
        #[arg(long)]
        l_high: Option<u8>,

        /// Core charge of the species
        #[arg(long, default_value_t = 1.0)]
        charge: f64,
    },
}
