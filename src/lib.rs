//! Linebroad - Spectral Line Broadening
//!
//! Computes, for every depth of a stellar model atmosphere, the Doppler
//! width and Voigt damping parameter of each line in a line list.
//!
//! # Architecture
//!
//! The computation runs in three stages per line:
//! - Classification: pick a broadening regime and resolve its constants
//!   (effective quantum numbers, ABO cross-sections from the s–p, p–d and
//!   d–f tables, or the Unsöld `C6`)
//! - Per-depth evaluation: radiative, Stark and van der Waals damping at
//!   every layer of the atmosphere
//! - Combination into the damping parameter `a`
//!
//! Lines are independent; [`broaden_all`] processes a line list serially or
//! over the rayon thread pool.

pub mod atmosphere;
pub mod broadening;
pub mod cli;
pub mod config;
pub mod error;
pub mod gamma;
pub mod line;
pub mod regime;
pub mod tables;

pub use atmosphere::{AtmosphereModel, DepthLayer};
pub use broadening::{
    broaden, broaden_all, evaluate_depth, BroadeningSummary, DepthBroadening, LineFailure,
};
pub use config::BroadeningConfig;
pub use error::{BroadeningError, Result};
pub use gamma::ln_gamma;
pub use line::{load_lines, save_lines, LineRecord, Species, TransitionTag};
pub use regime::{classify, Classification, Regime};
pub use tables::{InterpolationTable, TableLookup, DF_TABLE, PD_TABLE, SP_TABLE};
