//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::{info, warn};

use crate::atmosphere::AtmosphereModel;
use crate::broadening::{broaden_all, BroadeningSummary};
use crate::config::BroadeningConfig;
use crate::error::{BroadeningError, Result};
use crate::line::{load_lines, save_lines};
use crate::regime::{classify, Classification, Regime};
use crate::tables::{table_by_name, TableLookup};

/// Broaden every line of `lines` over `atmosphere` and write the result.
///
/// # Arguments
/// * `atmosphere` - Model atmosphere JSON
/// * `lines` - Line list JSON
/// * `config` - Optional configuration JSON; defaults apply when absent
/// * `enhancement` - Overrides the configured van der Waals enhancement
/// * `output` - Destination of the broadened line list
pub fn broaden(
    atmosphere: &Path,
    lines: &Path,
    config: Option<&Path>,
    enhancement: Option<f64>,
    output: &Path,
) -> Result<BroadeningSummary> {
    info!("Loading atmosphere: {}", atmosphere.display());
    let model = AtmosphereModel::load(atmosphere)?;

    info!("Loading line list: {}", lines.display());
    let mut records = load_lines(lines)?;

    let mut config = match config {
        Some(path) => BroadeningConfig::load(path)?,
        None => BroadeningConfig::default(),
    };
    if let Some(factor) = enhancement {
        config.enhancement_factor = factor;
    }

    let summary = broaden_all(&mut records, &model, &config)?;
    save_lines(output, &records)?;

    println!(
        "Broadened {} of {} lines over {} depths -> {}",
        summary.broadened(),
        summary.lines,
        summary.depth_count,
        output.display()
    );
    for regime in Regime::ALL {
        let count = summary.count(regime);
        if count > 0 {
            println!("  {:<24} {count}", regime.label());
        }
    }
    if summary.table_fallbacks > 0 {
        println!("  table fallbacks          {}", summary.table_fallbacks);
    }
    for failure in &summary.failures {
        println!(
            "  failed line {:>5} {:>12.3} [{}] {}",
            failure.index, failure.wavelength, failure.code, failure.message
        );
    }

    Ok(summary)
}

/// Classify every line of a line list and print one row per line.
pub fn classify_lines(lines: &Path) -> Result<Vec<Classification>> {
    info!("Classifying line list: {}", lines.display());
    let records = load_lines(lines)?;

    let mut classes = Vec::with_capacity(records.len());
    for (index, line) in records.iter().enumerate() {
        let class = classify(line).map_err(|e| BroadeningError::LineFailed {
            index,
            wavelength: line.wavelength,
            source: Box::new(e),
        })?;

        let constants = match class.regime {
            Regime::Abo => format!("sigma={:.3} alpha={:.4}", class.sigma, class.alpha),
            _ if class.c6 > 0.0 => format!("C6={:.4e}", class.c6),
            _ => String::new(),
        };
        println!(
            "{index:>5} {:>12.3} {:>7.2} {:>3} {:<24} n*=({:.3}, {:.3}) {constants}",
            line.wavelength,
            line.species.code(),
            line.transition.to_string(),
            class.regime.label(),
            class.n_eff_low,
            class.n_eff_high,
        );
        if class.table_fell_back() {
            warn!("Line {index}: table lookup fell back to Unsöld");
        }
        classes.push(class);
    }

    Ok(classes)
}

/// Interpolate one of the ABO tables at a single point.
pub fn lookup(
    table: &str,
    low: f64,
    high: f64,
    l_low: Option<u8>,
    l_high: Option<u8>,
    charge: f64,
) -> Result<TableLookup> {
    let grid = table_by_name(table).ok_or_else(|| BroadeningError::InvalidConfig {
        reason: format!("unknown table '{table}', expected sp, pd or df"),
    })?;

    let l_low = l_low.unwrap_or(grid.row_orbital);
    let l_high = l_high.unwrap_or(grid.column_orbital);
    let result = grid.interpolate(low, high, l_low, l_high, charge);

    match result {
        TableLookup::Interpolated { sigma, alpha } => {
            println!("{} table: sigma = {sigma:.4}, alpha = {alpha:.5}", grid.name);
        }
        TableLookup::OutOfRange => {
            println!("{} table: n* = ({low}, {high}) out of range (status 0)", grid.name);
        }
        TableLookup::IonizedSpecies => {
            println!("{} table: charge {charge} not tabulated (status 2)", grid.name);
        }
    }

    Ok(result)
}
