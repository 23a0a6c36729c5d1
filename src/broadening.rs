//! Per-Depth Broadening Evaluator
//!
//! For every depth of the atmosphere, computes the Doppler width of a line
//! and its Voigt damping parameter
//!
//! ```text
//! a = (γ_rad + γ_vdW + γ_Stark) · λ · 1e-8 / (4π · Δν_D)
//! ```
//!
//! using the regime and constants resolved by [`crate::regime::classify`].
//! Lines are independent of each other, so [`broaden_all`] may spread them
//! over the rayon thread pool; the atmosphere is shared read-only.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::atmosphere::{AtmosphereModel, DepthLayer};
use crate::config::BroadeningConfig;
use crate::error::{BroadeningError, Result};
use crate::gamma::ln_gamma;
use crate::line::LineRecord;
use crate::regime::{classify, Classification, Regime};

// ============================================================================
// Constants
// ============================================================================

/// `2k / m_H` in cgs: thermal Doppler velocity² per unit `T / mass`.
pub const DOPPLER_COEFFICIENT: f64 = 1.6631e8;

/// `8k / (π m_H)`: mean relative velocity² per unit `T / reduced mass`.
const RELATIVE_VELOCITY_COEFFICIENT: f64 = 2.1175e8;

/// Inverse perturber (hydrogen) mass in amu⁻¹.
const INVERSE_HYDROGEN_MASS: f64 = 0.9921;

/// Classical radiative damping `γ = 2.223e15 / λ²` (λ in Å).
const CLASSICAL_RADIATIVE_COEFFICIENT: f64 = 2.223e15;

/// Reference velocity of the ABO cross-sections (cm/s).
const ABO_REFERENCE_VELOCITY: f64 = 1.0e6;

/// Bohr radius squared (cm²), converting ABO cross-sections to cgs.
const ABO_CROSS_SECTION_UNIT: f64 = 2.8003e-17;

/// `ln(4/π)` term of the ABO line-width integral.
const ABO_ALPHA_TERM: f64 = 0.24156448;

/// Unsöld van der Waals prefactor.
const UNSOLD_PREFACTOR: f64 = 8.08;

/// Reference temperature of literal van der Waals constants (K).
const LITERAL_VDW_TEMPERATURE: f64 = 10_000.0;

/// Temperature exponent of literal van der Waals constants.
const LITERAL_VDW_EXPONENT: f64 = 0.3;

/// Quadratic Stark coefficient applied to `n*_high⁵`.
const STARK_COEFFICIENT: f64 = 1.0e-8;

const MOLECULAR_VDW_COEFFICIENT: f64 = 1.0e-7;
const MOLECULAR_STARK_COEFFICIENT: f64 = 1.0e-5;

/// `4π` as used in the damping parameter denominator.
const FOUR_PI: f64 = 12.5636;

const ANGSTROM_TO_CM: f64 = 1.0e-8;

/// Value of the disabled first-order quasistatic correction.
pub const QUASISTATIC_CORRECTION: f64 = 1.0;

// ============================================================================
// Per-depth Results
// ============================================================================

/// Broadening of one line at one depth, broken down by mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthBroadening {
    /// Doppler width (cm/s).
    pub doppler: f64,
    pub radiative: f64,
    pub van_der_waals: f64,
    pub stark: f64,
    /// Voigt damping parameter `a`.
    pub damping: f64,
}

/// Depth-independent quantities of a line, computed once per line.
#[derive(Debug, Clone, Copy)]
struct LineConstants {
    radiative: f64,
    /// `ln` of the ABO width prefactor; 0 outside the ABO regime.
    abo_ln_width: f64,
    /// `C6^0.4`; 0 when no Unsöld regime applies.
    c6_pow: f64,
    /// `n*_high⁵` for the Stark formula.
    n_high5: f64,
}

impl LineConstants {
    fn resolve(line: &LineRecord, class: &Classification) -> Self {
        let classical = CLASSICAL_RADIATIVE_COEFFICIENT / (line.wavelength * line.wavelength);
        let radiative = match class.regime {
            Regime::Autoionizing => 0.0,
            regime if regime.literal_radiative(line) => line.gamma_radiative,
            _ => classical,
        };

        let abo_ln_width = match class.regime {
            Regime::Abo => {
                (class.alpha / 2.0) * ABO_ALPHA_TERM
                    + ln_gamma((4.0 - class.alpha) / 2.0)
                    + class.sigma.ln()
            }
            _ => 0.0,
        };

        Self {
            radiative,
            abo_ln_width,
            c6_pow: class.c6.powf(0.4),
            n_high5: class.n_eff_high.powi(5),
        }
    }
}

/// Doppler width `sqrt(2kT/m + ξ²)` in cm/s.
///
/// # Arguments
/// * `temperature` - Kinetic temperature (K)
/// * `atomic_mass` - Mass of the absorber (amu)
/// * `microturbulence` - Microturbulent velocity (cm/s)
#[inline]
pub fn doppler_width(temperature: f64, atomic_mass: f64, microturbulence: f64) -> f64 {
    (DOPPLER_COEFFICIENT * temperature / atomic_mass + microturbulence * microturbulence).sqrt()
}

/// Mean relative velocity of absorber and hydrogen perturber (cm/s).
#[inline]
fn relative_velocity(temperature: f64, atomic_mass: f64) -> f64 {
    (RELATIVE_VELOCITY_COEFFICIENT * temperature * (1.0 / atomic_mass + INVERSE_HYDROGEN_MASS))
        .sqrt()
}

fn van_der_waals(
    line: &LineRecord,
    class: &Classification,
    constants: &LineConstants,
    layer: &DepthLayer,
    enhancement: f64,
) -> f64 {
    let nh = layer.hydrogen_density;
    match class.regime {
        Regime::LiteralGamma => {
            line.gamma_van_der_waals
                * nh
                * (layer.temperature / LITERAL_VDW_TEMPERATURE).powf(LITERAL_VDW_EXPONENT)
                * layer.perturber_factor()
        }
        Regime::Abo => {
            let v = relative_velocity(layer.temperature, line.atomic_mass);
            let ln_width = constants.abo_ln_width
                + ABO_REFERENCE_VELOCITY.ln()
                + (1.0 - class.alpha) * (v / ABO_REFERENCE_VELOCITY).ln();
            2.0 * enhancement * ABO_CROSS_SECTION_UNIT * ln_width.exp() * nh * layer.perturber_factor()
        }
        Regime::Unsold
        | Regime::GenericFallback
        | Regime::LiteralRadiativeStark
        | Regime::LiteralRadiative
        | Regime::LiteralExhausted => {
            let v = relative_velocity(layer.temperature, line.atomic_mass);
            UNSOLD_PREFACTOR * enhancement * constants.c6_pow * v.powf(0.6) * nh * layer.perturber_factor()
        }
        Regime::Molecular => MOLECULAR_VDW_COEFFICIENT * nh,
        Regime::Autoionizing => 0.0,
    }
}

fn stark(line: &LineRecord, class: &Classification, constants: &LineConstants, layer: &DepthLayer) -> f64 {
    let ne = layer.electron_density;
    match class.regime {
        Regime::Molecular => MOLECULAR_STARK_COEFFICIENT * ne,
        Regime::Autoionizing => 0.0,
        regime if regime.literal_stark(line) => line.gamma_stark * ne,
        _ => STARK_COEFFICIENT * constants.n_high5 * ne,
    }
}

fn evaluate(
    line: &LineRecord,
    class: &Classification,
    constants: &LineConstants,
    layer: &DepthLayer,
    enhancement: f64,
) -> DepthBroadening {
    let doppler = doppler_width(layer.temperature, line.atomic_mass, layer.microturbulence);
    if class.regime == Regime::Autoionizing {
        return DepthBroadening {
            doppler,
            radiative: 0.0,
            van_der_waals: 0.0,
            stark: 0.0,
            damping: 0.0,
        };
    }

    let radiative = constants.radiative;
    let van_der_waals = van_der_waals(line, class, constants, layer, enhancement);
    let stark = stark(line, class, constants, layer);
    let damping = (radiative + van_der_waals + stark) * line.wavelength * ANGSTROM_TO_CM / (FOUR_PI * doppler);

    DepthBroadening {
        doppler,
        radiative,
        van_der_waals,
        stark,
        damping,
    }
}

/// Broadening breakdown of a classified line at a single depth.
///
/// For autoionizing lines only `doppler` is meaningful; the damping terms
/// are reported as zero.
pub fn evaluate_depth(
    line: &LineRecord,
    class: &Classification,
    layer: &DepthLayer,
    enhancement_factor: f64,
) -> DepthBroadening {
    let constants = LineConstants::resolve(line, class);
    evaluate(line, class, &constants, layer, enhancement_factor)
}

// ============================================================================
// Line Broadening
// ============================================================================

/// Classify a line and fill its per-depth arrays; assumes validated inputs.
///
/// The arrays are only written once every depth has been evaluated, so a
/// failing line keeps its previous outputs.
fn broaden_line(
    line: &mut LineRecord,
    atmosphere: &AtmosphereModel,
    enhancement: f64,
) -> Result<Classification> {
    line.validate()?;
    let class = classify(line)?;
    let depth_count = atmosphere.depth_count();

    if class.regime == Regime::Autoionizing {
        line.prepare_outputs(depth_count);
        for (depth, layer) in atmosphere.layers().iter().enumerate() {
            line.doppler[depth] =
                doppler_width(layer.temperature, line.atomic_mass, layer.microturbulence);
        }
        return Ok(class);
    }

    let constants = LineConstants::resolve(line, &class);
    let mut doppler = Vec::with_capacity(depth_count);
    let mut damping = Vec::with_capacity(depth_count);
    for (depth, layer) in atmosphere.layers().iter().enumerate() {
        let result = evaluate(line, &class, &constants, layer, enhancement);
        if !result.damping.is_finite() {
            return Err(BroadeningError::domain(
                "damping",
                result.damping,
                format!("line at {} Å, depth {depth}, regime {}", line.wavelength, class.regime),
            ));
        }
        doppler.push(result.doppler);
        damping.push(result.damping);
    }

    line.doppler = doppler;
    line.damping = damping;
    line.quasistatic = vec![QUASISTATIC_CORRECTION; depth_count];
    Ok(class)
}

/// Broaden a single line over every depth of the atmosphere.
///
/// Fills `line.doppler`, `line.damping` and `line.quasistatic` with one entry
/// per depth. Autoionizing lines only get their Doppler widths; their damping
/// values are left as the caller set them.
///
/// # Returns
/// The classification that drove the computation.
pub fn broaden(
    line: &mut LineRecord,
    atmosphere: &AtmosphereModel,
    config: &BroadeningConfig,
) -> Result<Classification> {
    config.validate()?;
    atmosphere.validate()?;
    broaden_line(line, atmosphere, config.enhancement_factor)
}

// ============================================================================
// Batch Broadening
// ============================================================================

/// A line that could not be broadened in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineFailure {
    /// Position of the line in the batch.
    pub index: usize,
    pub wavelength: f64,
    /// [`BroadeningError::error_code`] of the underlying error.
    pub code: &'static str,
    pub message: String,
}

impl LineFailure {
    fn new(index: usize, wavelength: f64, error: &BroadeningError) -> Self {
        Self {
            index,
            wavelength,
            code: error.error_code(),
            message: error.to_string(),
        }
    }
}

/// Per-regime statistics of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BroadeningSummary {
    /// Lines in the batch, failed ones included.
    pub lines: usize,
    pub depth_count: usize,
    /// Successfully broadened lines per regime.
    pub regime_counts: BTreeMap<Regime, usize>,
    /// Table lookups that fell back to Unsöld (status 0 or 2).
    pub table_fallbacks: usize,
    /// Lines left unmodified because broadening failed, in batch order.
    pub failures: Vec<LineFailure>,
}

impl BroadeningSummary {
    fn record(&mut self, class: &Classification) {
        *self.regime_counts.entry(class.regime).or_insert(0) += 1;
        if class.table_fell_back() {
            self.table_fallbacks += 1;
        }
    }

    /// Number of lines broadened under `regime`.
    pub fn count(&self, regime: Regime) -> usize {
        self.regime_counts.get(&regime).copied().unwrap_or(0)
    }

    /// Number of lines that were broadened.
    pub fn broadened(&self) -> usize {
        self.lines - self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Broaden every line of a line list.
///
/// Each line is processed independently; with `config.parallel` and a batch
/// of at least `config.parallel_threshold` lines, lines are distributed over
/// the rayon thread pool. A line that fails (bad attributes, unusable
/// constants, non-finite damping) is left untouched and reported in
/// [`BroadeningSummary::failures`]; the rest of the batch is still broadened.
///
/// # Errors
/// Only an invalid configuration or atmosphere fails the whole call.
pub fn broaden_all(
    lines: &mut [LineRecord],
    atmosphere: &AtmosphereModel,
    config: &BroadeningConfig,
) -> Result<BroadeningSummary> {
    config.validate()?;
    atmosphere.validate()?;

    let enhancement = config.enhancement_factor;
    let run = |index: usize, line: &mut LineRecord| {
        broaden_line(line, atmosphere, enhancement)
            .map_err(|e| LineFailure::new(index, line.wavelength, &e))
    };

    let outcomes: Vec<std::result::Result<Classification, LineFailure>> =
        if config.runs_parallel(lines.len()) {
            debug!("Broadening {} lines in parallel", lines.len());
            lines
                .par_iter_mut()
                .enumerate()
                .map(|(index, line)| run(index, line))
                .collect()
        } else {
            lines
                .iter_mut()
                .enumerate()
                .map(|(index, line)| run(index, line))
                .collect()
        };

    let mut summary = BroadeningSummary {
        lines: outcomes.len(),
        depth_count: atmosphere.depth_count(),
        ..BroadeningSummary::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(class) => summary.record(&class),
            Err(failure) => {
                warn!(
                    "Line {} ({:.3} Å) not broadened: {}",
                    failure.index, failure.wavelength, failure.message
                );
                summary.failures.push(failure);
            }
        }
    }

    info!(
        "Broadened {} of {} lines over {} depths ({} table fallbacks)",
        summary.broadened(),
        summary.lines,
        summary.depth_count,
        summary.table_fallbacks
    );
    Ok(summary)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layer(temperature: f64) -> DepthLayer {
        DepthLayer {
            temperature,
            microturbulence: 2.0e5,
            electron_density: 3.0e13,
            hydrogen_density: 5.0e16,
            helium_density: 4.0e15,
            h2_density: 2.0e13,
        }
    }

    fn atmosphere() -> AtmosphereModel {
        AtmosphereModel::new(vec![layer(4000.0), layer(5000.0), layer(6500.0)]).unwrap()
    }

    fn fe_line(tag: &str) -> LineRecord {
        LineRecord::new(5000.0, 26.0, tag, 7.9, 1.9, 4.5, 55.85)
    }

    #[test]
    fn test_doppler_width() {
        let expected = (1.6631e8_f64 * 5000.0 / 55.85 + 2.0e5 * 2.0e5).sqrt();
        assert_relative_eq!(doppler_width(5000.0, 55.85, 2.0e5), expected, max_relative = 1e-14);
    }

    #[test]
    fn test_doppler_monotonic_in_temperature() {
        let mut previous = 0.0;
        for t in [3000.0, 4000.0, 5000.0, 8000.0, 12000.0] {
            let w = doppler_width(t, 55.85, 1.0e5);
            assert!(w >= previous);
            previous = w;
        }
    }

    #[test]
    fn test_molecular_damping_terms() {
        let line = LineRecord::new(6000.0, 112.0, "01", 0.0, 0.0, 0.0, 25.0);
        let class = classify(&line).unwrap();
        let l = layer(5000.0);
        let result = evaluate_depth(&line, &class, &l, 2.5);

        assert_eq!(result.van_der_waals, 1.0e-7 * l.hydrogen_density);
        assert_eq!(result.stark, 1.0e-5 * l.electron_density);
        assert_relative_eq!(result.radiative, 2.223e15 / (6000.0 * 6000.0), max_relative = 1e-14);
    }

    #[test]
    fn test_unsold_van_der_waals() {
        let line = fe_line("99");
        let class = classify(&line).unwrap();
        let l = layer(5000.0);
        let result = evaluate_depth(&line, &class, &l, 1.5);

        let v = (2.1175e8_f64 * 5000.0 * (1.0 / 55.85 + 0.9921)).sqrt();
        let expected = 8.08 * 1.5 * class.c6.powf(0.4) * v.powf(0.6) * l.hydrogen_density * l.perturber_factor();
        assert_relative_eq!(result.van_der_waals, expected, max_relative = 1e-12);
        assert_relative_eq!(result.stark, 1.0e-8 * class.n_eff_high.powi(5) * l.electron_density, max_relative = 1e-12);
    }

    #[test]
    fn test_abo_van_der_waals() {
        let line = fe_line("01").with_abo_constants(300.0, 0.25);
        let class = classify(&line).unwrap();
        let l = layer(5000.0);
        let result = evaluate_depth(&line, &class, &l, 1.0);

        let v = (2.1175e8_f64 * 5000.0 * (1.0 / 55.85 + 0.9921)).sqrt();
        let omara = 0.125 * 0.24156448 + ln_gamma(1.875) + 300.0_f64.ln();
        let ln_w = omara + 1.0e6_f64.ln() + 0.75 * (v / 1.0e6).ln();
        let expected = 2.0 * 2.8003e-17 * ln_w.exp() * l.hydrogen_density * l.perturber_factor();
        assert_relative_eq!(result.van_der_waals, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_literal_gamma_van_der_waals_scaling() {
        let line = fe_line("GA").with_gammas(1.0e8, 1.0e-6, 1.0e-8);
        let class = classify(&line).unwrap();
        let l = layer(10_000.0);
        let result = evaluate_depth(&line, &class, &l, 3.0);

        // At 10^4 K the temperature factor is exactly 1; no enhancement.
        assert_relative_eq!(
            result.van_der_waals,
            1.0e-8 * l.hydrogen_density * l.perturber_factor(),
            max_relative = 1e-14
        );
        assert_eq!(result.radiative, 1.0e8);
        assert_eq!(result.stark, 1.0e-6 * l.electron_density);
    }

    #[test]
    fn test_damping_combination() {
        let line = fe_line("01");
        let class = classify(&line).unwrap();
        let result = evaluate_depth(&line, &class, &layer(5000.0), 1.0);
        let expected = (result.radiative + result.van_der_waals + result.stark) * 5000.0 * 1.0e-8
            / (12.5636 * result.doppler);
        assert_relative_eq!(result.damping, expected, max_relative = 1e-14);
        assert!(result.damping > 0.0);
    }

    #[test]
    fn test_enhancement_scales_van_der_waals_only() {
        let line = fe_line("01");
        let class = classify(&line).unwrap();
        let base = evaluate_depth(&line, &class, &layer(5000.0), 1.0);
        let doubled = evaluate_depth(&line, &class, &layer(5000.0), 2.0);
        assert_relative_eq!(doubled.van_der_waals, 2.0 * base.van_der_waals, max_relative = 1e-12);
        assert_eq!(doubled.radiative, base.radiative);
        assert_eq!(doubled.stark, base.stark);
    }

    #[test]
    fn test_broaden_fills_arrays() {
        let atm = atmosphere();
        let mut line = fe_line("01");
        let class = broaden(&mut line, &atm, &BroadeningConfig::default()).unwrap();

        assert_eq!(class.regime, Regime::Abo);
        assert_eq!(line.doppler.len(), 3);
        assert_eq!(line.damping.len(), 3);
        assert_eq!(line.quasistatic, vec![1.0; 3]);
        assert!(line.damping.iter().all(|&a| a > 0.0));
    }

    #[test]
    fn test_broaden_autoionizing_keeps_damping() {
        let atm = atmosphere();
        let mut line = fe_line("AI");
        line.damping = vec![0.11, 0.22, 0.33];
        broaden(&mut line, &atm, &BroadeningConfig::default()).unwrap();

        assert_eq!(line.damping, vec![0.11, 0.22, 0.33]);
        assert!(line.doppler.iter().all(|&d| d > 0.0));
    }

    #[test]
    fn test_broaden_rejects_invalid_line() {
        let atm = atmosphere();
        let mut line = LineRecord::new(-1.0, 26.0, "01", 7.9, 1.9, 4.5, 55.85);
        let err = broaden(&mut line, &atm, &BroadeningConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_DOMAIN");
    }

    #[test]
    fn test_broaden_all_summary() {
        let atm = atmosphere();
        let mut lines = vec![
            fe_line("01"),
            fe_line("99"),
            fe_line("GA").with_gammas(1.0e8, 1.0, 1.0),
            fe_line("AI"),
            LineRecord::new(6000.0, 112.0, "01", 0.0, 0.0, 0.0, 25.0),
        ];
        let summary = broaden_all(&mut lines, &atm, &BroadeningConfig::default()).unwrap();

        assert_eq!(summary.lines, 5);
        assert_eq!(summary.depth_count, 3);
        assert_eq!(summary.count(Regime::Abo), 1);
        assert_eq!(summary.count(Regime::GenericFallback), 1);
        assert_eq!(summary.count(Regime::LiteralRadiative), 1);
        assert_eq!(summary.count(Regime::Autoionizing), 1);
        assert_eq!(summary.count(Regime::Molecular), 1);
        assert_eq!(summary.table_fallbacks, 0);
    }

    #[test]
    fn test_broaden_all_reports_failing_index() {
        let atm = atmosphere();
        let mut lines = vec![fe_line("01"), LineRecord::new(5000.0, 26.0, "01", 7.9, 1.9, 4.5, -3.0)];
        let summary = broaden_all(&mut lines, &atm, &BroadeningConfig::default()).unwrap();

        assert_eq!(summary.lines, 2);
        assert_eq!(summary.broadened(), 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].index, 1);
        assert_eq!(summary.failures[0].code, "NUMERIC_DOMAIN");
    }

    #[test]
    fn test_failing_line_mid_batch_does_not_stop_the_rest() {
        let atm = atmosphere();
        // p→d pair off the p–d grid: the Unsöld radius of the d level is
        // smaller than that of the p level, so C6 is negative.
        let rydberg = LineRecord::new(8000.0, 26.0, "12", 7.9, 7.05031, 7.07113, 55.85);
        let mut lines = vec![fe_line("01"), rydberg, fe_line("01")];
        lines[1].damping = vec![0.25; 3];

        let summary = broaden_all(&mut lines, &atm, &BroadeningConfig::default()).unwrap();

        assert!(summary.has_failures());
        assert_eq!(summary.failures[0].index, 1);
        assert_eq!(summary.count(Regime::Abo), 2);
        assert_eq!(lines[0].damping.len(), 3);
        assert_eq!(lines[2].damping.len(), 3);
        assert!(lines[2].damping.iter().all(|&a| a > 0.0));
        assert_eq!(lines[1].damping, vec![0.25; 3]);
        assert!(lines[1].doppler.is_empty());
    }

    #[test]
    fn test_failure_reporting_matches_in_parallel() {
        let atm = atmosphere();
        let mut lines: Vec<LineRecord> = (0..10).map(|_| fe_line("01")).collect();
        lines[4].atomic_mass = 0.0;
        lines[7].wavelength = f64::NAN;
        let config = BroadeningConfig {
            parallel_threshold: 1,
            ..BroadeningConfig::default()
        };

        let summary = broaden_all(&mut lines, &atm, &config).unwrap();
        let failed: Vec<usize> = summary.failures.iter().map(|f| f.index).collect();
        assert_eq!(failed, vec![4, 7]);
        assert_eq!(summary.broadened(), 8);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let atm = atmosphere();
        let template: Vec<LineRecord> = (0..100)
            .map(|i| {
                let tag = if i % 2 == 0 { "01" } else { "99" };
                LineRecord::new(4000.0 + i as f64 * 10.0, 26.0, tag, 7.9, 1.9, 4.5, 55.85)
            })
            .collect();

        let mut serial = template.clone();
        let serial_config = BroadeningConfig {
            parallel: false,
            ..BroadeningConfig::default()
        };
        broaden_all(&mut serial, &atm, &serial_config).unwrap();

        let mut parallel = template;
        let parallel_config = BroadeningConfig {
            parallel_threshold: 1,
            ..BroadeningConfig::default()
        };
        broaden_all(&mut parallel, &atm, &parallel_config).unwrap();

        assert_eq!(serial, parallel);
    }
}
