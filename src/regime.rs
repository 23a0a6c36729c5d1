//! Regime Classifier
//!
//! Decides, once per line, which broadening theory supplies each damping
//! term, and resolves the constants those theories need: species charge,
//! effective principal quantum numbers, ABO `sigma`/`alpha` and the Unsöld
//! interaction constant `C6`.
//!
//! # Regimes
//!
//! | Regime                  | radiative        | Stark            | van der Waals          |
//! |-------------------------|------------------|------------------|------------------------|
//! | `Abo`                   | literal if ≠ 0   | literal if ≠ 0   | ABO cross-section      |
//! | `LiteralGamma`          | literal          | literal          | literal, scaled        |
//! | `LiteralRadiativeStark` | literal          | literal          | Unsöld, no `l` term    |
//! | `LiteralRadiative`      | literal          | formula          | Unsöld, no `l` term    |
//! | `LiteralExhausted`      | formula          | formula          | Unsöld, no `l` term    |
//! | `Unsold`                | formula          | formula          | Unsöld with `l` term   |
//! | `GenericFallback`       | formula          | formula          | Unsöld, no `l` term    |
//! | `Molecular`             | formula          | `1e-5 Ne`        | `1e-7 NHI`             |
//! | `Autoionizing`          | none             | none             | none                   |
//!
//! `"GA"` lines use `1.0` as a sentinel for "not given"; the sentinels are
//! checked van der Waals first, then Stark, then radiative, and each one
//! degrades the regime by one step.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{BroadeningError, Result};
use crate::line::{approx_eq, LineRecord, TransitionTag};
use crate::tables::{self, TableLookup, SP_TABLE};

// ============================================================================
// Constants
// ============================================================================

/// Rydberg energy used in the quantum-defect formula (eV).
const RYDBERG_EV: f64 = 13.595;

/// Unsöld `C6` prefactor (cgs).
const UNSOLD_C6_PREFACTOR: f64 = 4.05e-33;

/// Effective quantum number of a lower level above the ionization limit.
const AUTOIONIZING_N_LOW: f64 = 4.0;

/// Effective quantum number of an upper level above the ionization limit.
const AUTOIONIZING_N_HIGH: f64 = 5.0;

/// Placeholder angular momentum for transitions without an orbital pair.
const NO_ORBITAL: u8 = 9;

/// Sentinel value of a `"GA"` damping constant meaning "use the formula".
const GAMMA_SENTINEL: f64 = 1.0;

const GAMMA_SENTINEL_TOLERANCE: f64 = 0.001;

// ============================================================================
// Regime
// ============================================================================

/// Broadening theory selected for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Anstee–Barklem–O'Mara cross-section theory.
    Abo,
    /// `"GA"` with all three damping constants given.
    LiteralGamma,
    /// `"GA"` with the van der Waals constant left at the sentinel.
    LiteralRadiativeStark,
    /// `"GA"` with van der Waals and Stark constants left at the sentinel.
    LiteralRadiative,
    /// `"GA"` with every constant left at the sentinel.
    LiteralExhausted,
    /// Unsöld `C6` theory including the angular-momentum term.
    Unsold,
    /// Unsöld `C6` theory without the angular-momentum term.
    GenericFallback,
    /// Fixed molecular approximations.
    Molecular,
    /// No damping at all; Doppler width only.
    Autoionizing,
}

impl Regime {
    /// All regimes in reporting order.
    pub const ALL: [Regime; 9] = [
        Regime::Abo,
        Regime::LiteralGamma,
        Regime::LiteralRadiativeStark,
        Regime::LiteralRadiative,
        Regime::LiteralExhausted,
        Regime::Unsold,
        Regime::GenericFallback,
        Regime::Molecular,
        Regime::Autoionizing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Regime::Abo => "abo",
            Regime::LiteralGamma => "literal-gamma",
            Regime::LiteralRadiativeStark => "literal-radiative-stark",
            Regime::LiteralRadiative => "literal-radiative",
            Regime::LiteralExhausted => "literal-exhausted",
            Regime::Unsold => "unsold",
            Regime::GenericFallback => "generic-fallback",
            Regime::Molecular => "molecular",
            Regime::Autoionizing => "autoionizing",
        }
    }

    /// The radiative damping constant is taken from the line list.
    pub fn literal_radiative(&self, line: &LineRecord) -> bool {
        match self {
            Regime::LiteralGamma | Regime::LiteralRadiativeStark | Regime::LiteralRadiative => true,
            Regime::Abo => line.gamma_radiative != 0.0,
            _ => false,
        }
    }

    /// The Stark damping constant is taken from the line list.
    pub fn literal_stark(&self, line: &LineRecord) -> bool {
        match self {
            Regime::LiteralGamma | Regime::LiteralRadiativeStark => true,
            Regime::Abo => line.gamma_stark != 0.0,
            _ => false,
        }
    }

    /// The van der Waals damping constant is taken from the line list.
    pub fn literal_van_der_waals(&self) -> bool {
        matches!(self, Regime::LiteralGamma)
    }

    /// Which Unsöld radius formula this regime needs, if any.
    fn unsold_variant(&self) -> Option<UnsoldVariant> {
        match self {
            Regime::Unsold => Some(UnsoldVariant::WithAngularMomentum),
            Regime::GenericFallback
            | Regime::LiteralRadiativeStark
            | Regime::LiteralRadiative
            | Regime::LiteralExhausted => Some(UnsoldVariant::Hydrogenic),
            Regime::Abo | Regime::LiteralGamma | Regime::Molecular | Regime::Autoionizing => None,
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mean-square radius formula used for `C6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnsoldVariant {
    /// `n²(5n² + 1 − 3l(l+1)) / 2Z²`
    WithAngularMomentum,
    /// `n²(5n²) / 2Z²`
    Hydrogenic,
}

// ============================================================================
// Classification
// ============================================================================

/// Per-line constants resolved by [`classify`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub regime: Regime,
    /// Core charge (1 for neutrals).
    pub charge: f64,
    /// Effective principal quantum number of the lower level.
    pub n_eff_low: f64,
    /// Effective principal quantum number of the upper level.
    pub n_eff_high: f64,
    /// Orbital angular momentum of the lower level (9 when unknown).
    pub l_low: u8,
    /// Orbital angular momentum of the upper level (9 when unknown).
    pub l_high: u8,
    /// ABO cross-section; 0 outside the ABO regime.
    pub sigma: f64,
    /// ABO velocity exponent; 0 outside the ABO regime.
    pub alpha: f64,
    /// Result of the table lookup, when one was made.
    pub table_lookup: Option<TableLookup>,
    /// Unsöld interaction constant; 0 when the regime does not use it.
    pub c6: f64,
    /// At least one damping constant is taken from the line list.
    pub has_literal_gammas: bool,
}

impl Classification {
    fn without_theory(regime: Regime, charge: f64) -> Self {
        Self {
            regime,
            charge,
            n_eff_low: 0.0,
            n_eff_high: 0.0,
            l_low: NO_ORBITAL,
            l_high: NO_ORBITAL,
            sigma: 0.0,
            alpha: 0.0,
            table_lookup: None,
            c6: 0.0,
            has_literal_gammas: false,
        }
    }

    /// Table lookup fell back to another theory (status 0 or 2).
    pub fn table_fell_back(&self) -> bool {
        self.table_lookup.map(|lookup| !lookup.is_success()).unwrap_or(false)
    }
}

/// Effective principal quantum numbers of the lower and upper level.
///
/// `n* = Z sqrt(13.595 / (chi − E))`. A level at or above the ionization
/// limit gets 4 (lower) or 5 (upper); if the upper number does not exceed the
/// lower one, the lower is pulled down to `n*_high − 1`.
pub fn effective_quantum_numbers(
    ionization_energy: f64,
    lower_energy: f64,
    upper_energy: f64,
    charge: f64,
) -> (f64, f64) {
    let mut n_low = if ionization_energy <= lower_energy {
        AUTOIONIZING_N_LOW
    } else {
        charge * (RYDBERG_EV / (ionization_energy - lower_energy)).sqrt()
    };
    let n_high = if ionization_energy <= upper_energy {
        AUTOIONIZING_N_HIGH
    } else {
        charge * (RYDBERG_EV / (ionization_energy - upper_energy)).sqrt()
    };
    if n_high <= n_low {
        n_low = n_high - 1.0;
    }
    (n_low, n_high)
}

fn mean_square_radius(n: f64, l: u8, charge: f64, variant: UnsoldVariant) -> f64 {
    let angular = match variant {
        UnsoldVariant::WithAngularMomentum => {
            let l = l as f64;
            1.0 - 3.0 * l * (l + 1.0)
        }
        UnsoldVariant::Hydrogenic => 0.0,
    };
    n * n * (5.0 * n * n + angular) / (2.0 * charge * charge)
}

fn unsold_c6(
    n_low: f64,
    n_high: f64,
    l_low: u8,
    l_high: u8,
    charge: f64,
    variant: UnsoldVariant,
) -> f64 {
    let r_low = mean_square_radius(n_low, l_low, charge, variant);
    let r_high = mean_square_radius(n_high, l_high, charge, variant);
    UNSOLD_C6_PREFACTOR * (r_high - r_low)
}

/// Step down the `"GA"` regimes while the constants sit at the sentinel.
fn literal_gamma_regime(line: &LineRecord) -> Regime {
    let sentinel = |value: f64| approx_eq(value, GAMMA_SENTINEL, GAMMA_SENTINEL_TOLERANCE);
    if !sentinel(line.gamma_van_der_waals) {
        Regime::LiteralGamma
    } else if !sentinel(line.gamma_stark) {
        Regime::LiteralRadiativeStark
    } else if !sentinel(line.gamma_radiative) {
        Regime::LiteralRadiative
    } else {
        Regime::LiteralExhausted
    }
}

/// Outcome of resolving ABO constants for an orbital pair.
struct AboResolution {
    regime: Regime,
    sigma: f64,
    alpha: f64,
    lookup: Option<TableLookup>,
}

/// Literal constants win; otherwise interpolate the table, falling back to
/// Unsöld with angular-momentum term on status 0 or 2.
fn resolve_abo(
    line: &LineRecord,
    table: &tables::InterpolationTable,
    n_low: f64,
    n_high: f64,
    l_low: u8,
    l_high: u8,
    charge: f64,
) -> AboResolution {
    if line.has_literal_abo_constants() {
        return AboResolution {
            regime: Regime::Abo,
            sigma: line.abo_sigma,
            alpha: line.abo_alpha,
            lookup: None,
        };
    }

    let lookup = table.interpolate(n_low, n_high, l_low, l_high, charge);
    match lookup {
        TableLookup::Interpolated { sigma, alpha } => AboResolution {
            regime: Regime::Abo,
            sigma,
            alpha,
            lookup: Some(lookup),
        },
        TableLookup::OutOfRange | TableLookup::IonizedSpecies => {
            debug!(
                "{:.3} Å: {} table status {}, using Unsöld C6",
                line.wavelength,
                table.name,
                lookup.status_code()
            );
            AboResolution {
                regime: Regime::Unsold,
                sigma: 0.0,
                alpha: 0.0,
                lookup: Some(lookup),
            }
        }
    }
}

/// Resolve the broadening regime and its constants for one line.
///
/// Pure: the line is not modified.
///
/// # Errors
/// [`BroadeningError::NumericDomain`] when the resolved constants cannot be
/// used: a negative `C6`, a non-positive ABO `sigma`, or an ABO `alpha` of 4
/// or more.
pub fn classify(line: &LineRecord) -> Result<Classification> {
    // "AI" wins over the molecule check, for every species.
    if line.transition == TransitionTag::Autoionizing {
        let charge = if line.is_molecule() { 1.0 } else { line.species.charge() };
        return Ok(Classification::without_theory(Regime::Autoionizing, charge));
    }
    if line.is_molecule() {
        return Ok(Classification::without_theory(Regime::Molecular, 1.0));
    }

    let charge = line.species.charge();

    let (n_low, n_high) = effective_quantum_numbers(
        line.ionization_energy,
        line.lower_energy,
        line.upper_energy,
        charge,
    );

    let literal_abo = line.has_literal_abo_constants();
    let (mut l_low, mut l_high) = (NO_ORBITAL, NO_ORBITAL);
    let mut sigma = 0.0;
    let mut alpha = 0.0;
    let mut table_lookup = None;

    let regime = match &line.transition {
        TransitionTag::Orbital { lower, upper } => {
            l_low = *lower;
            l_high = *upper;
            match tables::table_for(*lower, *upper) {
                Some(table) => {
                    let resolved = resolve_abo(line, table, n_low, n_high, l_low, l_high, charge);
                    sigma = resolved.sigma;
                    alpha = resolved.alpha;
                    table_lookup = resolved.lookup;
                    resolved.regime
                }
                None => Regime::Unsold,
            }
        }
        TransitionTag::Abo => {
            l_low = 0;
            l_high = 1;
            let resolved = resolve_abo(line, &SP_TABLE, n_low, n_high, l_low, l_high, charge);
            if resolved.regime != Regime::Abo {
                warn!(
                    "{:.3} Å: AO line without usable sigma/alpha, using Unsöld C6",
                    line.wavelength
                );
            }
            sigma = resolved.sigma;
            alpha = resolved.alpha;
            table_lookup = resolved.lookup;
            resolved.regime
        }
        TransitionTag::LiteralGamma => {
            l_low = 0;
            l_high = 1;
            literal_gamma_regime(line)
        }
        TransitionTag::NoTheory | TransitionTag::Unrecognized(_) => Regime::GenericFallback,
        TransitionTag::Autoionizing => Regime::Autoionizing,
    };

    if literal_abo && regime != Regime::Abo {
        debug!(
            "{:.3} Å: literal sigma/alpha ignored for tag {}",
            line.wavelength, line.transition
        );
    }

    let c6 = match regime.unsold_variant() {
        Some(variant) => {
            let c6 = unsold_c6(n_low, n_high, l_low, l_high, charge, variant);
            if c6 < 0.0 {
                return Err(BroadeningError::domain(
                    "c6",
                    c6,
                    format!(
                        "line at {} Å, n* = ({n_low:.3}, {n_high:.3}), tag {}",
                        line.wavelength, line.transition
                    ),
                ));
            }
            c6
        }
        None => 0.0,
    };

    if regime == Regime::Abo {
        let context = || format!("line at {} Å, ABO constants", line.wavelength);
        if !(sigma > 0.0) {
            return Err(BroadeningError::domain("sigma", sigma, context()));
        }
        if !(alpha < 4.0) {
            return Err(BroadeningError::domain("alpha", alpha, context()));
        }
    }

    let has_literal_gammas = regime.literal_radiative(line)
        || regime.literal_stark(line)
        || regime.literal_van_der_waals();

    debug!(
        "{:.3} Å: tag {} charge {} n* = ({:.3}, {:.3}) -> {}",
        line.wavelength, line.transition, charge, n_low, n_high, regime
    );

    Ok(Classification {
        regime,
        charge,
        n_eff_low: n_low,
        n_eff_high: n_high,
        l_low,
        l_high,
        sigma,
        alpha,
        table_lookup,
        c6,
        has_literal_gammas,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// Neutral iron-like line whose effective numbers fall inside the s–p grid.
    fn fe_line(tag: &str) -> LineRecord {
        // n*_low = sqrt(13.595 / 6.0) ≈ 1.505, n*_high = sqrt(13.595 / 3.4) ≈ 2.000
        LineRecord::new(5000.0, 26.0, tag, 7.9, 1.9, 4.5, 55.85)
    }

    #[test]
    fn test_effective_quantum_numbers() {
        let (low, high) = effective_quantum_numbers(7.9, 1.9, 4.5, 1.0);
        assert_relative_eq!(low, (13.595_f64 / 6.0).sqrt(), max_relative = 1e-12);
        assert_relative_eq!(high, (13.595_f64 / 3.4).sqrt(), max_relative = 1e-12);

        let (low2, high2) = effective_quantum_numbers(7.9, 1.9, 4.5, 2.0);
        assert_relative_eq!(low2, 2.0 * low, max_relative = 1e-12);
        assert_relative_eq!(high2, 2.0 * high, max_relative = 1e-12);
    }

    #[test]
    fn test_effective_quantum_numbers_above_limit() {
        assert_eq!(effective_quantum_numbers(7.0, 7.5, 8.0, 1.0), (4.0, 5.0));
        // Upper above the limit only.
        let (low, high) = effective_quantum_numbers(7.0, 1.0, 7.0, 1.0);
        assert_eq!(high, 5.0);
        assert_relative_eq!(low, (13.595_f64 / 6.0).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_effective_quantum_numbers_inverted() {
        // Lower above the limit (4.0) but upper below it: forced to n_high - 1.
        let (low, high) = effective_quantum_numbers(7.0, 7.2, 3.0, 1.0);
        assert_relative_eq!(high, (13.595_f64 / 4.0).sqrt(), max_relative = 1e-12);
        assert_relative_eq!(low, high - 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_sp_table_regime() {
        let class = classify(&fe_line("01")).unwrap();
        assert_eq!(class.regime, Regime::Abo);
        assert_eq!(class.table_lookup.map(|t| t.status_code()), Some(1));
        assert!(class.sigma > 200.0 && class.sigma < 500.0);
        assert!(class.alpha > 0.2 && class.alpha < 0.4);
        assert_eq!(class.c6, 0.0);
        assert!(!class.has_literal_gammas);
    }

    #[test]
    fn test_ionized_species_uses_unsold() {
        let mut line = fe_line("01");
        line.species = crate::line::Species(26.10);
        // Keep n* inside the grid even with charge 2.
        line.ionization_energy = 16.2;
        line.lower_energy = 3.0;
        line.upper_energy = 9.0;

        let class = classify(&line).unwrap();
        assert_eq!(class.charge, 2.0);
        assert_eq!(class.table_lookup, Some(TableLookup::IonizedSpecies));
        assert_eq!(class.regime, Regime::Unsold);
        assert!(class.c6 > 0.0);
        assert_eq!(class.sigma, 0.0);
    }

    #[test]
    fn test_out_of_range_uses_unsold() {
        let line = LineRecord::new(5000.0, 26.0, "01", 7.9, 6.5, 7.5, 55.85);
        let class = classify(&line).unwrap();
        assert_eq!(class.table_lookup.map(|t| t.status_code()), Some(0));
        assert_eq!(class.regime, Regime::Unsold);
        assert!(class.table_fell_back());
    }

    #[test]
    fn test_literal_abo_constants_skip_table() {
        let line = fe_line("01").with_abo_constants(350.0, 0.25);
        let class = classify(&line).unwrap();
        assert_eq!(class.regime, Regime::Abo);
        assert_eq!(class.table_lookup, None);
        assert_eq!(class.sigma, 350.0);
        assert_eq!(class.alpha, 0.25);
    }

    #[test]
    fn test_literal_abo_constants_below_threshold_ignored() {
        let line = fe_line("01").with_abo_constants(0.009, 0.25);
        let class = classify(&line).unwrap();
        assert_eq!(class.table_lookup.map(|t| t.status_code()), Some(1));
        assert_ne!(class.sigma, 0.009);
    }

    #[test_case("34", 3, 4 ; "f to g")]
    #[test_case("43", 4, 3 ; "g to f")]
    #[test_case("56", 5, 6 ; "h to i")]
    fn test_high_orbitals_use_unsold(tag: &str, l_low: u8, l_high: u8) {
        // Large n* keeps the angular term from turning C6 negative.
        let line = LineRecord::new(5000.0, 26.0, tag, 7.9, 7.0, 7.6, 55.85);
        let class = classify(&line).unwrap();
        assert_eq!(class.regime, Regime::Unsold);
        assert_eq!((class.l_low, class.l_high), (l_low, l_high));
        assert_eq!(class.table_lookup, None);
    }

    #[test_case("99" ; "no theory")]
    #[test_case("ZZ" ; "unrecognized")]
    fn test_generic_fallback(tag: &str) {
        let class = classify(&fe_line(tag)).unwrap();
        assert_eq!(class.regime, Regime::GenericFallback);
        assert_eq!((class.l_low, class.l_high), (9, 9));

        let (n_low, n_high) = (class.n_eff_low, class.n_eff_high);
        let expected = 4.05e-33 * (n_high.powi(4) * 5.0 / 2.0 - n_low.powi(4) * 5.0 / 2.0);
        assert_relative_eq!(class.c6, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_generic_fallback_overrides_literal_abo() {
        let line = fe_line("99").with_abo_constants(350.0, 0.25);
        let class = classify(&line).unwrap();
        assert_eq!(class.regime, Regime::GenericFallback);
        assert_eq!(class.sigma, 0.0);
    }

    #[test]
    fn test_unsold_angular_term() {
        let line = LineRecord::new(5000.0, 26.0, "34", 7.9, 7.0, 7.6, 55.85);
        let class = classify(&line).unwrap();
        let r2 = |n: f64, l: f64| n * n * (5.0 * n * n + 1.0 - 3.0 * l * (l + 1.0)) / 2.0;
        let expected = 4.05e-33 * (r2(class.n_eff_high, 4.0) - r2(class.n_eff_low, 3.0));
        assert_relative_eq!(class.c6, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_c6_is_domain_error() {
        // n* nearly equal with a larger angular term on the upper level.
        let line = LineRecord::new(5000.0, 26.0, "34", 7.9, 4.0, 4.1, 55.85);
        let err = classify(&line).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_DOMAIN");
    }

    #[test]
    fn test_abo_tag_with_literal_constants() {
        let line = fe_line("AO").with_abo_constants(280.0, 0.31).with_gammas(1.0e8, 0.0, 0.0);
        let class = classify(&line).unwrap();
        assert_eq!(class.regime, Regime::Abo);
        assert_eq!((class.sigma, class.alpha), (280.0, 0.31));
        assert!(class.regime.literal_radiative(&line));
        assert!(!class.regime.literal_stark(&line));
        assert!(class.has_literal_gammas);
    }

    #[test]
    fn test_abo_tag_without_constants_uses_sp_table() {
        let class = classify(&fe_line("AO")).unwrap();
        assert_eq!(class.regime, Regime::Abo);
        assert_eq!(class.table_lookup.map(|t| t.status_code()), Some(1));
    }

    #[test_case(5.0, 3.0, 2.0, Regime::LiteralGamma ; "all given")]
    #[test_case(5.0, 3.0, 1.0, Regime::LiteralRadiativeStark ; "van der waals sentinel")]
    #[test_case(5.0, 1.0, 1.0, Regime::LiteralRadiative ; "stark and van der waals sentinels")]
    #[test_case(1.0, 1.0, 1.0, Regime::LiteralExhausted ; "all sentinels")]
    #[test_case(1.0, 1.0, 3.0, Regime::LiteralGamma ; "only van der waals given")]
    #[test_case(1.0, 3.0, 1.0, Regime::LiteralRadiativeStark ; "radiative sentinel ignored")]
    fn test_literal_gamma_cascade(radiative: f64, stark: f64, vdw: f64, expected: Regime) {
        let line = fe_line("GA").with_gammas(radiative, stark, vdw);
        let class = classify(&line).unwrap();
        assert_eq!(class.regime, expected);
        assert_eq!((class.l_low, class.l_high), (0, 1));
    }

    #[test]
    fn test_literal_gamma_regime_flags() {
        let line = fe_line("GA").with_gammas(5.0, 1.0, 1.0);
        let class = classify(&line).unwrap();
        assert!(class.regime.literal_radiative(&line));
        assert!(!class.regime.literal_stark(&line));
        assert!(!class.regime.literal_van_der_waals());
        // Degraded regimes use the hydrogenic C6.
        assert!(class.c6 > 0.0);

        let full = fe_line("GA").with_gammas(5.0, 3.0, 2.0);
        let class = classify(&full).unwrap();
        assert_eq!(class.c6, 0.0);
        assert!(class.regime.literal_van_der_waals());
    }

    #[test]
    fn test_molecule_and_autoionizing() {
        let molecule = LineRecord::new(5000.0, 112.0, "01", 0.0, 0.0, 0.0, 25.0);
        assert_eq!(classify(&molecule).unwrap().regime, Regime::Molecular);

        let ai = fe_line("AI");
        let class = classify(&ai).unwrap();
        assert_eq!(class.regime, Regime::Autoionizing);
        assert_eq!(class.charge, 1.0);
    }

    #[test]
    fn test_autoionizing_molecule_is_not_damped() {
        let line = LineRecord::new(4300.3, 106.0, "AI", 0.0, 0.0, 0.0, 13.0);
        let class = classify(&line).unwrap();
        assert_eq!(class.regime, Regime::Autoionizing);
        assert_eq!(class.charge, 1.0);
    }

    #[test]
    fn test_pd_and_df_tags_pick_tables() {
        // p level n* ≈ 2.0, d level n* ≈ 3.0.
        let pd = LineRecord::new(5000.0, 26.0, "12", 7.9, 4.5, 6.389, 55.85);
        let class = classify(&pd).unwrap();
        assert_eq!(class.table_lookup.map(|t| t.status_code()), Some(1));
        assert_eq!(class.regime, Regime::Abo);

        // f level n* ≈ 4.0 above a d level at ≈ 3.0: the inversion rule
        // pulls the f coordinate down to ≈ 2.0, off the d–f grid.
        let df = LineRecord::new(5000.0, 26.0, "32", 7.9, 7.050, 6.389, 55.85);
        let class = classify(&df).unwrap();
        assert_eq!((class.l_low, class.l_high), (3, 2));
        assert_eq!(class.table_lookup.map(|t| t.status_code()), Some(0));
    }

    #[test]
    fn test_regime_labels_unique() {
        let mut labels: Vec<_> = Regime::ALL.iter().map(|r| r.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Regime::ALL.len());
    }
}
