//! Line records
//!
//! A [`LineRecord`] is one atomic or molecular transition from the line list.
//! The input attributes are filled in by the caller; broadening writes the
//! per-depth output arrays (`doppler`, `damping`, `quasistatic`) in place.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BroadeningError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Species codes at or above this value are molecules.
pub const MOLECULE_CODE_THRESHOLD: f64 = 100.0;

/// Tolerance when matching the fractional part of a species code.
const CHARGE_TOLERANCE: f64 = 0.001;

/// Tolerance below which literal ABO sigma/alpha count as "not supplied".
pub const LITERAL_ABO_TOLERANCE: f64 = 0.01;

/// `|a - b| < tol`.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

// ============================================================================
// Species
// ============================================================================

/// Species code: atomic number plus `0.1 ×` ionization stage for atoms
/// (`26.00` Fe I, `26.10` Fe II), a composite code ≥ 100 for molecules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Species(pub f64);

impl Species {
    pub fn code(&self) -> f64 {
        self.0
    }

    pub fn is_molecule(&self) -> bool {
        self.0 >= MOLECULE_CODE_THRESHOLD
    }

    /// Effective core charge seen by the optical electron: 1 for neutrals,
    /// 2 for singly ionized, up to 4. Unrecognised suffixes count as 2.
    pub fn charge(&self) -> f64 {
        let neutral = self.0.floor();
        [0.0, 0.1, 0.2, 0.3]
            .iter()
            .position(|&suffix| approx_eq(self.0, neutral + suffix, CHARGE_TOLERANCE))
            .map(|stage| stage as f64 + 1.0)
            .unwrap_or(2.0)
    }
}

// ============================================================================
// Transition Tag
// ============================================================================

/// Transition-type tag from the line list.
///
/// Orbital tags name the angular momenta of the lower and upper level
/// (`"01"` is s→p, `"32"` is f→d). Anything not in the closed set parses
/// to [`TransitionTag::Unrecognized`] and is broadened with the generic
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransitionTag {
    /// `"AI"`: autoionizing line, Doppler width only.
    Autoionizing,
    /// `"99"`: no broadening theory applies.
    NoTheory,
    /// Orbital pair such as `"01"` or `"43"`.
    Orbital { lower: u8, upper: u8 },
    /// `"AO"`: Anstee–Barklem–O'Mara theory.
    Abo,
    /// `"GA"`: damping constants taken from the line list.
    LiteralGamma,
    Unrecognized(String),
}

impl TransitionTag {
    /// Parse a tag. Never fails.
    ///
    /// Matching is exact: surrounding whitespace makes a tag unrecognized.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "AI" => TransitionTag::Autoionizing,
            "99" => TransitionTag::NoTheory,
            "AO" => TransitionTag::Abo,
            "GA" => TransitionTag::LiteralGamma,
            other => match other.as_bytes() {
                &[a, b] if is_orbital_pair(a, b) => TransitionTag::Orbital {
                    lower: a - b'0',
                    upper: b - b'0',
                },
                _ => TransitionTag::Unrecognized(other.to_string()),
            },
        }
    }
}

/// Adjacent orbital pairs from s–p up to h–i.
fn is_orbital_pair(a: u8, b: u8) -> bool {
    if !(b'0'..=b'6').contains(&a) || !(b'0'..=b'6').contains(&b) {
        return false;
    }
    a.abs_diff(b) == 1
}

impl fmt::Display for TransitionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionTag::Autoionizing => write!(f, "AI"),
            TransitionTag::NoTheory => write!(f, "99"),
            TransitionTag::Orbital { lower, upper } => write!(f, "{lower}{upper}"),
            TransitionTag::Abo => write!(f, "AO"),
            TransitionTag::LiteralGamma => write!(f, "GA"),
            TransitionTag::Unrecognized(tag) => write!(f, "{tag}"),
        }
    }
}

impl From<String> for TransitionTag {
    fn from(value: String) -> Self {
        TransitionTag::parse(&value)
    }
}

impl From<&str> for TransitionTag {
    fn from(value: &str) -> Self {
        TransitionTag::parse(value)
    }
}

impl From<TransitionTag> for String {
    fn from(value: TransitionTag) -> Self {
        value.to_string()
    }
}

// ============================================================================
// Line Record
// ============================================================================

/// One spectral line and its per-depth broadening results.
///
/// Energies are in eV, wavelength in Å, atomic mass in amu. The literal
/// damping constants follow the line-list convention: `0.0` means "not
/// given" for `"AO"` lines, `1.0` is the sentinel meaning "use the formula"
/// for `"GA"` lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub wavelength: f64,
    pub species: Species,
    pub transition: TransitionTag,
    /// Ionization energy `chi`.
    pub ionization_energy: f64,
    /// Lower term energy `El`.
    pub lower_energy: f64,
    /// Upper term energy `Eu`.
    pub upper_energy: f64,
    pub atomic_mass: f64,

    #[serde(default)]
    pub gamma_radiative: f64,
    /// Stark damping per electron (multiplied by `Ne`).
    #[serde(default)]
    pub gamma_stark: f64,
    /// van der Waals damping per hydrogen atom at 10⁴ K.
    #[serde(default)]
    pub gamma_van_der_waals: f64,

    /// Literal ABO cross-section; overrides table interpolation.
    #[serde(default)]
    pub abo_sigma: f64,
    /// Literal ABO velocity exponent; overrides table interpolation.
    #[serde(default)]
    pub abo_alpha: f64,

    /// Doppler width per depth (cm/s).
    #[serde(default)]
    pub doppler: Vec<f64>,
    /// Voigt damping parameter `a` per depth.
    #[serde(default)]
    pub damping: Vec<f64>,
    /// Quasistatic correction per depth; always 1.0.
    #[serde(default)]
    pub quasistatic: Vec<f64>,
}

impl LineRecord {
    /// Create a line with no literal damping constants and empty outputs.
    pub fn new(
        wavelength: f64,
        species: f64,
        transition: impl Into<TransitionTag>,
        ionization_energy: f64,
        lower_energy: f64,
        upper_energy: f64,
        atomic_mass: f64,
    ) -> Self {
        Self {
            wavelength,
            species: Species(species),
            transition: transition.into(),
            ionization_energy,
            lower_energy,
            upper_energy,
            atomic_mass,
            gamma_radiative: 0.0,
            gamma_stark: 0.0,
            gamma_van_der_waals: 0.0,
            abo_sigma: 0.0,
            abo_alpha: 0.0,
            doppler: Vec::new(),
            damping: Vec::new(),
            quasistatic: Vec::new(),
        }
    }

    /// Set literal radiative, Stark and van der Waals damping constants.
    pub fn with_gammas(mut self, radiative: f64, stark: f64, van_der_waals: f64) -> Self {
        self.gamma_radiative = radiative;
        self.gamma_stark = stark;
        self.gamma_van_der_waals = van_der_waals;
        self
    }

    /// Set literal ABO sigma and alpha.
    pub fn with_abo_constants(mut self, sigma: f64, alpha: f64) -> Self {
        self.abo_sigma = sigma;
        self.abo_alpha = alpha;
        self
    }

    pub fn is_molecule(&self) -> bool {
        self.species.is_molecule()
    }

    /// Both literal ABO constants are away from zero.
    pub fn has_literal_abo_constants(&self) -> bool {
        !approx_eq(self.abo_sigma, 0.0, LITERAL_ABO_TOLERANCE)
            && !approx_eq(self.abo_alpha, 0.0, LITERAL_ABO_TOLERANCE)
    }

    /// Check the attributes every line needs, whatever its regime.
    pub fn validate(&self) -> Result<()> {
        let context = || format!("line at {} Å", self.wavelength);
        if !(self.wavelength > 0.0 && self.wavelength.is_finite()) {
            return Err(BroadeningError::domain("wavelength", self.wavelength, context()));
        }
        if !(self.atomic_mass > 0.0 && self.atomic_mass.is_finite()) {
            return Err(BroadeningError::domain("atomic_mass", self.atomic_mass, context()));
        }
        Ok(())
    }

    /// Resize the per-depth arrays to `depth_count` entries.
    ///
    /// Existing values are kept when the length already matches, so that an
    /// autoionizing line keeps the caller's damping values.
    pub(crate) fn prepare_outputs(&mut self, depth_count: usize) {
        self.doppler.resize(depth_count, 0.0);
        self.damping.resize(depth_count, 0.0);
        self.quasistatic.resize(depth_count, 1.0);
    }
}

/// Load a line list from a JSON array.
pub fn load_lines(path: &Path) -> Result<Vec<LineRecord>> {
    if !path.exists() {
        return Err(BroadeningError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| BroadeningError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let lines: Vec<LineRecord> = serde_json::from_str(&content)?;
    Ok(lines)
}

/// Write a line list, including per-depth outputs, as pretty JSON.
pub fn save_lines(path: &Path, lines: &[LineRecord]) -> Result<()> {
    let content = serde_json::to_string_pretty(lines)?;
    fs::write(path, content).map_err(|e| BroadeningError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
