//! Empirical ABO Cross-Section Tables
//!
//! Anstee–Barklem–O'Mara broadening cross-sections (`sigma`) and velocity
//! exponents (`alpha`) tabulated on a grid of effective principal quantum
//! numbers, one grid per transition family (s–p, p–d, d–f).
//!
//! Each grid is looked up with a first-match linear scan over its axes and a
//! two-stage bilinear interpolation (columns first, then rows). Both the scan
//! order and the stage order are kept as-is so that results reproduce the
//! reference synthetic spectra bit for bit. All table arithmetic is `f32`.

mod df;
mod pd;
mod sp;

pub use df::DF_TABLE;
pub use pd::PD_TABLE;
pub use sp::SP_TABLE;

use serde::Serialize;

/// Every grid has 18 columns.
pub const GRID_COLUMNS: usize = 18;

// ============================================================================
// Lookup Result
// ============================================================================

/// Outcome of a table interpolation.
///
/// The legacy integer status is available through [`TableLookup::status_code`]:
/// `0` out of range, `1` success, `2` ionized species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableLookup {
    /// One of the coordinates lies outside the grid; caller falls back.
    OutOfRange,
    /// Grid only covers neutral species (`charge > 1`); caller falls back.
    IonizedSpecies,
    /// Interpolated cross-section and velocity exponent.
    Interpolated { sigma: f64, alpha: f64 },
}

impl TableLookup {
    /// Legacy status code (`0`, `1` or `2`).
    pub fn status_code(&self) -> u8 {
        match self {
            TableLookup::OutOfRange => 0,
            TableLookup::Interpolated { .. } => 1,
            TableLookup::IonizedSpecies => 2,
        }
    }

    /// `(sigma, alpha)` when interpolation succeeded.
    pub fn constants(&self) -> Option<(f64, f64)> {
        match *self {
            TableLookup::Interpolated { sigma, alpha } => Some((sigma, alpha)),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TableLookup::Interpolated { .. })
    }
}

// ============================================================================
// Interpolation Table
// ============================================================================

/// A compiled-in 2-D grid of `sigma` and `alpha` values.
///
/// Rows follow `row_axis` (the lower orbital angular momentum of the
/// family, e.g. `s` for s–p), columns follow `column_axis`.
#[derive(Debug)]
pub struct InterpolationTable {
    /// Human-readable family name, e.g. `"s-p"`.
    pub name: &'static str,
    /// Orbital angular momentum `l` addressed by the row axis.
    pub row_orbital: u8,
    /// Orbital angular momentum `l` addressed by the column axis.
    pub column_orbital: u8,
    pub row_axis: &'static [f32],
    pub column_axis: &'static [f32; GRID_COLUMNS],
    pub sigma: &'static [[f32; GRID_COLUMNS]],
    pub alpha: &'static [[f32; GRID_COLUMNS]],
}

impl InterpolationTable {
    /// Interpolate `sigma` and `alpha` for a transition.
    ///
    /// # Arguments
    /// * `n_eff_low` / `n_eff_high` - Effective principal quantum numbers of
    ///   the lower and upper level
    /// * `l_low` / `l_high` - Orbital angular momenta of the two levels; they
    ///   decide which coordinate addresses rows and which addresses columns
    /// * `charge` - Species charge (1 for neutrals)
    ///
    /// # Returns
    /// [`TableLookup::OutOfRange`] when a coordinate is outside the grid
    /// (open lower bound, inclusive upper bound), [`TableLookup::IonizedSpecies`]
    /// for `charge > 1`, otherwise the interpolated pair.
    pub fn interpolate(
        &self,
        n_eff_low: f64,
        n_eff_high: f64,
        l_low: u8,
        l_high: u8,
        charge: f64,
    ) -> TableLookup {
        let (Some(row), Some(column)) = (
            self.pick(self.row_orbital, n_eff_low, n_eff_high, l_low, l_high),
            self.pick(self.column_orbital, n_eff_low, n_eff_high, l_low, l_high),
        ) else {
            return TableLookup::OutOfRange;
        };

        if !in_open_closed_range(row, self.row_axis) || !in_open_closed_range(column, self.column_axis)
        {
            return TableLookup::OutOfRange;
        }
        if charge > 1.0 {
            return TableLookup::IonizedSpecies;
        }

        let (Some(k), Some(l)) = (first_cell(row, self.row_axis), first_cell(column, self.column_axis))
        else {
            return TableLookup::OutOfRange;
        };

        let sigma = self.bilinear(self.sigma, k, l, row, column);
        let alpha = self.bilinear(self.alpha, k, l, row, column);

        TableLookup::Interpolated {
            sigma: sigma as f64,
            alpha: alpha as f64,
        }
    }

    /// Pick the coordinate whose level carries orbital momentum `orbital`.
    ///
    /// When both levels match, the upper one wins.
    fn pick(&self, orbital: u8, n_low: f64, n_high: f64, l_low: u8, l_high: u8) -> Option<f32> {
        if l_high == orbital {
            Some(n_high as f32)
        } else if l_low == orbital {
            Some(n_low as f32)
        } else {
            None
        }
    }

    /// Interpolate along the column axis for rows `k` and `k + 1`, then
    /// between those two results along the row axis.
    fn bilinear(&self, grid: &[[f32; GRID_COLUMNS]], k: usize, l: usize, row: f32, column: f32) -> f32 {
        let rows = self.row_axis;
        let cols = self.column_axis;

        let v1 = grid[k][l];
        let v2 = grid[k + 1][l];
        let v3 = grid[k][l + 1];
        let v4 = grid[k + 1][l + 1];

        let col_frac_num = column - cols[l];
        let col_span = cols[l + 1] - cols[l];
        let va = v1 + (v3 - v1) * col_frac_num / col_span;
        let vb = v2 + (v4 - v2) * col_frac_num / col_span;

        va + (vb - va) * (row - rows[k]) / (rows[k + 1] - rows[k])
    }
}

/// `axis[0] < x <= axis[last]`.
fn in_open_closed_range(x: f32, axis: &[f32]) -> bool {
    match (axis.first(), axis.last()) {
        (Some(&lo), Some(&hi)) => x > lo && x <= hi,
        _ => false,
    }
}

/// First index `i` with `x <= axis[i + 1]`.
///
/// A coordinate sitting exactly on an interior grid line resolves to the
/// cell below it.
fn first_cell(x: f32, axis: &[f32]) -> Option<usize> {
    axis.windows(2).position(|w| x <= w[1])
}

/// Table for a transition between orbital momenta `l_low` and `l_high`.
///
/// Only s–p, p–d and d–f pairs (in either direction) have a table.
pub fn table_for(l_low: u8, l_high: u8) -> Option<&'static InterpolationTable> {
    match (l_low.min(l_high), l_low.max(l_high)) {
        (0, 1) => Some(&SP_TABLE),
        (1, 2) => Some(&PD_TABLE),
        (2, 3) => Some(&DF_TABLE),
        _ => None,
    }
}

/// Look up a table by family name (`"sp"`, `"s-p"`, `"pd"`, ...).
pub fn table_by_name(name: &str) -> Option<&'static InterpolationTable> {
    match name.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
        "sp" => Some(&SP_TABLE),
        "pd" => Some(&PD_TABLE),
        "df" => Some(&DF_TABLE),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
