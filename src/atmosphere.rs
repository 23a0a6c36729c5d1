//! Model atmosphere
//!
//! Ordered depth layers of a stellar atmosphere. The model is built once by
//! the caller and only read by the broadening code; the number of layers is
//! the depth count (`Ntau`) every per-depth output array is sized to.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BroadeningError, Result};

/// One depth layer of the atmosphere (cgs units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthLayer {
    /// Kinetic temperature (K).
    pub temperature: f64,
    /// Microturbulent velocity (cm/s).
    pub microturbulence: f64,
    /// Electron number density (cm⁻³).
    pub electron_density: f64,
    /// Neutral hydrogen number density (cm⁻³).
    pub hydrogen_density: f64,
    /// Neutral helium number density (cm⁻³).
    pub helium_density: f64,
    /// Molecular hydrogen number density (cm⁻³).
    pub h2_density: f64,
}

impl DepthLayer {
    /// Helium and H2 perturber correction relative to neutral hydrogen:
    /// `1 + 0.4133 NHeI/NHI + 0.85 NH2/NHI`.
    #[inline]
    pub fn perturber_factor(&self) -> f64 {
        1.0 + 0.4133 * self.helium_density / self.hydrogen_density
            + 0.85 * self.h2_density / self.hydrogen_density
    }

    fn validate(&self, depth: usize) -> Result<()> {
        let context = || format!("depth {depth}");
        if !(self.temperature > 0.0 && self.temperature.is_finite()) {
            return Err(BroadeningError::domain("temperature", self.temperature, context()));
        }
        if !(self.hydrogen_density > 0.0 && self.hydrogen_density.is_finite()) {
            return Err(BroadeningError::domain(
                "hydrogen_density",
                self.hydrogen_density,
                context(),
            ));
        }
        if !self.microturbulence.is_finite() {
            return Err(BroadeningError::domain(
                "microturbulence",
                self.microturbulence,
                context(),
            ));
        }
        for (quantity, value) in [
            ("electron_density", self.electron_density),
            ("helium_density", self.helium_density),
            ("h2_density", self.h2_density),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(BroadeningError::domain(quantity, value, context()));
            }
        }
        Ok(())
    }
}

/// Stellar atmosphere model: depth layers ordered from the surface inward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereModel {
    layers: Vec<DepthLayer>,
}

impl AtmosphereModel {
    /// Build a model from its layers, validating every one.
    pub fn new(layers: Vec<DepthLayer>) -> Result<Self> {
        let model = Self { layers };
        model.validate()?;
        Ok(model)
    }

    /// Load a model from a JSON file of the form `{ "layers": [...] }`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BroadeningError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| BroadeningError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let model: AtmosphereModel = serde_json::from_str(&content)?;
        model.validate()?;
        Ok(model)
    }

    /// Check the layers for values the broadening formulas cannot take.
    ///
    /// Temperature and neutral hydrogen density must be strictly positive
    /// (they are divided by and raised to fractional powers); the other
    /// densities must be non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(BroadeningError::EmptyAtmosphere);
        }
        for (depth, layer) in self.layers.iter().enumerate() {
            layer.validate(depth)?;
        }
        Ok(())
    }

    /// Number of depth layers (`Ntau`).
    pub fn depth_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[DepthLayer] {
        &self.layers
    }

    pub fn layer(&self, depth: usize) -> Option<&DepthLayer> {
        self.layers.get(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    fn layer(temperature: f64) -> DepthLayer {
        DepthLayer {
            temperature,
            microturbulence: 1.0e5,
            electron_density: 1.0e13,
            hydrogen_density: 1.0e16,
            helium_density: 1.0e15,
            h2_density: 1.0e12,
        }
    }

    #[test]
    fn test_new_valid() {
        let model = AtmosphereModel::new(vec![layer(4500.0), layer(5800.0)]).unwrap();
        assert_eq!(model.depth_count(), 2);
        assert_eq!(model.layer(1).unwrap().temperature, 5800.0);
        assert!(model.layer(2).is_none());
    }

    #[test]
    fn test_empty_rejected() {
        let err = AtmosphereModel::new(Vec::new()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_ATMOSPHERE");
    }

    #[test]
    fn test_zero_hydrogen_rejected() {
        let mut bad = layer(5000.0);
        bad.hydrogen_density = 0.0;
        let err = AtmosphereModel::new(vec![layer(5000.0), bad]).unwrap_err();
        match err {
            BroadeningError::NumericDomain { quantity, context, .. } => {
                assert_eq!(quantity, "hydrogen_density");
                assert_eq!(context, "depth 1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_temperature_rejected() {
        assert!(AtmosphereModel::new(vec![layer(-5.0)]).is_err());
    }

    #[test]
    fn test_perturber_factor() {
        let l = layer(5000.0);
        assert_relative_eq!(l.perturber_factor(), 1.0 + 0.04133 + 0.85e-4, max_relative = 1e-12);
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atmosphere.json");
        let model = AtmosphereModel::new(vec![layer(4000.0), layer(6000.0)]).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&model).unwrap()).unwrap();

        let loaded = AtmosphereModel::load(&path).unwrap();
        assert_eq!(loaded, model);
    }
}
