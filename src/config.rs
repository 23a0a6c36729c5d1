//! Broadening configuration
//!
//! Process-wide knobs that the computation reads but never changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BroadeningError, Result};

/// Default number of lines below which a batch runs on the calling thread.
const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

fn default_enhancement_factor() -> f64 {
    1.0
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

/// Configuration shared by every line of a broadening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadeningConfig {
    /// Multiplier applied to van der Waals damping (Unsöld and ABO).
    #[serde(default = "default_enhancement_factor")]
    pub enhancement_factor: f64,

    /// Spread lines over the rayon thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Minimum batch size for parallel processing.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for BroadeningConfig {
    fn default() -> Self {
        Self {
            enhancement_factor: default_enhancement_factor(),
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl BroadeningConfig {
    /// Create a configuration with the given van der Waals enhancement factor.
    pub fn with_enhancement(enhancement_factor: f64) -> Self {
        Self {
            enhancement_factor,
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their defaults. The result is validated.
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

        let config: BroadeningConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if !self.enhancement_factor.is_finite() || self.enhancement_factor <= 0.0 {
            return Err(BroadeningError::InvalidConfig {
                reason: format!(
                    "enhancement factor must be finite and positive, got {}",
                    self.enhancement_factor
                ),
            });
        }
        Ok(())
    }

    /// Whether a batch of `line_count` lines should run in parallel.
    pub fn runs_parallel(&self, line_count: usize) -> bool {
        self.parallel && line_count >= self.parallel_threshold.max(1)
    }
}
