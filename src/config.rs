//! Host-side filter configuration.
//!
//! The engine itself only ever sees `[i32; N]` arrays. This module covers the
//! path from a dynamically sized description (TOML file or command-line list)
//! to those arrays.
//!
//! ## File format
//!
//! ```toml
//! taps = [0, -10, -9, 23, 56, 63, 56, 23, -9, -10, 0]
//! input = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]
//! ```
//!
//! Either key may be omitted; missing keys fall back to the build-time
//! defaults in [`crate::constants`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{INPUT_SIGNAL, TAPS};
use crate::error::{FirError, Result};

/// Filter coefficients and input signal
///
/// # Example
/// ```
/// use mprjfir::config::FirConfig;
///
/// let config = FirConfig::from_toml_str("taps = [1, 2, 3, 4]\ninput = [1, 1, 1, 1]").unwrap();
/// let taps: [i32; 4] = config.taps_array().unwrap();
/// assert_eq!(taps, [1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirConfig {
    /// Filter tap coefficients
    pub taps: Vec<i32>,
    /// Input signal samples
    pub input: Vec<i32>,
}

impl Default for FirConfig {
    fn default() -> Self {
        Self {
            taps: TAPS.to_vec(),
            input: INPUT_SIGNAL.to_vec(),
        }
    }
}

impl FirConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FirError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| FirError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded {} taps and {} input samples from {}",
            config.taps.len(),
            config.input.len(),
            path.display()
        );
        Ok(config)
    }

    /// Coefficients as a fixed-length array
    ///
    /// # Errors
    /// Returns `FirError::LengthMismatch` unless there are exactly `N` taps
    pub fn taps_array<const N: usize>(&self) -> Result<[i32; N]> {
        to_array("taps", &self.taps)
    }

    /// Input signal as a fixed-length array
    ///
    /// # Errors
    /// Returns `FirError::LengthMismatch` unless there are exactly `N` samples
    pub fn input_array<const N: usize>(&self) -> Result<[i32; N]> {
        to_array("input", &self.input)
    }
}

fn to_array<const N: usize>(name: &'static str, values: &[i32]) -> Result<[i32; N]> {
    values.try_into().map_err(|_| FirError::LengthMismatch {
        name,
        expected: N,
        actual: values.len(),
    })
}

/// Parse a comma-separated sample list such as `"1, -2, 3"`
pub fn parse_samples(s: &str) -> Result<Vec<i32>> {
    s.split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<i32>()
                .map_err(|_| FirError::InvalidSample(p.to_string()))
        })
        .collect()
}
