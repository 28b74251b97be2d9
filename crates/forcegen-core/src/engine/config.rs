use crate::core::units::{UnitError, parse_unit};
use thiserror::Error;

/// Default real-space cutoff: 10 angstrom, in bohr.
pub const DEFAULT_RCUT: f64 = 18.89726133921252;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Cutoff must be a positive finite distance, got {0}")]
    InvalidCutoff(f64),
    #[error("Invalid cutoff unit: {0}")]
    Unit(#[from] UnitError),
}

/// Global settings shared by every generator of one compilation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FfConfig {
    /// Real-space cutoff of all pair parts, in bohr.
    pub rcut: f64,
    /// Whether pair potentials are smoothly switched off at the cutoff.
    pub smooth: bool,
}

impl Default for FfConfig {
    fn default() -> Self {
        Self {
            rcut: DEFAULT_RCUT,
            smooth: true,
        }
    }
}

#[derive(Default)]
pub struct FfConfigBuilder {
    rcut: Option<f64>,
    rcut_unit: Option<String>,
    smooth: Option<bool>,
}

impl FfConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rcut(mut self, rcut: f64) -> Self {
        self.rcut = Some(rcut);
        self
    }
    /// Unit expression the cutoff value is given in; atomic units when omitted.
    pub fn rcut_unit(mut self, unit: impl Into<String>) -> Self {
        self.rcut_unit = Some(unit.into());
        self
    }
    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    pub fn build(self) -> Result<FfConfig, ConfigError> {
        let defaults = FfConfig::default();
        let rcut = match (self.rcut, self.rcut_unit) {
            (Some(value), Some(unit)) => value * parse_unit(&unit)?,
            (Some(value), None) => value,
            (None, Some(_)) => return Err(ConfigError::MissingParameter("rcut")),
            (None, None) => defaults.rcut,
        };
        if !rcut.is_finite() || rcut <= 0.0 {
            return Err(ConfigError::InvalidCutoff(rcut));
        }
        Ok(FfConfig {
            rcut,
            smooth: self.smooth.unwrap_or(defaults.smooth),
        })
    }
}
