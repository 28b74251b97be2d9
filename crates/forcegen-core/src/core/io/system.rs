use crate::core::models::cell::{Cell, CellError};
use crate::core::models::system::{System, SystemError};
use crate::core::models::topology::{Topology, TopologyError};
use crate::core::units::{UnitError, parse_unit};
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid cell unit: {0}")]
    Unit(#[from] UnitError),
    #[error("Invalid cell: {0}")]
    Cell(#[from] CellError),
    #[error("Invalid topology: {0}")]
    Topology(#[from] TopologyError),
    #[error("Invalid system: {0}")]
    System(#[from] SystemError),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct SystemFile {
    ffatypes: Vec<String>,
    bonds: Option<Vec<[usize; 2]>>,
    charges: Option<Vec<f64>>,
    #[serde(default)]
    cell: Vec<[f64; 3]>,
    /// Unit expression for the cell vectors; atomic units when omitted.
    unit: Option<String>,
}

/// Reads a [`System`] from a TOML description.
///
/// ```toml
/// ffatypes = ["O", "H", "H"]
/// bonds = [[0, 1], [0, 2]]
/// unit = "angstrom"
/// cell = [[10.0, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 10.0]]
/// ```
pub fn load_system(path: &Path) -> Result<System, SystemLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| SystemLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let file: SystemFile = toml::from_str(&content).map_err(|e| SystemLoadError::Toml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    build_system(file)
}

/// Same as [`load_system`] for TOML text already in memory.
pub fn parse_system(content: &str) -> Result<System, SystemLoadError> {
    let file: SystemFile = toml::from_str(content).map_err(|e| SystemLoadError::Toml {
        path: "<memory>".to_string(),
        source: e,
    })?;
    build_system(file)
}

fn build_system(file: SystemFile) -> Result<System, SystemLoadError> {
    let factor = match &file.unit {
        Some(unit) => parse_unit(unit)?,
        None => 1.0,
    };
    let rvecs = file
        .cell
        .iter()
        .map(|v| Vector3::new(v[0], v[1], v[2]) * factor)
        .collect();
    let cell = Cell::new(rvecs)?;
    let topology = file
        .bonds
        .map(|bonds| Topology::new(file.ffatypes.len(), &bonds))
        .transpose()?;
    let system = System::new(file.ffatypes, topology, cell)?;
    Ok(match file.charges {
        Some(charges) => system.with_charges(charges)?,
        None => system,
    })
}
