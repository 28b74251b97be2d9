use super::cell::Cell;
use super::topology::Topology;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SystemError {
    #[error("Topology describes {topology} atoms but the system has {natom}")]
    TopologySize { natom: usize, topology: usize },
    #[error("Expected {natom} charges, got {got}")]
    ChargeCount { natom: usize, got: usize },
}

/// The molecular system a parameter file is applied to.
///
/// Each atom carries a force-field atom type label. The bonded topology is optional:
/// valence generators require it, nonbonded generators only use it for exclusion
/// scalings. Charges start out absent and are created by the first generator that
/// assigns them.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    ffatypes: Vec<String>,
    topology: Option<Topology>,
    cell: Cell,
    charges: Option<Vec<f64>>,
}

impl System {
    pub fn new(
        ffatypes: Vec<String>,
        topology: Option<Topology>,
        cell: Cell,
    ) -> Result<Self, SystemError> {
        if let Some(topology) = &topology {
            if topology.natom() != ffatypes.len() {
                return Err(SystemError::TopologySize {
                    natom: ffatypes.len(),
                    topology: topology.natom(),
                });
            }
        }
        Ok(Self {
            ffatypes,
            topology,
            cell,
            charges: None,
        })
    }

    /// Attaches pre-existing per-atom charges.
    pub fn with_charges(mut self, charges: Vec<f64>) -> Result<Self, SystemError> {
        if charges.len() != self.natom() {
            return Err(SystemError::ChargeCount {
                natom: self.natom(),
                got: charges.len(),
            });
        }
        self.charges = Some(charges);
        Ok(self)
    }

    pub fn natom(&self) -> usize {
        self.ffatypes.len()
    }

    pub fn ffatype(&self, atom: usize) -> &str {
        &self.ffatypes[atom]
    }

    pub fn ffatypes(&self) -> &[String] {
        &self.ffatypes
    }

    pub fn topology(&self) -> Option<&Topology> {
        self.topology.as_ref()
    }

    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn charges(&self) -> Option<&[f64]> {
        self.charges.as_deref()
    }

    /// Returns the charge array, creating it filled with zeros if absent.
    pub fn charges_mut_or_zeros(&mut self) -> &mut Vec<f64> {
        let natom = self.natom();
        self.charges.get_or_insert_with(|| vec![0.0; natom])
    }
}
