use super::config::FfConfig;
use super::error::GeneratorErrorKind;
use crate::core::forcefield::ewald::{EwaldCorrection, EwaldNeutralizing, EwaldReciprocal};
use crate::core::forcefield::field::ForceField;
use crate::core::forcefield::nlist::NeighborLists;
use crate::core::forcefield::pair::{EiPotential, PairPart, PairPotKind, PairPotential};
use crate::core::forcefield::parts::{ForcePart, PartKind};
use crate::core::forcefield::scaling::Scalings;
use crate::core::forcefield::valence::ValencePart;
use crate::core::models::system::System;
use std::rc::Rc;
use tracing::debug;

/// Accumulator threaded through every generator of one compilation.
///
/// Holds at most one part of each [`PartKind`]. Generators find or create the parts
/// they contribute to, which keeps the final result independent of the order in which
/// they run.
#[derive(Debug, Clone, PartialEq)]
pub struct FfArgs {
    parts: Vec<ForcePart>,
    nlists: Option<Rc<NeighborLists>>,
    rcut: f64,
    smooth: bool,
}

impl Default for FfArgs {
    fn default() -> Self {
        Self::new(&FfConfig::default())
    }
}

impl FfArgs {
    pub fn new(config: &FfConfig) -> Self {
        Self {
            parts: Vec::new(),
            nlists: None,
            rcut: config.rcut,
            smooth: config.smooth,
        }
    }

    pub fn rcut(&self) -> f64 {
        self.rcut
    }

    pub fn smooth(&self) -> bool {
        self.smooth
    }

    pub fn parts(&self) -> &[ForcePart] {
        &self.parts
    }

    /// Neighbor lists shared by all pair parts, created on first request.
    pub fn get_nlists(&mut self, system: &System) -> Rc<NeighborLists> {
        self.nlists
            .get_or_insert_with(|| Rc::new(NeighborLists::new(system)))
            .clone()
    }

    pub fn get_part(&self, kind: PartKind) -> Option<&ForcePart> {
        self.parts.iter().find(|part| part.kind() == kind)
    }

    pub fn get_part_pair(&self, kind: PairPotKind) -> Option<&PairPart> {
        self.get_part(PartKind::Pair(kind))
            .and_then(ForcePart::as_pair)
    }

    /// The valence part all bonded generators add their terms to, created on first use.
    pub fn get_part_valence(&mut self, system: &System) -> &mut ValencePart {
        let index = match self
            .parts
            .iter()
            .position(|part| part.kind() == PartKind::Valence)
        {
            Some(index) => index,
            None => {
                self.parts
                    .push(ForcePart::Valence(ValencePart::new(system.natom())));
                self.parts.len() - 1
            }
        };
        match &mut self.parts[index] {
            ForcePart::Valence(part) => part,
            _ => unreachable!("part tagged as valence holds another variant"),
        }
    }

    /// Appends `part`, refusing a second part of the same kind.
    pub fn add_part(&mut self, part: ForcePart) -> Result<(), GeneratorErrorKind> {
        let kind = part.kind();
        if self.get_part(kind).is_some() {
            return Err(GeneratorErrorKind::AlreadyPresent(kind));
        }
        debug!("Adding {} part", kind);
        self.parts.push(part);
        Ok(())
    }

    /// Adds real-space electrostatics and, for three-dimensional cells, the Ewald
    /// reciprocal, correction and neutralizing parts. Does nothing when electrostatics
    /// were already requested.
    ///
    /// All parts take a snapshot of the system's current charges.
    pub fn add_electrostatic_parts(
        &mut self,
        system: &System,
        scalings: &Scalings,
    ) -> Result<(), GeneratorErrorKind> {
        if self.get_part_pair(PairPotKind::Ei).is_some() {
            return Ok(());
        }
        let alpha = match system.cell().nvec() {
            0 => 0.0,
            3 => 4.5 / self.rcut,
            nvec => return Err(GeneratorErrorKind::UnsupportedDimensionality(nvec)),
        };
        let charges = system
            .charges()
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| vec![0.0; system.natom()]);

        let nlists = self.get_nlists(system);
        let pot = PairPotential::Ei(EiPotential {
            charges: charges.clone(),
            alpha,
            rcut: self.rcut,
        });
        self.add_part(ForcePart::Pair(PairPart::new(
            nlists,
            scalings.clone(),
            pot,
        )))?;

        if system.cell().nvec() == 3 {
            self.add_part(ForcePart::EwaldReciprocal(EwaldReciprocal {
                charges: charges.clone(),
                alpha,
                gcut: alpha / 0.75,
            }))?;
            self.add_part(ForcePart::EwaldCorrection(EwaldCorrection {
                charges: charges.clone(),
                alpha,
                scalings: scalings.clone(),
            }))?;
            self.add_part(ForcePart::EwaldNeutralizing(EwaldNeutralizing {
                charges,
                alpha,
            }))?;
        }
        Ok(())
    }

    /// Finishes the compilation: parts are ordered by kind and valence terms grouped by
    /// potential and internal coordinate.
    pub fn into_force_field(mut self) -> ForceField {
        self.parts.sort_by_key(ForcePart::kind);
        for part in &mut self.parts {
            if let ForcePart::Valence(valence) = part {
                valence.sort_by_group();
            }
        }
        ForceField {
            parts: self.parts,
            nlists: self.nlists,
            rcut: self.rcut,
            smooth: self.smooth,
        }
    }
}
