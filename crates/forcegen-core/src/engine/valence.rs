//! Generators for bonded (valence) terms.
//!
//! All four share one pipeline: validate the section, build the parameter table, then
//! walk the bonds or bends of the topology and add one term per tuple whose atom types
//! have parameters. They differ only in the tuples they enumerate and in how the
//! coefficients become a potential.

use super::args::FfArgs;
use super::error::{GeneratorError, GeneratorErrorKind};
use super::generator::{
    Coefficients, FfKey, Generator, GeneratorInfo, KeySymmetry, ParameterTable,
};
use crate::core::forcefield::valence::{InternalCoordinate, ValencePotential, ValenceTerm};
use crate::core::io::pars::ParsedSection;
use crate::core::models::system::System;
use crate::core::models::topology::Topology;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondPars {
    pub k: f64,
    pub r0: f64,
}

impl Coefficients for BondPars {
    fn from_values(values: &[f64]) -> Self {
        Self {
            k: values[0],
            r0: values[1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendPars {
    pub k: f64,
    pub theta0: f64,
}

impl Coefficients for BendPars {
    fn from_values(values: &[f64]) -> Self {
        Self {
            k: values[0],
            theta0: values[1],
        }
    }
}

/// One family of valence terms.
pub trait ValenceGenerator {
    const INFO: &'static GeneratorInfo;

    type Key: FfKey;
    type Pars: Coefficients;
    type Indexes: AsRef<[usize]> + Copy;

    /// Atom tuples this family acts on, in enumeration order.
    fn iter_indexes(topology: &Topology) -> Vec<Self::Indexes>;

    fn make_term(indexes: Self::Indexes, pars: &Self::Pars) -> ValenceTerm;
}

fn iter_bonds(topology: &Topology) -> Vec<[usize; 2]> {
    topology.bonds().to_vec()
}

/// Every `(i0, i1, i2)` with `i0` and `i2` bonded to the central atom `i1` and `i0 > i2`.
fn iter_bends(topology: &Topology) -> Vec<[usize; 3]> {
    let mut bends = Vec::new();
    for i1 in 0..topology.natom() {
        let neighbors = topology.neighs1(i1);
        for &i0 in neighbors {
            for &i2 in neighbors {
                if i0 > i2 {
                    bends.push([i0, i1, i2]);
                }
            }
        }
    }
    bends
}

fn apply_valence<G: ValenceGenerator>(
    system: &mut System,
    section: &ParsedSection,
    ff_args: &mut FfArgs,
) -> Result<(), GeneratorError> {
    let info = G::INFO;
    info.check_commands(section)?;
    let conversions = info.process_units(&section.command("UNIT"))?;
    let table: ParameterTable<G::Key, G::Pars> =
        info.process_pars(&section.command("PARS"), &conversions)?;
    if table.is_empty() {
        debug!("{}: no parameters, nothing to generate", info.prefix);
        return Ok(());
    }

    let topology = system.topology().ok_or_else(|| {
        GeneratorError::new(
            section.file_location(),
            GeneratorErrorKind::MissingTopology {
                prefix: info.prefix,
            },
        )
    })?;

    let mut terms = Vec::new();
    let mut skipped = 0usize;
    for indexes in G::iter_indexes(topology) {
        let labels: Vec<&str> = indexes
            .as_ref()
            .iter()
            .map(|&atom| system.ffatype(atom))
            .collect();
        match table.get(&G::Key::from_words(&labels)) {
            Some(pars) => terms.push(G::make_term(indexes, pars)),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(
            "{}: skipped {} tuple(s) without parameters",
            info.prefix, skipped
        );
    }
    debug!("{}: adding {} term(s)", info.prefix, terms.len());

    let part = ff_args.get_part_valence(system);
    for term in terms {
        part.add_term(term);
    }
    Ok(())
}

const BOND_PAR_NAMES: &[&str] = &["K", "R0"];
const BEND_PAR_NAMES: &[&str] = &["K", "THETA0"];
const VALENCE_COMMANDS: &[&str] = &["UNIT", "PARS"];

/// Harmonic bond stretch, `0.5 * K * (r - R0)^2`.
pub struct BondHarm;

/// Fues bond stretch.
pub struct BondFues;

/// Harmonic in the bend angle.
pub struct BendAngleHarm;

/// Harmonic in the cosine of the bend angle, with rest value `cos(THETA0)`.
pub struct BendCosHarm;

impl ValenceGenerator for BondHarm {
    const INFO: &'static GeneratorInfo = &GeneratorInfo {
        prefix: "BONDHARM",
        num_ffatypes: 2,
        par_names: BOND_PAR_NAMES,
        commands: VALENCE_COMMANDS,
        symmetry: KeySymmetry::Reversible,
    };
    type Key = [String; 2];
    type Pars = BondPars;
    type Indexes = [usize; 2];

    fn iter_indexes(topology: &Topology) -> Vec<[usize; 2]> {
        iter_bonds(topology)
    }

    fn make_term([i0, i1]: [usize; 2], pars: &BondPars) -> ValenceTerm {
        ValenceTerm::new(
            ValencePotential::Harmonic {
                fc: pars.k,
                rv: pars.r0,
            },
            InternalCoordinate::Bond { i0, i1 },
        )
    }
}

impl ValenceGenerator for BondFues {
    const INFO: &'static GeneratorInfo = &GeneratorInfo {
        prefix: "BONDFUES",
        num_ffatypes: 2,
        par_names: BOND_PAR_NAMES,
        commands: VALENCE_COMMANDS,
        symmetry: KeySymmetry::Reversible,
    };
    type Key = [String; 2];
    type Pars = BondPars;
    type Indexes = [usize; 2];

    fn iter_indexes(topology: &Topology) -> Vec<[usize; 2]> {
        iter_bonds(topology)
    }

    fn make_term([i0, i1]: [usize; 2], pars: &BondPars) -> ValenceTerm {
        ValenceTerm::new(
            ValencePotential::Fues {
                fc: pars.k,
                rv: pars.r0,
            },
            InternalCoordinate::Bond { i0, i1 },
        )
    }
}

impl ValenceGenerator for BendAngleHarm {
    const INFO: &'static GeneratorInfo = &GeneratorInfo {
        prefix: "BENDAHARM",
        num_ffatypes: 3,
        par_names: BEND_PAR_NAMES,
        commands: VALENCE_COMMANDS,
        symmetry: KeySymmetry::Reversible,
    };
    type Key = [String; 3];
    type Pars = BendPars;
    type Indexes = [usize; 3];

    fn iter_indexes(topology: &Topology) -> Vec<[usize; 3]> {
        iter_bends(topology)
    }

    fn make_term([i0, i1, i2]: [usize; 3], pars: &BendPars) -> ValenceTerm {
        ValenceTerm::new(
            ValencePotential::Harmonic {
                fc: pars.k,
                rv: pars.theta0,
            },
            InternalCoordinate::BendAngle { i0, i1, i2 },
        )
    }
}

impl ValenceGenerator for BendCosHarm {
    const INFO: &'static GeneratorInfo = &GeneratorInfo {
        prefix: "BENDCHARM",
        num_ffatypes: 3,
        par_names: BEND_PAR_NAMES,
        commands: VALENCE_COMMANDS,
        symmetry: KeySymmetry::Reversible,
    };
    type Key = [String; 3];
    type Pars = BendPars;
    type Indexes = [usize; 3];

    fn iter_indexes(topology: &Topology) -> Vec<[usize; 3]> {
        iter_bends(topology)
    }

    fn make_term([i0, i1, i2]: [usize; 3], pars: &BendPars) -> ValenceTerm {
        ValenceTerm::new(
            ValencePotential::Harmonic {
                fc: pars.k,
                rv: pars.theta0.cos(),
            },
            InternalCoordinate::BendCos { i0, i1, i2 },
        )
    }
}

impl Generator for BondHarm {
    fn info(&self) -> &'static GeneratorInfo {
        Self::INFO
    }

    fn generate(
        &self,
        system: &mut System,
        section: &ParsedSection,
        ff_args: &mut FfArgs,
    ) -> Result<(), GeneratorError> {
        apply_valence::<Self>(system, section, ff_args)
    }
}

impl Generator for BondFues {
    fn info(&self) -> &'static GeneratorInfo {
        Self::INFO
    }

    fn generate(
        &self,
        system: &mut System,
        section: &ParsedSection,
        ff_args: &mut FfArgs,
    ) -> Result<(), GeneratorError> {
        apply_valence::<Self>(system, section, ff_args)
    }
}

impl Generator for BendAngleHarm {
    fn info(&self) -> &'static GeneratorInfo {
        Self::INFO
    }

    fn generate(
        &self,
        system: &mut System,
        section: &ParsedSection,
        ff_args: &mut FfArgs,
    ) -> Result<(), GeneratorError> {
        apply_valence::<Self>(system, section, ff_args)
    }
}

impl Generator for BendCosHarm {
    fn info(&self) -> &'static GeneratorInfo {
        Self::INFO
    }

    fn generate(
        &self,
        system: &mut System,
        section: &ParsedSection,
        ff_args: &mut FfArgs,
    ) -> Result<(), GeneratorError> {
        apply_valence::<Self>(system, section, ff_args)
    }
}
