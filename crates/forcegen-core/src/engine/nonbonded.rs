//! Generators for nonbonded parts: exponential repulsion and fixed point charges.

use super::args::FfArgs;
use super::error::{GeneratorError, GeneratorErrorKind};
use super::generator::{
    Coefficients, Conversions, Generator, GeneratorInfo, KeySymmetry, MixingRuleDef,
    ParameterTable, parse_float,
};
use crate::core::forcefield::pair::{
    ExpRepPotential, MixRuleKind, PairPart, PairPotKind, PairPotential,
};
use crate::core::forcefield::parts::{ForcePart, PartKind};
use crate::core::forcefield::scaling::Scalings;
use crate::core::io::pars::{ParsedLines, ParsedSection};
use crate::core::models::system::System;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpRepPars {
    pub a: f64,
    pub b: f64,
}

impl Coefficients for ExpRepPars {
    fn from_values(values: &[f64]) -> Self {
        Self {
            a: values[0],
            b: values[1],
        }
    }
}

/// Mixing rules accepted by [`ExpRep`].
pub const EXPREP_MIXING_RULES: &[MixingRuleDef] = &[
    MixingRuleDef {
        name: "A",
        rule: "GEOMETRIC",
        nargs: 0,
        kind: MixRuleKind::Plain,
    },
    MixingRuleDef {
        name: "A",
        rule: "GEOMETRIC_COR",
        nargs: 1,
        kind: MixRuleKind::Corrected,
    },
    MixingRuleDef {
        name: "B",
        rule: "ARITHMETIC",
        nargs: 0,
        kind: MixRuleKind::Plain,
    },
    MixingRuleDef {
        name: "B",
        rule: "ARITHMETIC_COR",
        nargs: 1,
        kind: MixRuleKind::Corrected,
    },
];

/// Exponential repulsion, `A * exp(-B * r)`, with per-atom `A` and `B` combined by
/// mixing rules.
pub struct ExpRep;

impl ExpRep {
    const INFO: &'static GeneratorInfo = &GeneratorInfo {
        prefix: "EXPREP",
        num_ffatypes: 1,
        par_names: &["A", "B"],
        commands: &["UNIT", "SCALE", "MIX", "PARS"],
        symmetry: KeySymmetry::Identity,
    };
}

impl Generator for ExpRep {
    fn info(&self) -> &'static GeneratorInfo {
        Self::INFO
    }

    fn generate(
        &self,
        system: &mut System,
        section: &ParsedSection,
        ff_args: &mut FfArgs,
    ) -> Result<(), GeneratorError> {
        let info = Self::INFO;
        info.check_commands(section)?;
        let conversions = info.process_units(&section.command("UNIT"))?;
        let table: ParameterTable<[String; 1], ExpRepPars> =
            info.process_pars(&section.command("PARS"), &conversions)?;
        let scale_table = info.process_scales(&section.command("SCALE"))?;
        let mixing = info.process_mix(&section.command("MIX"), EXPREP_MIXING_RULES)?;
        if ff_args.get_part_pair(PairPotKind::ExpRep).is_some() {
            return Err(GeneratorError::new(
                section.file_location(),
                GeneratorErrorKind::AlreadyPresent(PartKind::Pair(PairPotKind::ExpRep)),
            ));
        }

        let natom = system.natom();
        let mut amps = vec![0.0; natom];
        let mut bs = vec![0.0; natom];
        for atom in 0..natom {
            let ffatype = system.ffatype(atom);
            match table.get(&[ffatype.to_string()]) {
                Some(pars) => {
                    amps[atom] = pars.a;
                    bs[atom] = pars.b;
                }
                None => warn!(
                    "No EXPREP parameters found for atom {} with atom type {}",
                    atom, ffatype
                ),
            }
        }

        let scalings = Scalings::new(system.topology(), scale_table);
        let amp_rule = &mixing["A"];
        let b_rule = &mixing["B"];
        let pot = ExpRepPotential {
            amps,
            amp_mix: amp_rule.kind,
            amp_mix_coeff: amp_rule.coefficient(),
            bs,
            b_mix: b_rule.kind,
            b_mix_coeff: b_rule.coefficient(),
            rcut: ff_args.rcut(),
            smooth: ff_args.smooth(),
        };
        let nlists = ff_args.get_nlists(system);
        ff_args
            .add_part(ForcePart::Pair(PairPart::new(
                nlists,
                scalings,
                PairPotential::ExpRep(pot),
            )))
            .map_err(|kind| GeneratorError::new(section.file_location(), kind))
    }
}

/// Fixed point charges built from per-type charges and per-bond charge transfers,
/// evaluated as real-space electrostatics plus Ewald parts for periodic systems.
pub struct FixQ;

impl FixQ {
    const INFO: &'static GeneratorInfo = &GeneratorInfo {
        prefix: "FIXQ",
        num_ffatypes: 1,
        par_names: &["Q0", "P", "R"],
        commands: &["UNIT", "SCALE", "ATOM", "BOND", "DIELECTRIC"],
        symmetry: KeySymmetry::Identity,
    };

    /// `ATOM <ffatype> <q0> <radius>` lines: charge per atom type. Only point charges
    /// (zero radius) are supported.
    fn process_atoms(
        lines: &ParsedLines,
        conversions: &Conversions,
    ) -> Result<HashMap<String, f64>, GeneratorError> {
        let mut result: HashMap<String, f64> = HashMap::new();
        for (line, data) in lines.iter() {
            let fail = |kind| GeneratorError::new(lines.location(line), kind);
            let words: Vec<&str> = data.split_whitespace().collect();
            if words.len() != 3 {
                return Err(fail(GeneratorErrorKind::WrongArgumentCount {
                    command: "ATOM",
                    expected: 3,
                    found: words.len(),
                }));
            }
            let ffatype = words[0];
            if result.contains_key(ffatype) {
                return Err(fail(GeneratorErrorKind::DuplicateAtomType(
                    ffatype.to_string(),
                )));
            }
            let charge = parse_float(words[1]).map_err(fail)? * conversions.factor("Q0");
            let radius = parse_float(words[2]).map_err(fail)? * conversions.factor("R");
            if radius != 0.0 {
                return Err(fail(GeneratorErrorKind::NotImplemented(
                    "smeared charges with a nonzero radius".to_string(),
                )));
            }
            result.insert(ffatype.to_string(), charge);
        }
        Ok(result)
    }

    /// `BOND <ffatypeA> <ffatypeB> <p>` lines: charge transferred to `A` from `B`. The
    /// reversed pair stores `-p`, so a pair of identical types ends up with `-p`.
    fn process_bonds(
        lines: &ParsedLines,
        conversions: &Conversions,
    ) -> Result<HashMap<[String; 2], f64>, GeneratorError> {
        let mut result: HashMap<[String; 2], f64> = HashMap::new();
        for (line, data) in lines.iter() {
            let fail = |kind| GeneratorError::new(lines.location(line), kind);
            let words: Vec<&str> = data.split_whitespace().collect();
            if words.len() != 3 {
                return Err(fail(GeneratorErrorKind::WrongArgumentCount {
                    command: "BOND",
                    expected: 3,
                    found: words.len(),
                }));
            }
            let key = [words[0].to_string(), words[1].to_string()];
            if result.contains_key(&key) {
                return Err(fail(GeneratorErrorKind::DuplicateParameters(key.to_vec())));
            }
            let transfer = parse_float(words[2]).map_err(fail)? * conversions.factor("P");
            let reversed = [key[1].clone(), key[0].clone()];
            result.insert(key, transfer);
            result.insert(reversed, -transfer);
        }
        Ok(result)
    }

    /// The optional single `DIELECTRIC` line; only a relative permittivity of one is
    /// supported.
    fn process_dielectric(lines: &ParsedLines) -> Result<f64, GeneratorError> {
        let mut result = None;
        for (line, data) in lines.iter() {
            let fail = |kind| GeneratorError::new(lines.location(line), kind);
            if result.is_some() {
                return Err(fail(GeneratorErrorKind::RedundantCommand(
                    "DIELECTRIC".to_string(),
                )));
            }
            let words: Vec<&str> = data.split_whitespace().collect();
            if words.len() != 1 {
                return Err(fail(GeneratorErrorKind::WrongArgumentCount {
                    command: "DIELECTRIC",
                    expected: 1,
                    found: words.len(),
                }));
            }
            let dielectric = parse_float(words[0]).map_err(fail)?;
            if dielectric != 1.0 {
                return Err(fail(GeneratorErrorKind::NotImplemented(format!(
                    "relative dielectric constant {}, only 1 is supported",
                    dielectric
                ))));
            }
            result = Some(dielectric);
        }
        Ok(result.unwrap_or(1.0))
    }
}

impl Generator for FixQ {
    fn info(&self) -> &'static GeneratorInfo {
        Self::INFO
    }

    fn generate(
        &self,
        system: &mut System,
        section: &ParsedSection,
        ff_args: &mut FfArgs,
    ) -> Result<(), GeneratorError> {
        let info = Self::INFO;
        info.check_commands(section)?;
        let conversions = info.process_units(&section.command("UNIT"))?;
        let atom_table = Self::process_atoms(&section.command("ATOM"), &conversions)?;
        let bond_table = Self::process_bonds(&section.command("BOND"), &conversions)?;
        let scale_table = info.process_scales(&section.command("SCALE"))?;
        Self::process_dielectric(&section.command("DIELECTRIC"))?;

        let mut delta = vec![0.0; system.natom()];
        for (atom, charge) in delta.iter_mut().enumerate() {
            let ffatype = system.ffatype(atom);
            match atom_table.get(ffatype) {
                Some(&q0) => *charge += q0,
                None => warn!(
                    "No charge defined for atom {} with atom type {}",
                    atom, ffatype
                ),
            }
        }
        match system.topology() {
            Some(topology) => {
                for &[i0, i1] in topology.bonds() {
                    let key = [
                        system.ffatype(i0).to_string(),
                        system.ffatype(i1).to_string(),
                    ];
                    match bond_table.get(&key) {
                        Some(&transfer) => {
                            delta[i0] += transfer;
                            delta[i1] -= transfer;
                        }
                        None => warn!(
                            "No charge transfer parameter for atom pair ({},{}) with atom types ({},{})",
                            i0, i1, key[0], key[1]
                        ),
                    }
                }
            }
            None if !bond_table.is_empty() => {
                return Err(GeneratorError::new(
                    section.command("BOND").file_location(),
                    GeneratorErrorKind::MissingTopology {
                        prefix: info.prefix,
                    },
                ));
            }
            None => {}
        }

        if system
            .charges()
            .is_some_and(|charges| charges.iter().any(|&q| q != 0.0))
        {
            warn!("Adding charges to a system that already has charges");
        }
        for (charge, added) in system.charges_mut_or_zeros().iter_mut().zip(&delta) {
            *charge += added;
        }
        debug!("FIXQ: total charge {:.6}", delta.iter().sum::<f64>());

        let scalings = Scalings::new(system.topology(), scale_table);
        ff_args
            .add_electrostatic_parts(system, &scalings)
            .map_err(|kind| GeneratorError::new(section.file_location(), kind))
    }
}
