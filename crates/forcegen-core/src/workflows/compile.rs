use crate::core::forcefield::field::ForceField;
use crate::core::io::pars::{ParsError, ParsedPars};
use crate::core::models::system::System;
use crate::engine::args::FfArgs;
use crate::engine::config::{ConfigError, FfConfig};
use crate::engine::error::GeneratorError;
use crate::engine::generator::Generator;
use crate::engine::registry::{generator, generators};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Parameter file error: {0}")]
    Pars(#[from] ParsError),
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Compiles `pars` for `system` into a force field.
///
/// Every prefix with a registered generator is applied, in registry order; prefixes
/// nobody owns are reported and ignored. The system's charges are updated in place by
/// charge-assigning generators. The first error aborts the compilation.
#[instrument(skip_all, name = "compile_workflow")]
pub fn compile(
    system: &mut System,
    pars: &ParsedPars,
    config: &FfConfig,
) -> Result<ForceField, CompileError> {
    info!(
        "Compiling force field from {} for {} atoms.",
        pars.file(),
        system.natom()
    );
    for prefix in pars.prefixes() {
        if generator(prefix).is_none() {
            warn!(
                "No generator registered for prefix {} in {}; its lines are ignored.",
                prefix,
                pars.file()
            );
        }
    }
    let force_field = apply_generators(system, pars, config, generators())?;
    info!("{}", force_field.summary());
    Ok(force_field)
}

/// Loads the parameter file at `path` and compiles it, see [`compile`].
pub fn compile_file(
    system: &mut System,
    path: &Path,
    config: &FfConfig,
) -> Result<ForceField, CompileError> {
    let pars = ParsedPars::load(path)?;
    compile(system, &pars, config)
}

fn apply_generators<'a>(
    system: &mut System,
    pars: &ParsedPars,
    config: &FfConfig,
    order: impl IntoIterator<Item = &'a dyn Generator>,
) -> Result<ForceField, GeneratorError> {
    let mut ff_args = FfArgs::new(config);
    for generator in order {
        let prefix = generator.prefix();
        if !pars.contains(prefix) {
            continue;
        }
        debug!("Applying generator {}", prefix);
        generator.generate(system, &pars.section(prefix), &mut ff_args)?;
    }
    Ok(ff_args.into_force_field())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::pair::PairPotKind;
    use crate::core::forcefield::parts::PartKind;
    use crate::core::forcefield::valence::{IcKind, PotentialKind};
    use crate::core::models::cell::Cell;
    use crate::core::models::topology::Topology;
    use crate::engine::error::GeneratorErrorKind;
    use std::fs;
    use tempfile::tempdir;

    const WATER_PARS: &str = "\
# Bond stretch
BONDHARM: UNIT K kjmol/angstrom**2
BONDHARM: UNIT R0 angstrom
BONDHARM: PARS O H 4000.0 0.96

BONDFUES: UNIT K kjmol/angstrom**2
BONDFUES: UNIT R0 angstrom
BONDFUES: PARS O H 100.0 0.96

BENDAHARM: UNIT K kjmol/rad**2
BENDAHARM: UNIT THETA0 deg
BENDAHARM: PARS H O H 300.0 104.5

BENDCHARM: UNIT K kjmol
BENDCHARM: UNIT THETA0 deg
BENDCHARM: PARS H O H 30.0 104.5

EXPREP: UNIT A kjmol
EXPREP: UNIT B 1/angstrom
EXPREP: SCALE 1 0.0
EXPREP: SCALE 2 0.0
EXPREP: SCALE 3 1.0
EXPREP: MIX A GEOMETRIC
EXPREP: MIX B ARITHMETIC
EXPREP: PARS O 1.0e5 4.0
EXPREP: PARS H 1.0e3 4.5

FIXQ: UNIT Q0 e
FIXQ: UNIT P e
FIXQ: UNIT R angstrom
FIXQ: SCALE 1 0.0
FIXQ: SCALE 2 0.0
FIXQ: SCALE 3 1.0
FIXQ: ATOM O 0.0 0.0
FIXQ: ATOM H 0.0 0.0
FIXQ: BOND H O 0.4
";

    fn water(cell: Cell) -> System {
        let ffatypes = ["O", "H", "H"].iter().map(|s| s.to_string()).collect();
        let topology = Topology::new(3, &[[0, 1], [0, 2]]).unwrap();
        System::new(ffatypes, Some(topology), cell).unwrap()
    }

    fn parse(text: &str) -> ParsedPars {
        ParsedPars::parse_str(text, "water.pars").unwrap()
    }

    #[test]
    fn compiles_every_section() {
        let mut system = water(Cell::cubic(40.0).unwrap());
        let ff = compile(&mut system, &parse(WATER_PARS), &FfConfig::default()).unwrap();

        let kinds: Vec<_> = ff.parts().iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                PartKind::Valence,
                PartKind::Pair(PairPotKind::Ei),
                PartKind::Pair(PairPotKind::ExpRep),
                PartKind::EwaldReciprocal,
                PartKind::EwaldCorrection,
                PartKind::EwaldNeutralizing,
            ]
        );
        let summary = ff.summary();
        assert_eq!(
            summary.valence_terms[&(PotentialKind::Harmonic, IcKind::Bond)],
            2
        );
        assert_eq!(summary.valence_terms[&(PotentialKind::Fues, IcKind::Bond)], 2);
        assert_eq!(
            summary.valence_terms[&(PotentialKind::Harmonic, IcKind::BendAngle)],
            1
        );
        assert_eq!(
            summary.valence_terms[&(PotentialKind::Harmonic, IcKind::BendCos)],
            1
        );

        let charges = system.charges().unwrap();
        assert!((charges[0] + 0.8).abs() < 1e-12);
        assert!((charges[1] - 0.4).abs() < 1e-12);
        assert_eq!(ff.nlists().unwrap().nvec, 3);
    }

    #[test]
    fn generator_order_does_not_change_the_result() {
        let pars = parse(WATER_PARS);
        let config = FfConfig::default();

        let mut forward_system = water(Cell::cubic(40.0).unwrap());
        let forward =
            apply_generators(&mut forward_system, &pars, &config, generators()).unwrap();

        let mut reversed_system = water(Cell::cubic(40.0).unwrap());
        let reversed_order: Vec<_> = generators().collect::<Vec<_>>().into_iter().rev().collect();
        let reversed =
            apply_generators(&mut reversed_system, &pars, &config, reversed_order).unwrap();

        assert_eq!(forward, reversed);
        assert_eq!(forward_system, reversed_system);
    }

    #[test]
    fn unknown_prefixes_are_ignored() {
        let text = format!("{}TORSION: PARS H O O H 1.0\n", WATER_PARS);
        let mut system = water(Cell::default());
        let ff = compile(&mut system, &parse(&text), &FfConfig::default()).unwrap();
        assert!(ff.part(PartKind::EwaldReciprocal).is_none());
        assert!(ff.pair(PairPotKind::Ei).is_some());
    }

    #[test]
    fn generator_errors_abort_with_location() {
        let text = "BONDHARM: UNIT K au\nBONDHARM: UNIT R0 au\nBONDHARM: PARS O H 1.0\n";
        let mut system = water(Cell::default());
        let err = compile(&mut system, &parse(text), &FfConfig::default()).unwrap_err();
        match err {
            CompileError::Generator(err) => {
                assert_eq!(err.location.line, Some(3));
                assert!(matches!(
                    err.kind,
                    GeneratorErrorKind::WrongArgumentCount { .. }
                ));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn config_reaches_pair_parts() {
        let mut system = water(Cell::default());
        let config = FfConfig {
            rcut: 12.0,
            smooth: false,
        };
        let ff = compile(&mut system, &parse(WATER_PARS), &config).unwrap();
        assert_eq!(ff.rcut(), 12.0);
        assert!(!ff.smooth());
        assert_eq!(ff.pair(PairPotKind::ExpRep).unwrap().pot.rcut(), 12.0);
    }

    #[test]
    fn compile_file_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("water.pars");
        fs::write(&path, WATER_PARS).unwrap();
        let mut system = water(Cell::default());
        let ff = compile_file(&mut system, &path, &FfConfig::default()).unwrap();
        assert!(ff.valence().is_some());

        let missing = dir.path().join("missing.pars");
        assert!(matches!(
            compile_file(&mut system, &missing, &FfConfig::default()),
            Err(CompileError::Pars(ParsError::Io { .. }))
        ));
    }
}
