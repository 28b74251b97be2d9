//! The generator contract and the section validators every generator shares.
//!
//! A generator owns one prefix of the parameter file. Its fixed metadata lives in a
//! [`GeneratorInfo`], which also carries the validators that turn the raw `(line, data)`
//! entries of the common commands (`UNIT`, `PARS`, `SCALE`, `MIX`) into typed tables.

use super::args::FfArgs;
use super::error::{GeneratorError, GeneratorErrorKind};
use crate::core::forcefield::pair::MixRuleKind;
use crate::core::forcefield::scaling::ScaleTable;
use crate::core::io::pars::{ParsedLines, ParsedSection};
use crate::core::models::system::System;
use crate::core::units::parse_unit;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// Turns one labeled section of a parameter file into force-field parts.
///
/// Implementations must not depend on the order in which generators run: parts are
/// obtained through the find-or-create operations of [`FfArgs`] and charges are only
/// ever added to.
pub trait Generator: Sync {
    fn info(&self) -> &'static GeneratorInfo;

    fn generate(
        &self,
        system: &mut System,
        section: &ParsedSection,
        ff_args: &mut FfArgs,
    ) -> Result<(), GeneratorError>;

    fn prefix(&self) -> &'static str {
        self.info().prefix
    }
}

/// Whether permutations of an atom-type key address the same parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySymmetry {
    /// Only the key as written.
    Identity,
    /// The key and its reverse, e.g. `(A, B)` and `(B, A)`.
    Reversible,
}

/// Immutable metadata of a generator.
#[derive(Debug)]
pub struct GeneratorInfo {
    pub prefix: &'static str,
    /// Number of atom-type tokens in a `PARS` key.
    pub num_ffatypes: usize,
    /// Coefficient names, in the order they appear on a `PARS` line.
    pub par_names: &'static [&'static str],
    pub commands: &'static [&'static str],
    pub symmetry: KeySymmetry,
}

/// Fixed-size atom-type key of a parameter table.
pub trait FfKey: Clone + Eq + Hash + Debug {
    const ARITY: usize;

    /// Builds the key from exactly [`Self::ARITY`] tokens.
    fn from_words(words: &[&str]) -> Self;

    fn reversed(&self) -> Self;

    fn labels(&self) -> Vec<String>;
}

impl<const N: usize> FfKey for [String; N] {
    const ARITY: usize = N;

    fn from_words(words: &[&str]) -> Self {
        std::array::from_fn(|i| words[i].to_string())
    }

    fn reversed(&self) -> Self {
        let mut key = self.clone();
        key.reverse();
        key
    }

    fn labels(&self) -> Vec<String> {
        self.to_vec()
    }
}

/// Fixed-size tuple of converted coefficients, in `par_names` order.
pub trait Coefficients: Copy + Debug {
    fn from_values(values: &[f64]) -> Self;
}

/// Conversion factor to atomic units for every coefficient name of a generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversions {
    factors: HashMap<&'static str, f64>,
}

impl Conversions {
    /// Factor of `name`; every name of the generator is present once units were processed.
    pub fn factor(&self, name: &str) -> f64 {
        self.factors[name]
    }
}

/// Coefficients per canonical atom-type key.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTable<K: FfKey, P> {
    entries: HashMap<K, P>,
}

impl<K: FfKey, P> ParameterTable<K, P> {
    pub fn get(&self, key: &K) -> Option<&P> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored keys, counting symmetric variants separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One allowed `(parameter, rule)` combination of a generator's mixing-rule catalog.
#[derive(Debug, Clone, Copy)]
pub struct MixingRuleDef {
    pub name: &'static str,
    pub rule: &'static str,
    pub nargs: usize,
    pub kind: MixRuleKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixingRule {
    pub kind: MixRuleKind,
    pub args: Vec<f64>,
}

impl MixingRule {
    /// Correction coefficient of the rule; plain rules have none and use `0.0`.
    pub fn coefficient(&self) -> f64 {
        match self.kind {
            MixRuleKind::Plain => 0.0,
            MixRuleKind::Corrected => self.args[0],
        }
    }
}

pub type MixingSpec = HashMap<&'static str, MixingRule>;

pub(crate) fn parse_float(word: &str) -> Result<f64, GeneratorErrorKind> {
    word.parse::<f64>()
        .map_err(|_| GeneratorErrorKind::MalformedNumber(word.to_string()))
}

impl GeneratorInfo {
    fn par_name(&self, name: &str) -> Result<&'static str, GeneratorErrorKind> {
        self.par_names
            .iter()
            .copied()
            .find(|candidate| *candidate == name)
            .ok_or_else(|| GeneratorErrorKind::UnknownParameter {
                name: name.to_string(),
                expected: self.par_names,
            })
    }

    /// Fails on the first command of `section` this generator does not know.
    pub fn check_commands(&self, section: &ParsedSection) -> Result<(), GeneratorError> {
        for command in section.commands() {
            if !self.commands.contains(&command) {
                return Err(GeneratorError::new(
                    section.file_location(),
                    GeneratorErrorKind::UnrecognizedCommand {
                        command: command.to_string(),
                        prefix: self.prefix,
                    },
                ));
            }
        }
        Ok(())
    }

    /// Parses `UNIT <name> <unit>` lines into one conversion factor per coefficient.
    pub fn process_units(&self, lines: &ParsedLines) -> Result<Conversions, GeneratorError> {
        let mut factors: HashMap<&'static str, f64> = HashMap::new();
        for (line, data) in lines.iter() {
            let fail = |kind| GeneratorError::new(lines.location(line), kind);
            let words: Vec<&str> = data.split_whitespace().collect();
            if words.len() != 2 {
                return Err(fail(GeneratorErrorKind::MalformedUnitLine));
            }
            let name = self.par_name(&words[0].to_uppercase()).map_err(fail)?;
            let factor = parse_unit(words[1])
                .map_err(|e| fail(GeneratorErrorKind::UnknownUnit(e)))?;
            if factors.insert(name, factor).is_some() {
                return Err(fail(GeneratorErrorKind::RedundantCommand(format!(
                    "UNIT {}",
                    name
                ))));
            }
        }
        let missing: Vec<_> = self
            .par_names
            .iter()
            .copied()
            .filter(|name| !factors.contains_key(name))
            .collect();
        if !missing.is_empty() {
            return Err(GeneratorError::new(
                lines.file_location(),
                GeneratorErrorKind::IncompleteUnits {
                    prefix: self.prefix,
                    missing,
                },
            ));
        }
        Ok(Conversions { factors })
    }

    /// Every key under which parameters given for `key` must be stored.
    pub fn alt_keys<K: FfKey>(&self, key: K) -> Vec<K> {
        match self.symmetry {
            KeySymmetry::Identity => vec![key],
            KeySymmetry::Reversible => {
                let reversed = key.reversed();
                if reversed == key {
                    vec![key]
                } else {
                    vec![key, reversed]
                }
            }
        }
    }

    /// Parses `PARS <ffatype>... <value>...` lines into a parameter table, applying the
    /// unit conversions and storing every symmetric variant of each key.
    pub fn process_pars<K: FfKey, P: Coefficients>(
        &self,
        lines: &ParsedLines,
        conversions: &Conversions,
    ) -> Result<ParameterTable<K, P>, GeneratorError> {
        debug_assert_eq!(K::ARITY, self.num_ffatypes);
        let num_args = self.num_ffatypes + self.par_names.len();
        let mut entries: HashMap<K, P> = HashMap::new();
        for (line, data) in lines.iter() {
            let fail = |kind| GeneratorError::new(lines.location(line), kind);
            let words: Vec<&str> = data.split_whitespace().collect();
            if words.len() != num_args {
                return Err(fail(GeneratorErrorKind::WrongArgumentCount {
                    command: "PARS",
                    expected: num_args,
                    found: words.len(),
                }));
            }
            let key = K::from_words(&words[..self.num_ffatypes]);
            let values = self
                .par_names
                .iter()
                .zip(&words[self.num_ffatypes..])
                .map(|(name, word)| parse_float(word).map(|v| v * conversions.factor(name)))
                .collect::<Result<Vec<f64>, _>>()
                .map_err(fail)?;
            if entries.contains_key(&key) {
                return Err(fail(GeneratorErrorKind::DuplicateParameters(key.labels())));
            }
            let pars = P::from_values(&values);
            for alt in self.alt_keys(key) {
                entries.insert(alt, pars);
            }
        }
        Ok(ParameterTable { entries })
    }

    /// Parses `SCALE <nbond> <scale>` lines; bond distances 1, 2 and 3 must each be
    /// given exactly once.
    pub fn process_scales(&self, lines: &ParsedLines) -> Result<ScaleTable, GeneratorError> {
        let mut scales: BTreeMap<usize, f64> = BTreeMap::new();
        for (line, data) in lines.iter() {
            let fail = |kind| GeneratorError::new(lines.location(line), kind);
            let words: Vec<&str> = data.split_whitespace().collect();
            if words.len() != 2 {
                return Err(fail(GeneratorErrorKind::WrongArgumentCount {
                    command: "SCALE",
                    expected: 2,
                    found: words.len(),
                }));
            }
            let nbond = words[0]
                .parse::<usize>()
                .map_err(|_| fail(GeneratorErrorKind::MalformedInteger(words[0].to_string())))?;
            let scale = parse_float(words[1]).map_err(fail)?;
            if scales.contains_key(&nbond) {
                return Err(fail(GeneratorErrorKind::DuplicateScale(nbond)));
            }
            if !(0.0..=1.0).contains(&scale) {
                return Err(fail(GeneratorErrorKind::ScaleOutOfRange(scale)));
            }
            scales.insert(nbond, scale);
        }
        match (scales.len(), scales.get(&1), scales.get(&2), scales.get(&3)) {
            (3, Some(&s1), Some(&s2), Some(&s3)) => Ok(ScaleTable::new(s1, s2, s3)),
            _ => Err(GeneratorError::new(
                lines.file_location(),
                GeneratorErrorKind::IncompleteScales,
            )),
        }
    }

    /// Parses `MIX <name> <rule> <arg>...` lines against `catalog`. Every parameter
    /// named in the catalog needs exactly one rule.
    pub fn process_mix(
        &self,
        lines: &ParsedLines,
        catalog: &[MixingRuleDef],
    ) -> Result<MixingSpec, GeneratorError> {
        let mut spec = MixingSpec::new();
        for (line, data) in lines.iter() {
            let fail = |kind| GeneratorError::new(lines.location(line), kind);
            let words: Vec<&str> = data.split_whitespace().collect();
            if words.len() < 2 {
                return Err(fail(GeneratorErrorKind::TooFewMixingArguments));
            }
            let name = self.par_name(&words[0].to_uppercase()).map_err(fail)?;
            let rule = words[1].to_uppercase();
            let def = catalog
                .iter()
                .find(|def| def.name == name && def.rule == rule)
                .ok_or_else(|| {
                    fail(GeneratorErrorKind::UnknownMixingRule {
                        name: name.to_string(),
                        rule: rule.clone(),
                    })
                })?;
            if words.len() - 2 != def.nargs {
                return Err(fail(GeneratorErrorKind::WrongMixingArgumentCount {
                    rule,
                    expected: def.nargs,
                    found: words.len() - 2,
                }));
            }
            let args = words[2..]
                .iter()
                .map(|word| parse_float(word))
                .collect::<Result<Vec<f64>, _>>()
                .map_err(fail)?;
            if spec.contains_key(name) {
                return Err(fail(GeneratorErrorKind::RedundantCommand(format!(
                    "MIX {}",
                    name
                ))));
            }
            spec.insert(
                name,
                MixingRule {
                    kind: def.kind,
                    args,
                },
            );
        }
        let mut missing: Vec<&'static str> = catalog
            .iter()
            .map(|def| def.name)
            .filter(|name| !spec.contains_key(name))
            .collect();
        missing.dedup();
        if !missing.is_empty() {
            return Err(GeneratorError::new(
                lines.file_location(),
                GeneratorErrorKind::IncompleteMixingRules {
                    prefix: self.prefix,
                    missing,
                },
            ));
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::pars::ParsedPars;

    static PAIR_INFO: GeneratorInfo = GeneratorInfo {
        prefix: "TESTPAIR",
        num_ffatypes: 2,
        par_names: &["K", "R0"],
        commands: &["UNIT", "PARS"],
        symmetry: KeySymmetry::Reversible,
    };

    static ATOM_INFO: GeneratorInfo = GeneratorInfo {
        prefix: "TESTATOM",
        num_ffatypes: 1,
        par_names: &["A", "B"],
        commands: &["UNIT", "PARS", "SCALE", "MIX"],
        symmetry: KeySymmetry::Identity,
    };

    static CATALOG: [MixingRuleDef; 3] = [
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
    ];

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Pair {
        k: f64,
        r0: f64,
    }

    impl Coefficients for Pair {
        fn from_values(values: &[f64]) -> Self {
            Self {
                k: values[0],
                r0: values[1],
            }
        }
    }

    fn lines(prefix: &str, command: &str, text: &str) -> ParsedLines {
        ParsedPars::parse_str(text, "test.pars")
            .unwrap()
            .section(prefix)
            .command(command)
    }

    fn kind_at(result: Result<impl Debug, GeneratorError>) -> (Option<usize>, GeneratorErrorKind) {
        let err = result.unwrap_err();
        (err.location.line, err.kind)
    }

    fn unit_conversions() -> Conversions {
        PAIR_INFO
            .process_units(&lines(
                "TESTPAIR",
                "UNIT",
                "TESTPAIR: UNIT K kjmol\nTESTPAIR: UNIT R0 angstrom",
            ))
            .unwrap()
    }

    fn key(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    #[test]
    fn check_commands_rejects_unknown_command() {
        let pars =
            ParsedPars::parse_str("TESTPAIR: UNIT K au\nTESTPAIR: FOO bar", "test.pars").unwrap();
        let err = PAIR_INFO
            .check_commands(&pars.section("TESTPAIR"))
            .unwrap_err();
        assert_eq!(
            err.kind,
            GeneratorErrorKind::UnrecognizedCommand {
                command: "FOO".to_string(),
                prefix: "TESTPAIR"
            }
        );
        assert_eq!(err.location.line, None);
    }

    #[test]
    fn process_units_resolves_each_parameter() {
        let conversions = unit_conversions();
        assert_eq!(conversions.factor("K"), parse_unit("kjmol").unwrap());
        assert_eq!(conversions.factor("R0"), parse_unit("angstrom").unwrap());
    }

    #[test]
    fn process_units_accepts_lowercase_names() {
        let result = PAIR_INFO.process_units(&lines(
            "TESTPAIR",
            "UNIT",
            "TESTPAIR: UNIT k au\nTESTPAIR: UNIT r0 au",
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn process_units_rejects_malformed_lines() {
        let result = PAIR_INFO.process_units(&lines("TESTPAIR", "UNIT", "TESTPAIR: UNIT K"));
        assert_eq!(kind_at(result), (Some(1), GeneratorErrorKind::MalformedUnitLine));
    }

    #[test]
    fn process_units_rejects_unknown_parameter_and_unit() {
        let result = PAIR_INFO.process_units(&lines("TESTPAIR", "UNIT", "TESTPAIR: UNIT Q au"));
        assert!(matches!(
            kind_at(result),
            (Some(1), GeneratorErrorKind::UnknownParameter { .. })
        ));

        let result = PAIR_INFO.process_units(&lines(
            "TESTPAIR",
            "UNIT",
            "TESTPAIR: UNIT K au\nTESTPAIR: UNIT R0 lightyear",
        ));
        assert!(matches!(
            kind_at(result),
            (Some(2), GeneratorErrorKind::UnknownUnit(_))
        ));
    }

    #[test]
    fn process_units_requires_every_parameter_exactly_once() {
        let result = PAIR_INFO.process_units(&lines("TESTPAIR", "UNIT", "TESTPAIR: UNIT K au"));
        assert_eq!(
            kind_at(result),
            (
                None,
                GeneratorErrorKind::IncompleteUnits {
                    prefix: "TESTPAIR",
                    missing: vec!["R0"]
                }
            )
        );

        let result = PAIR_INFO.process_units(&lines(
            "TESTPAIR",
            "UNIT",
            "TESTPAIR: UNIT K au\nTESTPAIR: UNIT K kjmol\nTESTPAIR: UNIT R0 au",
        ));
        assert_eq!(
            kind_at(result),
            (
                Some(2),
                GeneratorErrorKind::RedundantCommand("UNIT K".to_string())
            )
        );
    }

    #[test]
    fn process_pars_converts_and_symmetrizes_keys() {
        let conversions = unit_conversions();
        let table: ParameterTable<[String; 2], Pair> = PAIR_INFO
            .process_pars(
                &lines("TESTPAIR", "PARS", "TESTPAIR: PARS C H 2.0 1.1"),
                &conversions,
            )
            .unwrap();
        let expected = Pair {
            k: 2.0 * conversions.factor("K"),
            r0: 1.1 * conversions.factor("R0"),
        };
        assert_eq!(table.get(&key("C", "H")), Some(&expected));
        assert_eq!(table.get(&key("H", "C")), Some(&expected));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn process_pars_stores_palindromic_key_once() {
        let table: ParameterTable<[String; 2], Pair> = PAIR_INFO
            .process_pars(
                &lines("TESTPAIR", "PARS", "TESTPAIR: PARS C C 2.0 1.1"),
                &unit_conversions(),
            )
            .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&key("C", "C")));
    }

    #[test]
    fn process_pars_rejects_reversed_duplicate() {
        let result: Result<ParameterTable<[String; 2], Pair>, _> = PAIR_INFO.process_pars(
            &lines(
                "TESTPAIR",
                "PARS",
                "TESTPAIR: PARS H C 2.0 1.1\nTESTPAIR: PARS C H 3.0 1.2",
            ),
            &unit_conversions(),
        );
        assert_eq!(
            kind_at(result),
            (
                Some(2),
                GeneratorErrorKind::DuplicateParameters(vec!["C".to_string(), "H".to_string()])
            )
        );
    }

    #[test]
    fn process_pars_rejects_wrong_count_and_bad_numbers() {
        let result: Result<ParameterTable<[String; 2], Pair>, _> = PAIR_INFO.process_pars(
            &lines("TESTPAIR", "PARS", "TESTPAIR: PARS C H 2.0"),
            &unit_conversions(),
        );
        assert_eq!(
            kind_at(result),
            (
                Some(1),
                GeneratorErrorKind::WrongArgumentCount {
                    command: "PARS",
                    expected: 4,
                    found: 3
                }
            )
        );

        let result: Result<ParameterTable<[String; 2], Pair>, _> = PAIR_INFO.process_pars(
            &lines("TESTPAIR", "PARS", "TESTPAIR: PARS C H 2.0 x1"),
            &unit_conversions(),
        );
        assert_eq!(
            kind_at(result),
            (
                Some(1),
                GeneratorErrorKind::MalformedNumber("x1".to_string())
            )
        );
    }

    #[test]
    fn identity_symmetry_keeps_single_key() {
        let k = ["C".to_string()];
        assert_eq!(ATOM_INFO.alt_keys(k.clone()), vec![k]);
        assert_eq!(
            PAIR_INFO.alt_keys(key("A", "B")),
            vec![key("A", "B"), key("B", "A")]
        );
    }

    #[test]
    fn process_scales_reads_complete_table() {
        let table = ATOM_INFO
            .process_scales(&lines(
                "TESTATOM",
                "SCALE",
                "TESTATOM: SCALE 3 0.5\nTESTATOM: SCALE 1 0.0\nTESTATOM: SCALE 2 1.0",
            ))
            .unwrap();
        assert_eq!(table, ScaleTable::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn process_scales_requires_all_three_distances() {
        let result = ATOM_INFO.process_scales(&lines(
            "TESTATOM",
            "SCALE",
            "TESTATOM: SCALE 1 0.0\nTESTATOM: SCALE 2 0.0",
        ));
        assert_eq!(kind_at(result), (None, GeneratorErrorKind::IncompleteScales));

        let result = ATOM_INFO.process_scales(&lines(
            "TESTATOM",
            "SCALE",
            "TESTATOM: SCALE 1 0.0\nTESTATOM: SCALE 2 0.0\nTESTATOM: SCALE 4 0.0",
        ));
        assert_eq!(kind_at(result), (None, GeneratorErrorKind::IncompleteScales));
    }

    #[test]
    fn process_scales_rejects_duplicates_and_out_of_range() {
        let result = ATOM_INFO.process_scales(&lines(
            "TESTATOM",
            "SCALE",
            "TESTATOM: SCALE 1 0.0\nTESTATOM: SCALE 2 0.0\nTESTATOM: SCALE 3 0.5\nTESTATOM: SCALE 1 0.0",
        ));
        assert_eq!(kind_at(result), (Some(4), GeneratorErrorKind::DuplicateScale(1)));

        let result =
            ATOM_INFO.process_scales(&lines("TESTATOM", "SCALE", "TESTATOM: SCALE 1 1.5"));
        assert_eq!(
            kind_at(result),
            (Some(1), GeneratorErrorKind::ScaleOutOfRange(1.5))
        );
    }

    #[test]
    fn process_scales_rejects_malformed_lines() {
        let result = ATOM_INFO.process_scales(&lines("TESTATOM", "SCALE", "TESTATOM: SCALE 1"));
        assert!(matches!(
            kind_at(result),
            (Some(1), GeneratorErrorKind::WrongArgumentCount { .. })
        ));
        let result =
            ATOM_INFO.process_scales(&lines("TESTATOM", "SCALE", "TESTATOM: SCALE one 0.5"));
        assert_eq!(
            kind_at(result),
            (
                Some(1),
                GeneratorErrorKind::MalformedInteger("one".to_string())
            )
        );
    }

    #[test]
    fn process_mix_resolves_plain_and_corrected_rules() {
        let spec = ATOM_INFO
            .process_mix(
                &lines(
                    "TESTATOM",
                    "MIX",
                    "TESTATOM: MIX a geometric_cor 0.25\nTESTATOM: MIX B ARITHMETIC",
                ),
                &CATALOG,
            )
            .unwrap();
        assert_eq!(spec["A"].kind, MixRuleKind::Corrected);
        assert_eq!(spec["A"].coefficient(), 0.25);
        assert_eq!(spec["B"].kind, MixRuleKind::Plain);
        assert_eq!(spec["B"].coefficient(), 0.0);
    }

    #[test]
    fn process_mix_rejects_malformed_rules() {
        let result = ATOM_INFO.process_mix(&lines("TESTATOM", "MIX", "TESTATOM: MIX A"), &CATALOG);
        assert_eq!(
            kind_at(result),
            (Some(1), GeneratorErrorKind::TooFewMixingArguments)
        );

        let result = ATOM_INFO.process_mix(
            &lines("TESTATOM", "MIX", "TESTATOM: MIX A ARITHMETIC"),
            &CATALOG,
        );
        assert!(matches!(
            kind_at(result),
            (Some(1), GeneratorErrorKind::UnknownMixingRule { .. })
        ));

        let result = ATOM_INFO.process_mix(
            &lines("TESTATOM", "MIX", "TESTATOM: MIX A GEOMETRIC 1.0"),
            &CATALOG,
        );
        assert!(matches!(
            kind_at(result),
            (
                Some(1),
                GeneratorErrorKind::WrongMixingArgumentCount {
                    expected: 0,
                    found: 1,
                    ..
                }
            )
        ));

        let result = ATOM_INFO.process_mix(
            &lines("TESTATOM", "MIX", "TESTATOM: MIX A GEOMETRIC_COR abc"),
            &CATALOG,
        );
        assert_eq!(
            kind_at(result),
            (
                Some(1),
                GeneratorErrorKind::MalformedNumber("abc".to_string())
            )
        );
    }

    #[test]
    fn process_mix_rejects_names_outside_par_names() {
        let result = ATOM_INFO.process_mix(
            &lines("TESTATOM", "MIX", "TESTATOM: MIX C GEOMETRIC"),
            &CATALOG,
        );
        assert!(matches!(
            kind_at(result),
            (Some(1), GeneratorErrorKind::UnknownParameter { .. })
        ));
    }

    #[test]
    fn process_mix_requires_one_rule_per_parameter() {
        let result = ATOM_INFO.process_mix(
            &lines("TESTATOM", "MIX", "TESTATOM: MIX A GEOMETRIC"),
            &CATALOG,
        );
        assert_eq!(
            kind_at(result),
            (
                None,
                GeneratorErrorKind::IncompleteMixingRules {
                    prefix: "TESTATOM",
                    missing: vec!["B"]
                }
            )
        );

        let result = ATOM_INFO.process_mix(
            &lines(
                "TESTATOM",
                "MIX",
                "TESTATOM: MIX A GEOMETRIC\nTESTATOM: MIX A GEOMETRIC_COR 1.0",
            ),
            &CATALOG,
        );
        assert_eq!(
            kind_at(result),
            (
                Some(2),
                GeneratorErrorKind::RedundantCommand("MIX A".to_string())
            )
        );
    }
}
