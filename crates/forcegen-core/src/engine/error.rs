use crate::core::forcefield::parts::PartKind;
use crate::core::io::pars::Location;
use crate::core::units::UnitError;
use thiserror::Error;

/// A fatal condition raised while a generator validates or applies its section.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{location}: {kind}")]
pub struct GeneratorError {
    pub location: Location,
    pub kind: GeneratorErrorKind,
}

impl GeneratorError {
    pub fn new(location: Location, kind: GeneratorErrorKind) -> Self {
        Self { location, kind }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneratorErrorKind {
    #[error("command {command} is not recognized by generator {prefix}")]
    UnrecognizedCommand {
        command: String,
        prefix: &'static str,
    },

    #[error("UNIT line must have exactly two arguments: a parameter name and a unit")]
    MalformedUnitLine,
    #[error("unknown parameter {name}, must be one of {expected:?}")]
    UnknownParameter {
        name: String,
        expected: &'static [&'static str],
    },
    #[error("unknown unit: {0}")]
    UnknownUnit(#[source] UnitError),
    #[error("not all units are specified for generator {prefix}, missing {missing:?}")]
    IncompleteUnits {
        prefix: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("{command} line should have {expected} arguments, got {found}")]
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("'{0}' cannot be converted to a floating point number")]
    MalformedNumber(String),
    #[error("'{0}' cannot be converted to an integer")]
    MalformedInteger(String),
    #[error("duplicate parameters for atom types {0:?}")]
    DuplicateParameters(Vec<String>),
    #[error("atom type {0} was already encountered earlier")]
    DuplicateAtomType(String),

    #[error("duplicate scale for atoms {0} bond(s) apart")]
    DuplicateScale(usize),
    #[error("scale {0} is not in the range [0,1]")]
    ScaleOutOfRange(f64),
    #[error("SCALE must be given exactly once for atoms separated by 1, 2 and 3 bonds")]
    IncompleteScales,

    #[error("mixing rule needs at least a parameter name and a rule name")]
    TooFewMixingArguments,
    #[error("unknown mixing rule {rule} for parameter {name}")]
    UnknownMixingRule { name: String, rule: String },
    #[error("mixing rule {rule} requires {expected} extra argument(s), got {found}")]
    WrongMixingArgumentCount {
        rule: String,
        expected: usize,
        found: usize,
    },
    #[error("not enough mixing rules for generator {prefix}, missing {missing:?}")]
    IncompleteMixingRules {
        prefix: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("{0} is redundant, it may only be given once")]
    RedundantCommand(String),

    #[error("generator {prefix} needs a system with a bonded topology")]
    MissingTopology { prefix: &'static str },
    #[error("internal inconsistency: the {0} part is already present")]
    AlreadyPresent(PartKind),
    #[error("electrostatics are only supported for 0- and 3-dimensional periodicity, got {0}")]
    UnsupportedDimensionality(usize),
    #[error("not implemented: {0}")]
    NotImplemented(String),
}
