use super::ewald::{EwaldCorrection, EwaldNeutralizing, EwaldReciprocal};
use super::pair::{PairPart, PairPotKind};
use super::valence::ValencePart;
use std::fmt;

/// Semantic category of a part. A force field holds at most one part of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartKind {
    Valence,
    Pair(PairPotKind),
    EwaldReciprocal,
    EwaldCorrection,
    EwaldNeutralizing,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valence => write!(f, "valence"),
            Self::Pair(pot) => write!(f, "{} pair", pot),
            Self::EwaldReciprocal => write!(f, "Ewald reciprocal"),
            Self::EwaldCorrection => write!(f, "Ewald correction"),
            Self::EwaldNeutralizing => write!(f, "Ewald neutralizing"),
        }
    }
}

/// One independently evaluable contribution to the force field.
#[derive(Debug, Clone, PartialEq)]
pub enum ForcePart {
    Valence(ValencePart),
    Pair(PairPart),
    EwaldReciprocal(EwaldReciprocal),
    EwaldCorrection(EwaldCorrection),
    EwaldNeutralizing(EwaldNeutralizing),
}

impl ForcePart {
    pub fn kind(&self) -> PartKind {
        match self {
            Self::Valence(_) => PartKind::Valence,
            Self::Pair(part) => PartKind::Pair(part.pot.kind()),
            Self::EwaldReciprocal(_) => PartKind::EwaldReciprocal,
            Self::EwaldCorrection(_) => PartKind::EwaldCorrection,
            Self::EwaldNeutralizing(_) => PartKind::EwaldNeutralizing,
        }
    }

    pub fn as_valence(&self) -> Option<&ValencePart> {
        match self {
            Self::Valence(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<&PairPart> {
        match self {
            Self::Pair(part) => Some(part),
            _ => None,
        }
    }
}
