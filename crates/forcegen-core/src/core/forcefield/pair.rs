use super::nlist::NeighborLists;
use super::scaling::Scalings;
use std::fmt;
use std::rc::Rc;

/// How a pairwise coefficient is derived from two per-atom coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixRuleKind {
    /// Plain combination rule without a correction coefficient.
    Plain,
    /// Combination rule corrected by one extra coefficient.
    Corrected,
}

/// Exponential repulsion `A_ij exp(-B_ij r)` with mixed amplitudes and decay constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpRepPotential {
    pub amps: Vec<f64>,
    pub amp_mix: MixRuleKind,
    pub amp_mix_coeff: f64,
    pub bs: Vec<f64>,
    pub b_mix: MixRuleKind,
    pub b_mix_coeff: f64,
    pub rcut: f64,
    pub smooth: bool,
}

/// Real-space part of the electrostatic interaction with Ewald splitting parameter `alpha`.
///
/// `alpha == 0` is the bare Coulomb interaction of a non-periodic system.
#[derive(Debug, Clone, PartialEq)]
pub struct EiPotential {
    pub charges: Vec<f64>,
    pub alpha: f64,
    pub rcut: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PairPotential {
    Ei(EiPotential),
    ExpRep(ExpRepPotential),
}

impl PairPotential {
    pub fn kind(&self) -> PairPotKind {
        match self {
            Self::Ei(_) => PairPotKind::Ei,
            Self::ExpRep(_) => PairPotKind::ExpRep,
        }
    }

    pub fn rcut(&self) -> f64 {
        match self {
            Self::Ei(pot) => pot.rcut,
            Self::ExpRep(pot) => pot.rcut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairPotKind {
    Ei,
    ExpRep,
}

impl fmt::Display for PairPotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Ei => "electrostatic",
                Self::ExpRep => "exponential repulsion",
            }
        )
    }
}

/// A pair potential wired to the shared neighbor lists and its exclusion scalings.
#[derive(Debug, Clone, PartialEq)]
pub struct PairPart {
    pub nlists: Rc<NeighborLists>,
    pub scalings: Scalings,
    pub pot: PairPotential,
}

impl PairPart {
    pub fn new(nlists: Rc<NeighborLists>, scalings: Scalings, pot: PairPotential) -> Self {
        Self {
            nlists,
            scalings,
            pot,
        }
    }
}
