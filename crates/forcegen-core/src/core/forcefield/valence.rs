use std::fmt;

/// Internal coordinate a valence potential acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InternalCoordinate {
    /// Distance between two bonded atoms.
    Bond { i0: usize, i1: usize },
    /// Angle at `i1` between the bonds to `i0` and `i2`.
    BendAngle { i0: usize, i1: usize, i2: usize },
    /// Cosine of the angle at `i1` between the bonds to `i0` and `i2`.
    BendCos { i0: usize, i1: usize, i2: usize },
}

impl InternalCoordinate {
    pub fn kind(&self) -> IcKind {
        match self {
            Self::Bond { .. } => IcKind::Bond,
            Self::BendAngle { .. } => IcKind::BendAngle,
            Self::BendCos { .. } => IcKind::BendCos,
        }
    }

    pub fn atoms(&self) -> Vec<usize> {
        match *self {
            Self::Bond { i0, i1 } => vec![i0, i1],
            Self::BendAngle { i0, i1, i2 } | Self::BendCos { i0, i1, i2 } => vec![i0, i1, i2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IcKind {
    Bond,
    BendAngle,
    BendCos,
}

impl fmt::Display for IcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bond => "Bond",
                Self::BendAngle => "BendAngle",
                Self::BendCos => "BendCos",
            }
        )
    }
}

/// Potential applied to an internal coordinate, with force constant `fc` and rest value `rv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValencePotential {
    Harmonic { fc: f64, rv: f64 },
    Fues { fc: f64, rv: f64 },
}

impl ValencePotential {
    pub fn kind(&self) -> PotentialKind {
        match self {
            Self::Harmonic { .. } => PotentialKind::Harmonic,
            Self::Fues { .. } => PotentialKind::Fues,
        }
    }

    pub fn fc(&self) -> f64 {
        match *self {
            Self::Harmonic { fc, .. } | Self::Fues { fc, .. } => fc,
        }
    }

    pub fn rv(&self) -> f64 {
        match *self {
            Self::Harmonic { rv, .. } | Self::Fues { rv, .. } => rv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PotentialKind {
    Harmonic,
    Fues,
}

impl fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Harmonic => "Harmonic",
                Self::Fues => "Fues",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValenceTerm {
    pub potential: ValencePotential,
    pub ic: InternalCoordinate,
}

impl ValenceTerm {
    pub fn new(potential: ValencePotential, ic: InternalCoordinate) -> Self {
        Self { potential, ic }
    }

    /// Grouping key: one group per (potential, internal coordinate) combination.
    pub fn group(&self) -> (PotentialKind, IcKind) {
        (self.potential.kind(), self.ic.kind())
    }
}

/// Container for every bonded term of a force field; shared by all valence generators.
#[derive(Debug, Clone, PartialEq)]
pub struct ValencePart {
    natom: usize,
    terms: Vec<ValenceTerm>,
}

impl ValencePart {
    pub fn new(natom: usize) -> Self {
        Self {
            natom,
            terms: Vec::new(),
        }
    }

    pub fn natom(&self) -> usize {
        self.natom
    }

    pub fn add_term(&mut self, term: ValenceTerm) {
        self.terms.push(term);
    }

    pub fn terms(&self) -> &[ValenceTerm] {
        &self.terms
    }

    /// Orders the terms by group, keeping the insertion order within each group.
    pub(crate) fn sort_by_group(&mut self) {
        self.terms.sort_by_key(ValenceTerm::group);
    }
}
