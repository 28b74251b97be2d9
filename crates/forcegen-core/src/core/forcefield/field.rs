use super::nlist::NeighborLists;
use super::pair::{PairPart, PairPotKind};
use super::parts::{ForcePart, PartKind};
use super::valence::{IcKind, PotentialKind, ValencePart};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A finished force field: the parts produced by one compilation plus the global
/// real-space configuration they were built with.
///
/// Parts are in canonical order (by [`PartKind`]) and valence terms are grouped by
/// potential and internal coordinate, so the result does not depend on the order in
/// which the generators ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceField {
    pub(crate) parts: Vec<ForcePart>,
    pub(crate) nlists: Option<Rc<NeighborLists>>,
    pub(crate) rcut: f64,
    pub(crate) smooth: bool,
}

impl ForceField {
    pub fn parts(&self) -> &[ForcePart] {
        &self.parts
    }

    pub fn nlists(&self) -> Option<&NeighborLists> {
        self.nlists.as_deref()
    }

    pub fn rcut(&self) -> f64 {
        self.rcut
    }

    pub fn smooth(&self) -> bool {
        self.smooth
    }

    pub fn part(&self, kind: PartKind) -> Option<&ForcePart> {
        self.parts.iter().find(|part| part.kind() == kind)
    }

    pub fn valence(&self) -> Option<&ValencePart> {
        self.part(PartKind::Valence).and_then(ForcePart::as_valence)
    }

    pub fn pair(&self, kind: PairPotKind) -> Option<&PairPart> {
        self.part(PartKind::Pair(kind)).and_then(ForcePart::as_pair)
    }

    pub fn summary(&self) -> ForceFieldSummary {
        let mut valence_terms = BTreeMap::new();
        if let Some(valence) = self.valence() {
            for term in valence.terms() {
                *valence_terms.entry(term.group()).or_insert(0) += 1;
            }
        }
        ForceFieldSummary {
            parts: self.parts.iter().map(ForcePart::kind).collect(),
            valence_terms,
            rcut: self.rcut,
            smooth: self.smooth,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForceFieldSummary {
    pub parts: Vec<PartKind>,
    pub valence_terms: BTreeMap<(PotentialKind, IcKind), usize>,
    pub rcut: f64,
    pub smooth: bool,
}

impl fmt::Display for ForceFieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} part(s), rcut = {:.6} bohr, smooth = {}",
            self.parts.len(),
            self.rcut,
            self.smooth
        )?;
        for kind in &self.parts {
            writeln!(f, "  - {}", kind)?;
            if *kind == PartKind::Valence {
                for ((pot, ic), count) in &self.valence_terms {
                    writeln!(f, "      {} {}: {} term(s)", pot, ic, count)?;
                }
            }
        }
        Ok(())
    }
}
