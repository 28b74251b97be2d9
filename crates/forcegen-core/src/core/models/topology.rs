use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Bond ({0}, {1}) refers to an atom outside the system of {2} atoms")]
    AtomOutOfRange(usize, usize, usize),
    #[error("Atom {0} cannot be bonded to itself")]
    SelfBond(usize),
}

/// Bonded connectivity of a system.
///
/// Bonds are kept in the order they were given (duplicates, in either orientation, are
/// dropped). The direct-neighbor list of every atom follows the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    bonds: Vec<[usize; 2]>,
    neighs1: Vec<Vec<usize>>,
}

impl Topology {
    pub fn new(natom: usize, bonds: &[[usize; 2]]) -> Result<Self, TopologyError> {
        let mut neighs1: Vec<Vec<usize>> = vec![Vec::new(); natom];
        let mut unique = Vec::with_capacity(bonds.len());
        for &[i0, i1] in bonds {
            if i0 >= natom || i1 >= natom {
                return Err(TopologyError::AtomOutOfRange(i0, i1, natom));
            }
            if i0 == i1 {
                return Err(TopologyError::SelfBond(i0));
            }
            if neighs1[i0].contains(&i1) {
                continue;
            }
            neighs1[i0].push(i1);
            neighs1[i1].push(i0);
            unique.push([i0, i1]);
        }
        Ok(Self {
            bonds: unique,
            neighs1,
        })
    }

    pub fn natom(&self) -> usize {
        self.neighs1.len()
    }

    pub fn bonds(&self) -> &[[usize; 2]] {
        &self.bonds
    }

    /// Atoms directly bonded to `atom`.
    pub fn neighs1(&self, atom: usize) -> &[usize] {
        &self.neighs1[atom]
    }

    /// Shortest bond distances from `atom` to every atom at most `max_nbond` bonds away,
    /// excluding `atom` itself, as `(other, nbond)` pairs.
    pub fn bond_distances_from(&self, atom: usize, max_nbond: usize) -> Vec<(usize, usize)> {
        let mut distance = vec![usize::MAX; self.natom()];
        let mut queue = VecDeque::new();
        let mut result = Vec::new();
        distance[atom] = 0;
        queue.push_back(atom);
        while let Some(current) = queue.pop_front() {
            let next = distance[current] + 1;
            if next > max_nbond {
                continue;
            }
            for &neighbor in &self.neighs1[current] {
                if distance[neighbor] == usize::MAX {
                    distance[neighbor] = next;
                    result.push((neighbor, next));
                    queue.push_back(neighbor);
                }
            }
        }
        result
    }

    /// Every unordered atom pair `(a, b)` with `a > b` separated by at most `max_nbond`
    /// bonds, together with its shortest bond distance.
    pub fn pairs_within(&self, max_nbond: usize) -> Vec<(usize, usize, usize)> {
        let mut pairs = Vec::new();
        for a in 0..self.natom() {
            let mut found: Vec<_> = self
                .bond_distances_from(a, max_nbond)
                .into_iter()
                .filter(|&(b, _)| b < a)
                .collect();
            found.sort_unstable();
            pairs.extend(found.into_iter().map(|(b, nbond)| (a, b, nbond)));
        }
        pairs
    }
}
