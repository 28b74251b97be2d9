use crate::core::models::system::System;

/// Descriptor of the neighbor lists shared by every pair part of one force field.
///
/// Building the actual lists is left to the evaluation layer; the descriptor only pins
/// down the system size and periodicity the lists are built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborLists {
    pub natom: usize,
    pub nvec: usize,
}

impl NeighborLists {
    pub fn new(system: &System) -> Self {
        Self {
            natom: system.natom(),
            nvec: system.cell().nvec(),
        }
    }
}
