//! # Force-Field Parts Module
//!
//! Plain-data descriptions of the interaction parts a compilation produces. Nothing in
//! here evaluates energies: each part records the resolved coefficients and the
//! geometry it applies to, ready to be handed to an evaluation layer.
//!
//! ## Key Components
//!
//! - [`parts`] - The `ForcePart` enum and its `PartKind` tag
//! - [`valence`] - Bonded terms: internal coordinates combined with a potential
//! - [`pair`] - Pair potentials for exponential repulsion and real-space electrostatics
//! - [`ewald`] - Reciprocal-space, correction and neutralizing Ewald parts
//! - [`scaling`] - Exclusion scalings for atoms one to three bonds apart
//! - [`nlist`] - Neighbor-list descriptor shared by all pair parts
//! - [`field`] - The finished `ForceField` artifact

pub mod ewald;
pub mod field;
pub mod nlist;
pub mod pair;
pub mod parts;
pub mod scaling;
pub mod valence;
