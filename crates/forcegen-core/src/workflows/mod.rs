//! # Workflows Module
//!
//! High-level entry points that run a complete compilation: parse the parameter file,
//! dispatch every labeled section to the generator registered for its prefix, and
//! finish the accumulated parts into a [`ForceField`](crate::core::forcefield::field::ForceField).
//!
//! - **Compile Workflow** ([`compile`]) - From a parsed parameter file (or a path) and
//!   a system to a finished force field.

pub mod compile;
