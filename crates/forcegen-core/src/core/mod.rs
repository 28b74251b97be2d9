//! # Core Module
//!
//! Fundamental building blocks used by the generator engine.
//!
//! - **Molecular Representation** ([`models`]) - Atom types, bonded topology, periodic cell
//! - **Force-Field Parts** ([`forcefield`]) - The parameterized parts a compilation produces
//! - **File I/O** ([`io`]) - Parameter-file parser, system description reader, term export
//! - **Units** ([`units`]) - Unit expression lookup in atomic units

pub mod forcefield;
pub mod io;
pub mod models;
pub mod units;
