//! # Generator Engine
//!
//! Interprets the labeled sections of a parameter file. Each prefix is owned by one
//! [`Generator`](generator::Generator) from the static [`registry`]; generators share the
//! validators of [`generator::GeneratorInfo`] and collect their parts in an
//! [`FfArgs`](args::FfArgs) accumulator.
//!
//! ## Key Components
//!
//! - [`generator`] - The generator contract and the shared section validators
//! - [`valence`] - Bond and bend generators
//! - [`nonbonded`] - Exponential repulsion and fixed-charge generators
//! - [`args`] - The accumulator threaded through one compilation
//! - [`config`] - Cutoff and smoothing settings with their builder
//! - [`registry`] - Prefix to generator table
//! - [`error`] - Located generator errors

pub mod args;
pub mod config;
pub mod error;
pub mod generator;
pub mod nonbonded;
pub mod registry;
pub mod valence;
