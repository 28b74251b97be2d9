//! # forcegen Core Library
//!
//! A library that compiles a human-edited force-field parameter file together with a
//! molecular topology into a composite force-field description: bonded valence terms,
//! pairwise repulsion and electrostatics, with every coefficient unit-converted and every
//! topological exclusion scaling resolved.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Plain data models for the molecular system, the unit
//!   table, the force-field parts produced by compilation, and the parameter-file parser.
//!
//! - **[`engine`]: The Interpreter.** The generator family that owns the labeled sections
//!   of a parameter file, the validators they share, the accumulator (`FfArgs`) that
//!   collects parts while enforcing idempotence, and the static generator registry.
//!
//! - **[`workflows`]: The Public API.** Ties parsing, registry lookup and generator
//!   application into a single compilation pass returning a finished `ForceField`.

pub mod core;
pub mod engine;
pub mod workflows;
