//! # I/O Module
//!
//! - [`pars`] - Line-oriented parser for `PREFIX: COMMAND DATA` parameter files
//! - [`system`] - TOML description of a molecular system (atom types, bonds, cell)
//! - [`terms`] - CSV export of the valence terms of a finished force field

pub mod pars;
pub mod system;
pub mod terms;
