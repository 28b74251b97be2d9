//! # Core Models Module
//!
//! Data structures describing the molecular system a parameter file is applied to.
//!
//! - [`system`] - Atom types, optional charges, topology and cell of one system
//! - [`topology`] - Bonded connectivity with direct-neighbor lists and bond-distance queries
//! - [`cell`] - Periodic cell vectors and dimensionality
//!
//! ```ignore
//! use forcegen::core::models::{cell::Cell, system::System, topology::Topology};
//!
//! let topology = Topology::new(3, &[[0, 1], [1, 2]])?;
//! let system = System::new(vec!["H".into(), "O".into(), "H".into()], Some(topology), Cell::default())?;
//! ```

pub mod cell;
pub mod system;
pub mod topology;
