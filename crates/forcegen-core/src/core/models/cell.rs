use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CellError {
    #[error("A cell can have at most three vectors, got {0}")]
    TooManyVectors(usize),
    #[error("Cell vectors must be linearly independent")]
    Degenerate,
}

/// Periodic cell spanned by zero to three real-space vectors (in bohr).
///
/// The number of vectors is the periodic dimensionality: an empty cell describes an
/// isolated, non-periodic system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    rvecs: Vec<Vector3<f64>>,
}

impl Cell {
    pub fn new(rvecs: Vec<Vector3<f64>>) -> Result<Self, CellError> {
        if rvecs.len() > 3 {
            return Err(CellError::TooManyVectors(rvecs.len()));
        }
        let degenerate = match rvecs.as_slice() {
            [] => false,
            [a] => a.norm() == 0.0,
            [a, b] => a.cross(b).norm() == 0.0,
            [a, b, c] => a.cross(b).dot(c) == 0.0,
            _ => unreachable!(),
        };
        if degenerate {
            return Err(CellError::Degenerate);
        }
        Ok(Self { rvecs })
    }

    /// Cubic cell with edge length `size`.
    pub fn cubic(size: f64) -> Result<Self, CellError> {
        Self::new(vec![
            Vector3::new(size, 0.0, 0.0),
            Vector3::new(0.0, size, 0.0),
            Vector3::new(0.0, 0.0, size),
        ])
    }

    pub fn nvec(&self) -> usize {
        self.rvecs.len()
    }

    pub fn rvecs(&self) -> &[Vector3<f64>] {
        &self.rvecs
    }

    /// Volume of a three-dimensional cell, `None` for lower periodicity.
    pub fn volume(&self) -> Option<f64> {
        match self.rvecs.as_slice() {
            [a, b, c] => Some(a.cross(b).dot(c).abs()),
            _ => None,
        }
    }
}
