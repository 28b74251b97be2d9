use super::scaling::Scalings;

/// Reciprocal-space Ewald sum with cutoff `gcut` on the reciprocal vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct EwaldReciprocal {
    pub charges: Vec<f64>,
    pub alpha: f64,
    pub gcut: f64,
}

/// Removes the reciprocal-space contribution of excluded and scaled pairs and the
/// self-interaction of each Gaussian charge.
#[derive(Debug, Clone, PartialEq)]
pub struct EwaldCorrection {
    pub charges: Vec<f64>,
    pub alpha: f64,
    pub scalings: Scalings,
}

/// Uniform background charge compensating a net charge of the periodic cell.
#[derive(Debug, Clone, PartialEq)]
pub struct EwaldNeutralizing {
    pub charges: Vec<f64>,
    pub alpha: f64,
}
