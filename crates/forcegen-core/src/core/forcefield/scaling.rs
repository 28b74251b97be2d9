use crate::core::models::topology::Topology;

/// Scale factors for pairs one, two and three bonds apart, indexed by `nbond - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTable {
    scales: [f64; 3],
}

impl ScaleTable {
    pub fn new(scale1: f64, scale2: f64, scale3: f64) -> Self {
        Self {
            scales: [scale1, scale2, scale3],
        }
    }

    /// Scale for atoms `nbond` bonds apart; pairs further apart are not scaled.
    pub fn get(&self, nbond: usize) -> f64 {
        match nbond {
            1..=3 => self.scales[nbond - 1],
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPair {
    pub a: usize,
    pub b: usize,
    pub nbond: usize,
    pub scale: f64,
}

/// Atom pairs whose pair interaction is scaled because they are close in the topology.
///
/// Only pairs with a scale below one are stored; every other pair interacts fully.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalings {
    table: ScaleTable,
    pairs: Vec<ScaledPair>,
}

impl Scalings {
    pub fn new(topology: Option<&Topology>, table: ScaleTable) -> Self {
        let pairs = topology
            .map(|topology| {
                topology
                    .pairs_within(3)
                    .into_iter()
                    .map(|(a, b, nbond)| ScaledPair {
                        a,
                        b,
                        nbond,
                        scale: table.get(nbond),
                    })
                    .filter(|pair| pair.scale < 1.0)
                    .collect()
            })
            .unwrap_or_default();
        Self { table, pairs }
    }

    pub fn table(&self) -> &ScaleTable {
        &self.table
    }

    pub fn pairs(&self) -> &[ScaledPair] {
        &self.pairs
    }

    /// Scale of the pair `(a, b)` in either order.
    pub fn scale(&self, a: usize, b: usize) -> f64 {
        let (a, b) = if a > b { (a, b) } else { (b, a) };
        self.pairs
            .iter()
            .find(|pair| pair.a == a && pair.b == b)
            .map_or(1.0, |pair| pair.scale)
    }
}
