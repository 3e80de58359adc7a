use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Placement strategy backed by any `rand` generator, purely random apart from the excluded cell.
#[derive(Clone, Debug, PartialEq)]
pub struct RngPlacer<R> {
    rng: R,
}

/// Reproducible placement, the same seed always yields the same sequence of layouts.
pub type SeededPlacer = RngPlacer<SmallRng>;

impl<R: Rng> RngPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl SeededPlacer {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HazardPlacer for RngPlacer<R> {
    fn place(&mut self, hazards: CellCount, area: CellCount, excluded: CellIndex) -> BTreeSet<CellIndex> {
        place_hazards(&mut self.rng, hazards, area, excluded)
    }
}
