use super::*;

/// Replays a known layout, for puzzles, bug reports and tests.
///
/// Hazards outside the grid are ignored, and a hazard on the excluded cell is dropped so the first reveal
/// stays safe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedPlacer {
    hazards: BTreeSet<CellIndex>,
}

impl FixedPlacer {
    pub fn new(hazards: impl IntoIterator<Item = CellIndex>) -> Self {
        Self {
            hazards: hazards.into_iter().collect(),
        }
    }

    pub fn hazards(&self) -> &BTreeSet<CellIndex> {
        &self.hazards
    }
}

impl HazardPlacer for FixedPlacer {
    fn place(&mut self, hazards: CellCount, area: CellCount, excluded: CellIndex) -> BTreeSet<CellIndex> {
        let mut placed: BTreeSet<CellIndex> = self.hazards.range(..area).copied().collect();

        if placed.remove(&excluded) {
            log::warn!("Fixed layout has a hazard on the first revealed cell {}, dropped it", excluded);
        }
        if placed.len() != usize::from(hazards) {
            log::warn!(
                "Fixed layout count mismatch, actual: {}, requested: {}",
                placed.len(),
                hazards
            );
        }

        placed
    }
}
