use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of hazard layouts for a new game.
pub trait HazardPlacer {
    /// Picks `hazards` distinct cells in `[0, area)`, none of them `excluded`.
    fn place(&mut self, hazards: CellCount, area: CellCount, excluded: CellIndex) -> BTreeSet<CellIndex>;
}

/// Uniformly picks `hazards` distinct cells in `[0, area)` other than `excluded`.
///
/// Runs a partial Fisher-Yates shuffle over the free cells, so the cost is linear in `area` no matter how
/// crowded the grid is. Asking for more hazards than there are free cells fills every free cell.
pub fn place_hazards<R: Rng + ?Sized>(
    rng: &mut R,
    hazards: CellCount,
    area: CellCount,
    excluded: CellIndex,
) -> BTreeSet<CellIndex> {
    use rand::prelude::*;

    let mut free: Vec<CellIndex> = (0..area).filter(|&index| index != excluded).collect();

    let wanted = usize::from(hazards);
    if wanted > free.len() {
        log::warn!(
            "Grid already full, requested {} hazards but only {} cells are free",
            hazards,
            free.len()
        );
    }
    let wanted = wanted.min(free.len());

    for placed in 0..wanted {
        let pick = rng.random_range(placed..free.len());
        free.swap(placed, pick);
    }
    free.truncate(wanted);

    free.into_iter().collect()
}
