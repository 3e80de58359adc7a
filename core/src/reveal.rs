use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::*;

fn can_open(cell: &Cell) -> bool {
    !cell.revealed && !cell.is_flagged()
}

/// Cells a reveal at `origin` uncovers, `origin` included.
///
/// Expands through cells with no adjacent hazards until it reaches numbered cells. Revealed cells and
/// flagged cells are never returned, and flags stop the expansion, so a flag can shield whatever lies
/// behind it. Questioned cells are opened like hidden ones. The grid is not modified; running this again
/// after applying the result returns nothing.
pub fn chain_reveal(origin: CellIndex, grid: &Grid) -> BTreeSet<CellIndex> {
    let mut revealed = BTreeSet::new();
    if grid.validate_index(origin).is_err() {
        return revealed;
    }

    let mut visited = vec![false; usize::from(grid.len())];
    let mut to_visit: Vec<CellIndex> = vec![origin];

    while let Some(index) = to_visit.pop() {
        let seen = &mut visited[usize::from(index)];
        if *seen {
            continue;
        }
        *seen = true;

        let cell = grid[index];
        if !can_open(&cell) {
            log::trace!("Skipping cell {}", index);
            continue;
        }

        revealed.insert(index);
        log::trace!("Flood opened cell {}, value: {:?}", index, cell.value);

        if cell.value == CellValue::Count(0) {
            to_visit.extend(
                grid.neighbors(index)
                    .filter(|&pos| !visited[usize::from(pos)])
                    .filter(|&pos| can_open(&grid[pos])),
            );
        }
    }

    revealed
}
