use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flat, row-major grid of cells.
///
/// Cells are addressed by a single [`CellIndex`], `row * width + col`. Row and column are always derived
/// from the index and the width, never stored alongside the cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// All cells safe, hidden and unmarked.
    pub fn new_empty(width: Coord, height: Coord) -> Self {
        Self {
            cells: Array2::default([usize::from(height), usize::from(width)]),
        }
    }

    /// Places hazards at `hazards` and fills every other cell with its adjacent hazard count.
    pub fn with_hazards(width: Coord, height: Coord, hazards: &BTreeSet<CellIndex>) -> Result<Self> {
        let mut grid = Self::new_empty(width, height);

        for &index in hazards {
            let index = grid.validate_index(index)?;
            grid.cell_mut(index).value = CellValue::Hazard;
        }

        for index in 0..grid.len() {
            if grid[index].value.is_hazard() {
                continue;
            }
            let count = grid.adjacent_hazard_count(index);
            grid.cell_mut(index).value = CellValue::Count(count);
        }

        Ok(grid)
    }

    pub fn from_options(options: &GridOptions) -> Self {
        Self::new_empty(options.width(), options.height())
    }

    pub fn width(&self) -> Coord {
        self.cells.dim().1 as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    pub fn len(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        let len = self.len();
        if index < len {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex { index, len })
        }
    }

    /// `(row, col)` of a flat index.
    pub fn coords_of(&self, index: CellIndex) -> (Coord, Coord) {
        let width = CellIndex::from(self.width());
        ((index / width) as Coord, (index % width) as Coord)
    }

    pub fn index_of(&self, row: Coord, col: Coord) -> Option<CellIndex> {
        if row < self.height() && col < self.width() {
            Some(CellIndex::from(row) * CellIndex::from(self.width()) + CellIndex::from(col))
        } else {
            None
        }
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.validate_index(index).ok().map(|index| &self[index])
    }

    pub fn neighbors(&self, index: CellIndex) -> NeighborIter {
        NeighborIter::new(index, self.width(), self.len())
    }

    pub fn adjacent_hazard_count(&self, index: CellIndex) -> u8 {
        self.neighbors(index)
            .filter(|&pos| self[pos].value.is_hazard())
            .count() as u8
    }

    /// Cells in flat index order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn iter_indexed(&self) -> impl Iterator<Item = (CellIndex, &Cell)> + '_ {
        (0..self.len()).zip(self.cells.iter())
    }

    pub fn row(&self, row: Coord) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.row(usize::from(row)).into_iter()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(Cell::is_flagged)
    }

    pub fn hazard_count(&self) -> CellCount {
        self.count_where(|cell| cell.value.is_hazard())
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let nd_index = self.nd_index(index);
        &mut self.cells[nd_index]
    }

    pub(crate) fn reveal_all(&mut self, indices: &BTreeSet<CellIndex>) {
        for &index in indices {
            self.cell_mut(index).revealed = true;
        }
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|&cell| predicate(cell)).count() as CellCount
    }

    fn nd_index(&self, index: CellIndex) -> [usize; 2] {
        let (row, col) = self.coords_of(index);
        [row.into(), col.into()]
    }
}

impl Index<CellIndex> for Grid {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[self.nd_index(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazards(indices: &[CellIndex]) -> BTreeSet<CellIndex> {
        indices.iter().copied().collect()
    }

    fn brute_force_count(grid: &Grid, index: CellIndex) -> u8 {
        let (row, col) = grid.coords_of(index);
        let mut count = 0;
        for other in 0..grid.len() {
            let (other_row, other_col) = grid.coords_of(other);
            let adjacent = other != index
                && other_row.abs_diff(row) <= 1
                && other_col.abs_diff(col) <= 1;
            if adjacent && grid[other].value.is_hazard() {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn empty_grid_is_hidden_zeroes() {
        let grid = Grid::new_empty(4, 3);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert!(grid.iter().all(|cell| *cell == Cell::default()));
        assert_eq!(grid.revealed_count(), 0);
    }

    #[test]
    fn flat_index_maps_to_row_and_col() {
        let grid = Grid::new_empty(4, 3);

        assert_eq!(grid.coords_of(0), (0, 0));
        assert_eq!(grid.coords_of(5), (1, 1));
        assert_eq!(grid.coords_of(11), (2, 3));
        assert_eq!(grid.index_of(2, 3), Some(11));
        assert_eq!(grid.index_of(3, 0), None);
        assert_eq!(grid.index_of(0, 4), None);
    }

    #[test]
    fn counts_on_three_by_three() {
        let grid = Grid::with_hazards(3, 3, &hazards(&[0, 4])).unwrap();
        let raw: Vec<i8> = grid.iter().map(|cell| cell.value.raw()).collect();

        assert_eq!(raw, vec![-1, 2, 1, 2, -1, 1, 1, 1, 1]);
        assert_eq!(grid.hazard_count(), 2);
    }

    #[test]
    fn counts_match_brute_force_on_wide_grid() {
        let grid = Grid::with_hazards(7, 4, &hazards(&[0, 6, 7, 13, 15, 21, 27])).unwrap();

        for (index, cell) in grid.iter_indexed() {
            if let CellValue::Count(count) = cell.value {
                assert_eq!(count, brute_force_count(&grid, index), "cell {index}");
            }
        }
    }

    #[test]
    fn hazard_out_of_range_is_rejected() {
        assert_eq!(
            Grid::with_hazards(2, 2, &hazards(&[4])),
            Err(GameError::InvalidIndex { index: 4, len: 4 })
        );
    }

    #[test]
    fn rows_follow_flat_order() {
        let grid = Grid::with_hazards(3, 2, &hazards(&[2])).unwrap();
        let second: Vec<i8> = grid.row(1).map(|cell| cell.value.raw()).collect();

        assert_eq!(second, vec![0, 1, 1]);
    }

    #[test]
    fn snapshot_serializes() {
        let grid = Grid::with_hazards(2, 2, &hazards(&[3])).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(back, grid);
    }
}
