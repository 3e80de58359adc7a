use smallvec::SmallVec;

/// Single coordinate axis used for grid width and height.
pub type Coord = u8;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u16;

/// Flat cell address, `row * width + col`.
pub type CellIndex = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Offsets as `(col, row)`, rows above first, so neighbors come out in row-major order.
const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `index`, returning a value only when it stays inside the grid and does not wrap
/// around a left or right edge.
fn apply_delta(index: CellIndex, delta: (i32, i32), width: Coord, len: CellCount) -> Option<CellIndex> {
    let (dc, dr) = delta;
    let col = index % CellIndex::from(width);

    if dc < 0 && col == 0 {
        return None;
    }
    if dc > 0 && col == CellIndex::from(width) - 1 {
        return None;
    }

    let target = i32::from(index) + dr * i32::from(width) + dc;
    if target < 0 || target >= i32::from(len) {
        return None;
    }

    target.try_into().ok()
}

/// Iterates the up to 8 cells adjacent to `center` on a flat grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: CellIndex,
    width: Coord,
    len: CellCount,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: CellIndex, width: Coord, len: CellCount) -> Self {
        Self {
            center,
            width,
            len,
            // nothing is adjacent on a zero-width grid
            index: if width == 0 { DISPLACEMENTS.len() as u8 } else { 0 },
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                DISPLACEMENTS[self.index as usize],
                self.width,
                self.len,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Valid indices adjacent to `index` on a grid `width` cells wide holding `len` cells in total.
///
/// Never returns `index` itself, never leaves `[0, len)` and never wraps from one edge column to the
/// opposite one.
pub fn neighbors_of(index: CellIndex, width: Coord, len: CellCount) -> SmallVec<[CellIndex; 8]> {
    NeighborIter::new(index, width, len).collect()
}
