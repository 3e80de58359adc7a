use serde::{Deserialize, Serialize};

/// What a cell holds underneath its cover.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    /// Safe cell, with the number of adjacent hazards.
    Count(u8),
    /// Hazard that has not been set off.
    Hazard,
    /// The hazard the player revealed, ending the game.
    Detonated,
}

impl CellValue {
    /// Integer encoding: `0..=8` for counts, `-1` for a hazard, `-2` for the detonated hazard.
    pub const fn raw(self) -> i8 {
        match self {
            Self::Count(count) => count as i8,
            Self::Hazard => -1,
            Self::Detonated => -2,
        }
    }

    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Hazard | Self::Detonated)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player annotation on a hidden cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    None,
    Flag,
    Question,
}

impl Mark {
    /// Next mark in the `None -> Flag -> Question -> None` cycle.
    pub const fn cycle(self) -> Self {
        match self {
            Self::None => Self::Flag,
            Self::Flag => Self::Question,
            Self::Question => Self::None,
        }
    }

    /// `0` unmarked, `1` flagged, `2` questioned.
    pub const fn level(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Flag => 1,
            Self::Question => 2,
        }
    }

    pub const fn is_marked(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub revealed: bool,
    pub marked: Mark,
}

impl Cell {
    pub const fn is_flagged(&self) -> bool {
        matches!(self.marked, Mark::Flag)
    }

    /// Derives what a renderer should draw for this cell.
    ///
    /// `game_over` enables the end-of-game classification of marks: a mark left on a safe cell is shown
    /// as [`Glyph::MisplacedFlag`], and a marked hazard as [`Glyph::FlaggedHazard`].
    pub fn glyph(&self, game_over: bool) -> Glyph {
        use CellValue::*;

        match (self.value, self.revealed) {
            (Detonated, _) => Glyph::Exploded,
            (Count(0), true) => Glyph::Empty,
            (Count(count), true) => Glyph::Number(count),
            (Hazard, true) if self.marked.is_marked() => Glyph::FlaggedHazard,
            (Hazard, true) => Glyph::Hazard,
            (Count(_), false) if game_over && self.marked.is_marked() => Glyph::MisplacedFlag,
            (_, false) => match self.marked {
                Mark::None => Glyph::Hidden,
                Mark::Flag => Glyph::Flag,
                Mark::Question => Glyph::Question,
            },
        }
    }
}

/// Display symbol derived from a cell, independent of any rendering technology.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Hidden,
    Flag,
    Question,
    Empty,
    Number(u8),
    Hazard,
    FlaggedHazard,
    Exploded,
    MisplacedFlag,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(value: CellValue, revealed: bool, marked: Mark) -> Cell {
        Cell {
            value,
            revealed,
            marked,
        }
    }

    #[test]
    fn mark_cycles_back_to_none_after_three_steps() {
        let mark = Mark::None.cycle();
        assert_eq!(mark, Mark::Flag);
        let mark = mark.cycle();
        assert_eq!(mark, Mark::Question);
        assert_eq!(mark.cycle(), Mark::None);
    }

    #[test]
    fn new_cells_are_hidden_and_unmarked() {
        assert_eq!(Mark::default(), Mark::None);
        assert_eq!(Cell::default(), cell(CellValue::Count(0), false, Mark::None));
    }

    #[test]
    fn raw_values_follow_integer_encoding() {
        assert_eq!(CellValue::Count(3).raw(), 3);
        assert_eq!(CellValue::Hazard.raw(), -1);
        assert_eq!(CellValue::Detonated.raw(), -2);
    }

    #[test]
    fn hidden_cells_show_their_mark() {
        assert_eq!(cell(CellValue::Hazard, false, Mark::None).glyph(false), Glyph::Hidden);
        assert_eq!(cell(CellValue::Count(2), false, Mark::Flag).glyph(false), Glyph::Flag);
        assert_eq!(cell(CellValue::Count(2), false, Mark::Question).glyph(false), Glyph::Question);
    }

    #[test]
    fn revealed_cells_show_counts() {
        assert_eq!(cell(CellValue::Count(0), true, Mark::None).glyph(false), Glyph::Empty);
        assert_eq!(cell(CellValue::Count(4), true, Mark::None).glyph(false), Glyph::Number(4));
    }

    #[test]
    fn game_over_classifies_marks() {
        assert_eq!(cell(CellValue::Hazard, true, Mark::Flag).glyph(true), Glyph::FlaggedHazard);
        assert_eq!(cell(CellValue::Hazard, true, Mark::None).glyph(true), Glyph::Hazard);
        assert_eq!(cell(CellValue::Count(1), false, Mark::Flag).glyph(true), Glyph::MisplacedFlag);
        assert_eq!(cell(CellValue::Count(1), false, Mark::None).glyph(true), Glyph::Hidden);
        assert_eq!(cell(CellValue::Detonated, true, Mark::None).glyph(true), Glyph::Exploded);
    }
}
