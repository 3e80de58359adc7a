#![cfg_attr(not(test), no_std)]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod reveal;
mod session;
mod types;

/// Shape of a game: grid dimensions and how many hazards to hide in it.
///
/// Only [`GridOptions::new`], deserialization and the [`Difficulty`] presets produce values, so every
/// `GridOptions` has at least one cell and at least one safe cell.
///
/// ```compile_fail
/// let options = sweep_core::GridOptions::new_unchecked(3, 3, 9);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGridOptions")]
pub struct GridOptions {
    width: Coord,
    height: Coord,
    hazards: CellCount,
}

impl GridOptions {
    pub(crate) const fn new_unchecked(width: Coord, height: Coord, hazards: CellCount) -> Self {
        Self {
            width,
            height,
            hazards,
        }
    }

    /// Validates that the grid has at least one cell and that at least one cell stays safe.
    pub fn new(width: Coord, height: Coord, hazards: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let cells = mult(width, height);
        if hazards >= cells {
            return Err(GameError::TooManyHazards { hazards, cells });
        }

        Ok(Self::new_unchecked(width, height, hazards))
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn hazards(&self) -> CellCount {
        self.hazards
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.hazards)
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Difficulty::default().options()
    }
}

#[derive(Deserialize)]
struct UncheckedGridOptions {
    width: Coord,
    height: Coord,
    hazards: CellCount,
}

impl TryFrom<UncheckedGridOptions> for GridOptions {
    type Error = GameError;

    fn try_from(raw: UncheckedGridOptions) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.hazards)
    }
}

/// Preset grid shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn options(self) -> GridOptions {
        match self {
            Self::Easy => GridOptions::new_unchecked(8, 8, 10),
            Self::Medium => GridOptions::new_unchecked(15, 15, 64),
            Self::Hard => GridOptions::new_unchecked(30, 15, 100),
        }
    }
}

impl From<Difficulty> for GridOptions {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.options()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitHazard,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitHazard => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_reject_empty_grids() {
        assert_eq!(GridOptions::new(0, 5, 0), Err(GameError::InvalidDimensions));
        assert_eq!(GridOptions::new(5, 0, 0), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn options_keep_one_safe_cell() {
        assert_eq!(
            GridOptions::new(3, 3, 9),
            Err(GameError::TooManyHazards {
                hazards: 9,
                cells: 9
            })
        );
        let options = GridOptions::new(3, 3, 8).unwrap();
        assert_eq!(options.safe_cells(), 1);
    }

    #[test]
    fn presets_are_valid() {
        for difficulty in Difficulty::ALL {
            let preset = difficulty.options();
            let checked = GridOptions::new(preset.width(), preset.height(), preset.hazards());
            assert_eq!(checked, Ok(preset));
        }
        assert_eq!(GridOptions::default(), Difficulty::Easy.options());
        assert_eq!(Difficulty::Hard.options().total_cells(), 450);
    }

    #[test]
    fn deserialized_options_are_validated() {
        let ok: GridOptions =
            serde_json::from_str(r#"{"width":15,"height":15,"hazards":64}"#).unwrap();
        assert_eq!(ok, Difficulty::Medium.options());

        let err = serde_json::from_str::<GridOptions>(r#"{"width":2,"height":2,"hazards":4}"#);
        assert!(err.is_err());
    }

    #[test]
    fn overfull_options_are_rejected() {
        for (width, height, hazards) in [(3, 3, 9), (3, 3, 10), (0, 0, 0), (1, 1, 1)] {
            assert!(GridOptions::new(width, height, hazards).is_err());
        }
        assert!(serde_json::from_str::<GridOptions>(r#"{"width":0,"height":0,"hazards":0}"#).is_err());
    }

    #[test]
    fn difficulty_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), r#""hard""#);
    }
}
