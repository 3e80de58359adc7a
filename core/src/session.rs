use alloc::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> NotStarted, on reset or options change
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn status(self) -> GameStatus {
        GameStatus {
            in_progress: matches!(self, Self::InProgress),
            is_game_over: self.is_finished(),
        }
    }
}

/// Coarse status flags for a renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub in_progress: bool,
    pub is_game_over: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub revealed: CellCount,
    /// Cells currently flagged, questioned cells are not counted.
    pub marked: CellCount,
}

/// Everything a host can ask the session to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(CellIndex),
    Mark(CellIndex),
    SetOptions(GridOptions),
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
    Restarted,
}

impl Transition {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(outcome) => outcome.has_update(),
            Self::Restarted => true,
        }
    }
}

/// A game from first reveal to win or loss, and every game after it.
///
/// The grid is handed out as a shared snapshot. A snapshot a caller holds on to is never modified, the
/// session copies it before applying the next change.
#[derive(Clone, Debug)]
pub struct GameSession<P = SeededPlacer> {
    options: GridOptions,
    grid: Arc<Grid>,
    state: SessionState,
    hazards: CellCount,
    detonated: Option<CellIndex>,
    revision: u64,
    placer: P,
}

impl GameSession<SeededPlacer> {
    pub fn with_seed(options: GridOptions, seed: u64) -> Self {
        Self::new(options, SeededPlacer::from_seed(seed))
    }
}

impl<P: HazardPlacer> GameSession<P> {
    pub fn new(options: GridOptions, placer: P) -> Self {
        Self {
            options,
            grid: Arc::new(Grid::from_options(&options)),
            state: Default::default(),
            hazards: options.hazards(),
            detonated: None,
            revision: 0,
            placer,
        }
    }

    pub fn options(&self) -> GridOptions {
        self.options
    }

    /// Current grid snapshot.
    pub fn grid(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Bumped once for every action that changed the session.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn detonated(&self) -> Option<CellIndex> {
        self.detonated
    }

    pub fn score(&self) -> Score {
        Score {
            revealed: self.grid.revealed_count(),
            marked: self.grid.flagged_count(),
        }
    }

    /// Hazards not yet accounted for by a flag, negative when the player over-flags.
    pub fn hazards_left(&self) -> isize {
        (self.hazards as isize) - (self.grid.flagged_count() as isize)
    }

    pub fn placer(&self) -> &P {
        &self.placer
    }

    pub fn apply(&mut self, action: Action) -> Result<Transition> {
        Ok(match action {
            Action::Reveal(index) => Transition::Reveal(self.reveal(index)?),
            Action::Mark(index) => Transition::Mark(self.mark(index)?),
            Action::SetOptions(options) => {
                self.set_options(options);
                Transition::Restarted
            }
            Action::Reset => {
                self.reset();
                Transition::Restarted
            }
        })
    }

    /// Uncovers a cell. The first reveal of a game lays out the hazards around it, so it is always safe.
    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        use CellValue::*;
        use RevealOutcome::*;

        let index = self.grid.validate_index(index)?;

        match self.state {
            SessionState::Won | SessionState::Lost => return Ok(NoChange),
            SessionState::NotStarted => self.start(index)?,
            SessionState::InProgress => {}
        }

        let cell = self.grid[index];
        if cell.revealed || cell.is_flagged() {
            return Ok(NoChange);
        }

        let outcome = match cell.value {
            Hazard => {
                self.detonate(index);
                HitHazard
            }
            Detonated => NoChange,
            Count(0) => {
                let opened = chain_reveal(index, &self.grid);
                log::debug!("Reveal at {} opened {} cells", index, opened.len());
                Arc::make_mut(&mut self.grid).reveal_all(&opened);
                Revealed
            }
            Count(_) => {
                Arc::make_mut(&mut self.grid).cell_mut(index).revealed = true;
                Revealed
            }
        };

        let outcome = if outcome == Revealed && self.all_safe_revealed() {
            self.state = SessionState::Won;
            log::debug!("Game won after {} revisions", self.revision + 1);
            Won
        } else {
            outcome
        };

        if outcome.has_update() {
            self.revision += 1;
        }
        Ok(outcome)
    }

    /// Cycles the mark on a hidden cell: none, flag, question, none.
    pub fn mark(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        let index = self.grid.validate_index(index)?;

        if !matches!(self.state, SessionState::InProgress) || self.grid[index].revealed {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = Arc::make_mut(&mut self.grid).cell_mut(index);
        cell.marked = cell.marked.cycle();
        self.revision += 1;
        Ok(MarkOutcome::Changed)
    }

    /// Switches to new options and starts over.
    pub fn set_options(&mut self, options: GridOptions) {
        log::debug!(
            "Options changed to {}x{} with {} hazards",
            options.width(),
            options.height(),
            options.hazards()
        );
        self.options = options;
        self.reset();
    }

    /// Abandons the current game, leaving an empty grid.
    pub fn reset(&mut self) {
        self.grid = Arc::new(Grid::from_options(&self.options));
        self.state = SessionState::NotStarted;
        self.hazards = self.options.hazards();
        self.detonated = None;
        self.revision += 1;
    }

    fn start(&mut self, first: CellIndex) -> Result<()> {
        let options = self.options;
        let placed = self.placer.place(options.hazards(), options.total_cells(), first);
        let grid = Grid::with_hazards(options.width(), options.height(), &placed)?;

        self.hazards = grid.hazard_count();
        self.grid = Arc::new(grid);
        self.state = SessionState::InProgress;
        log::debug!("Game started at cell {} with {} hazards", first, self.hazards);
        Ok(())
    }

    fn detonate(&mut self, index: CellIndex) {
        let grid = Arc::make_mut(&mut self.grid);
        for hazard in 0..grid.len() {
            let cell = grid.cell_mut(hazard);
            if cell.value.is_hazard() {
                cell.revealed = true;
            }
        }

        let cell = grid.cell_mut(index);
        cell.value = CellValue::Detonated;
        cell.marked = Mark::None;

        self.detonated = Some(index);
        self.state = SessionState::Lost;
        log::debug!("Game lost, hazard hit at {}", index);
    }

    fn all_safe_revealed(&self) -> bool {
        self.grid.revealed_count() == self.grid.len() - self.hazards
    }
}
