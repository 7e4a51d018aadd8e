use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Idle,
    Showing,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn can_start(self) -> bool {
        matches!(self, Self::Idle | Self::Won | Self::Lost)
    }

    pub const fn shows_numbers(self) -> bool {
        matches!(self, Self::Showing)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn has_won(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn has_lost(self) -> bool {
        matches!(self, Self::Lost)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Round state machine. Time is passed in by the caller, so the engine itself is deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryEngine {
    config: GameConfig,
    grid: Grid,
    target: Vec<Digit>,
    progress: CellCount,
    state: GameState,
    round: RoundId,
    started_at: Millis,
    elapsed: Millis,
}

impl MemoryEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.grid_size),
            target: Vec::new(),
            progress: 0,
            state: Default::default(),
            round: 0,
            started_at: 0,
            elapsed: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn target(&self) -> &[Digit] {
        &self.target
    }

    pub fn progress(&self) -> CellCount {
        self.progress
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    /// Time taken to clear the round, zero until it is won.
    pub fn elapsed_ms(&self) -> Millis {
        self.elapsed
    }

    /// Deals `layout` onto a fresh grid and starts showing it.
    pub fn start(&mut self, layout: &RoundLayout, now: Millis) -> Result<RoundId> {
        if !self.state.can_start() {
            return Err(GameError::RoundInProgress);
        }
        if layout.len() != usize::from(self.config.number_count) {
            return Err(GameError::InvalidLayout);
        }

        let mut grid = Grid::new(self.config.grid_size);
        grid.deal(layout)?;

        self.grid = grid;
        self.target = layout.target().to_vec();
        self.progress = 0;
        self.elapsed = 0;
        self.started_at = now;
        self.round = self.round.wrapping_add(1);
        self.state = GameState::Showing;

        log::debug!("round {} dealt, target: {:?}", self.round, self.target);
        Ok(self.round)
    }

    /// Hides the numbers and accepts clicks, but only for the round currently being shown.
    pub fn end_reveal(&mut self, round: RoundId) -> UpdateOutcome {
        if round != self.round || !self.state.shows_numbers() {
            log::warn!(
                "ignoring stale reveal timeout for round {} (current round {}, {:?})",
                round,
                self.round,
                self.state
            );
            return UpdateOutcome::NoChange;
        }

        self.state = GameState::Playing;
        log::debug!("round {} hidden, waiting for clicks", round);
        UpdateOutcome::Changed
    }

    pub fn click(&mut self, id: CellId, now: Millis) -> Result<ClickOutcome> {
        use ClickOutcome::*;

        let id = self.grid.validate_id(id)?;
        self.check_playing()?;

        let cell = self.grid[id];
        let Some(value) = cell.value.filter(|_| cell.active) else {
            return Ok(NoChange);
        };

        let expected = self.target.get(usize::from(self.progress)).copied();
        if expected != Some(value) {
            log::debug!("cell {} has {}, expected {:?}", id, value, expected);
            self.state = GameState::Lost;
            return Ok(Lost);
        }

        self.grid.consume(id);
        self.progress += 1;

        if usize::from(self.progress) == self.target.len() {
            self.state = GameState::Won;
            self.elapsed = now.saturating_sub(self.started_at);
            Ok(Won)
        } else {
            Ok(Correct)
        }
    }

    /// Back to an empty idle grid. Any reveal timeout still in flight no longer matches a round.
    pub fn reset(&mut self) -> UpdateOutcome {
        let fresh = Grid::new(self.config.grid_size);
        let changed = self.state != GameState::Idle
            || self.grid != fresh
            || self.progress != 0
            || self.elapsed != 0
            || !self.target.is_empty();

        self.grid = fresh;
        self.target.clear();
        self.progress = 0;
        self.elapsed = 0;
        self.state = GameState::Idle;
        self.round = self.round.wrapping_add(1);

        if changed {
            UpdateOutcome::Changed
        } else {
            UpdateOutcome::NoChange
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(GameError::NotPlaying)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> RoundLayout {
        RoundLayout::from_assignments(
            &GameConfig::default(),
            &[(3, 7), (18, 2), (25, 9), (40, 4), (57, 6)],
        )
        .unwrap()
    }

    fn playing_engine() -> MemoryEngine {
        let mut engine = MemoryEngine::new(GameConfig::default());
        let round = engine.start(&layout(), 1_000).unwrap();
        assert_eq!(engine.end_reveal(round), UpdateOutcome::Changed);
        engine
    }

    #[test]
    fn start_deals_round_and_shows_it() {
        let mut engine = MemoryEngine::new(GameConfig::default());

        let round = engine.start(&layout(), 0).unwrap();

        assert_eq!(round, 1);
        assert_eq!(engine.state(), GameState::Showing);
        assert_eq!(engine.grid().active_count(), 5);
        assert_eq!(engine.target(), &[2, 4, 6, 7, 9]);
        assert_eq!(engine.progress(), 0);
    }

    #[test]
    fn start_is_rejected_mid_round() {
        let mut engine = MemoryEngine::new(GameConfig::default());
        engine.start(&layout(), 0).unwrap();

        assert_eq!(engine.start(&layout(), 5), Err(GameError::RoundInProgress));
        assert_eq!(engine.round(), 1);
    }

    #[test]
    fn clicking_in_ascending_order_wins() {
        let mut engine = playing_engine();

        assert_eq!(engine.click(18, 1_100), Ok(ClickOutcome::Correct));
        assert_eq!(engine.click(40, 1_200), Ok(ClickOutcome::Correct));
        assert_eq!(engine.click(57, 1_300), Ok(ClickOutcome::Correct));
        assert_eq!(engine.click(3, 1_400), Ok(ClickOutcome::Correct));
        assert_eq!(engine.click(25, 3_345), Ok(ClickOutcome::Won));

        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.progress(), 5);
        assert_eq!(engine.elapsed_ms(), 2_345);
        assert_eq!(engine.grid().active_count(), 0);
    }

    #[test]
    fn clicking_out_of_order_loses_immediately() {
        let mut engine = playing_engine();

        assert_eq!(engine.click(40, 1_100), Ok(ClickOutcome::Lost));

        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.progress(), 0);
        assert_eq!(engine.elapsed_ms(), 0);
        assert_eq!(engine.click(18, 1_200), Err(GameError::NotPlaying));
    }

    #[test]
    fn clicks_while_showing_or_idle_are_rejected() {
        let mut engine = MemoryEngine::new(GameConfig::default());
        assert_eq!(engine.click(18, 0), Err(GameError::NotPlaying));

        engine.start(&layout(), 0).unwrap();
        let before = engine.clone();
        assert_eq!(engine.click(18, 10), Err(GameError::NotPlaying));
        assert_eq!(engine, before);
    }

    #[test]
    fn empty_and_cleared_cells_are_ignored() {
        let mut engine = playing_engine();

        assert_eq!(engine.click(1, 1_100), Ok(ClickOutcome::NoChange));
        assert_eq!(engine.click(18, 1_100), Ok(ClickOutcome::Correct));
        assert_eq!(engine.click(18, 1_200), Ok(ClickOutcome::NoChange));
        assert_eq!(engine.progress(), 1);
        assert_eq!(engine.click(0, 1_200), Err(GameError::InvalidCell));
        assert_eq!(engine.click(61, 1_200), Err(GameError::InvalidCell));
    }

    #[test]
    fn stale_reveal_is_ignored() {
        let mut engine = MemoryEngine::new(GameConfig::default());
        let first = engine.start(&layout(), 0).unwrap();
        engine.reset();
        let second = engine.start(&layout(), 100).unwrap();

        assert_ne!(first, second);
        assert_eq!(engine.end_reveal(first), UpdateOutcome::NoChange);
        assert_eq!(engine.state(), GameState::Showing);
        assert_eq!(engine.end_reveal(second), UpdateOutcome::Changed);
        assert_eq!(engine.end_reveal(second), UpdateOutcome::NoChange);
        assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn reset_clears_finished_round() {
        let mut engine = playing_engine();
        engine.click(40, 1_100).unwrap();

        assert_eq!(engine.reset(), UpdateOutcome::Changed);

        assert_eq!(engine.state(), GameState::Idle);
        assert_eq!(engine.progress(), 0);
        assert_eq!(engine.elapsed_ms(), 0);
        assert!(engine.target().is_empty());
        assert_eq!(engine.grid(), &Grid::new(GRID_SIZE));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut engine = playing_engine();

        assert_eq!(engine.reset(), UpdateOutcome::Changed);
        let once = (engine.state(), engine.progress(), engine.elapsed_ms(), engine.grid().clone());
        assert_eq!(engine.reset(), UpdateOutcome::NoChange);
        let twice = (engine.state(), engine.progress(), engine.elapsed_ms(), engine.grid().clone());

        assert_eq!(once, twice);
    }
}
