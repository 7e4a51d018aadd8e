#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use format::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod controller;
mod engine;
mod error;
mod format;
mod generator;
mod grid;
mod types;

pub const GRID_SIZE: CellCount = 60;
pub const NUMBER_COUNT: CellCount = 5;
pub const MIN_VALUE: Digit = 1;
pub const MAX_VALUE: Digit = 9;
pub const SHOW_TIME_MS: Millis = 800;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: CellCount,
    pub number_count: CellCount,
    pub min_value: Digit,
    pub max_value: Digit,
    pub reveal_ms: Millis,
}

impl GameConfig {
    pub const fn new_unchecked(
        grid_size: CellCount,
        number_count: CellCount,
        min_value: Digit,
        max_value: Digit,
        reveal_ms: Millis,
    ) -> Self {
        Self {
            grid_size,
            number_count,
            min_value,
            max_value,
            reveal_ms,
        }
    }

    pub fn new(
        grid_size: CellCount,
        number_count: CellCount,
        min_value: Digit,
        max_value: Digit,
        reveal_ms: Millis,
    ) -> Result<Self> {
        let config =
            Self::new_unchecked(grid_size, number_count, min_value, max_value, reveal_ms);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.number_count == 0 {
            return Err(GameError::InvalidConfig);
        }
        if self.number_count > self.grid_size {
            return Err(GameError::InvalidConfig);
        }
        if self.min_value > self.max_value {
            return Err(GameError::InvalidConfig);
        }
        if self.number_count > self.value_range_size() {
            return Err(GameError::InvalidConfig);
        }
        Ok(())
    }

    /// Number of distinct values a cell can be dealt, zero for an inverted range.
    pub const fn value_range_size(&self) -> CellCount {
        if self.min_value > self.max_value {
            0
        } else {
            (self.max_value - self.min_value) as CellCount + 1
        }
    }

    pub const fn with_reveal_ms(self, reveal_ms: Millis) -> Self {
        Self { reveal_ms, ..self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(GRID_SIZE, NUMBER_COUNT, MIN_VALUE, MAX_VALUE, SHOW_TIME_MS)
    }
}

/// The cells and values dealt for one round, along with the order they must be clicked in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLayout {
    assignments: Vec<(CellId, Digit)>,
    target: Vec<Digit>,
}

impl RoundLayout {
    pub fn from_assignments(config: &GameConfig, assignments: &[(CellId, Digit)]) -> Result<Self> {
        if assignments.len() != usize::from(config.number_count) {
            return Err(GameError::InvalidLayout);
        }

        let mut ids = BTreeSet::new();
        let mut values = BTreeSet::new();
        for &(id, value) in assignments {
            if id == 0 || id > config.grid_size {
                return Err(GameError::InvalidCell);
            }
            if value < config.min_value || value > config.max_value {
                return Err(GameError::InvalidLayout);
            }
            // a repeated value would make the round unsolvable
            if !ids.insert(id) || !values.insert(value) {
                return Err(GameError::InvalidLayout);
            }
        }

        Ok(Self {
            assignments: assignments.to_vec(),
            target: values.into_iter().collect(),
        })
    }

    pub fn assignments(&self) -> &[(CellId, Digit)] {
        &self.assignments
    }

    /// Dealt values in ascending order.
    pub fn target(&self) -> &[Digit] {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn value_at(&self, id: CellId) -> Option<Digit> {
        self.assignments
            .iter()
            .find(|&&(cell_id, _)| cell_id == id)
            .map(|&(_, value)| value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    NoChange,
    Changed,
}

impl UpdateOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Correct,
    Won,
    Lost,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Correct => true,
            Won => true,
            Lost => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_game() {
        let config = GameConfig::default();

        assert_eq!(config.grid_size, 60);
        assert_eq!(config.number_count, 5);
        assert_eq!(config.value_range_size(), 9);
        assert_eq!(config.reveal_ms, 800);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_more_numbers_than_values() {
        assert_eq!(
            GameConfig::new(60, 10, 1, 9, 800),
            Err(GameError::InvalidConfig)
        );
        assert_eq!(GameConfig::new(4, 5, 1, 9, 800), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(60, 5, 9, 1, 800), Err(GameError::InvalidConfig));
        assert!(GameConfig::new(9, 9, 1, 9, 0).is_ok());
    }

    #[test]
    fn layout_target_is_sorted_values() {
        let config = GameConfig::default();
        let layout =
            RoundLayout::from_assignments(&config, &[(7, 9), (1, 2), (60, 6), (33, 4), (12, 7)])
                .unwrap();

        assert_eq!(layout.target(), &[2, 4, 6, 7, 9]);
        assert_eq!(layout.value_at(60), Some(6));
        assert_eq!(layout.value_at(2), None);
    }

    #[test]
    fn layout_rejects_duplicates_and_out_of_range() {
        let config = GameConfig::default();

        assert_eq!(
            RoundLayout::from_assignments(&config, &[(1, 1), (2, 1), (3, 3), (4, 4), (5, 5)]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            RoundLayout::from_assignments(&config, &[(1, 1), (1, 2), (3, 3), (4, 4), (5, 5)]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            RoundLayout::from_assignments(&config, &[(0, 1), (2, 2), (3, 3), (4, 4), (5, 5)]),
            Err(GameError::InvalidCell)
        );
        assert_eq!(
            RoundLayout::from_assignments(&config, &[(61, 1), (2, 2), (3, 3), (4, 4), (5, 5)]),
            Err(GameError::InvalidCell)
        );
        assert_eq!(
            RoundLayout::from_assignments(&config, &[(1, 0), (2, 2), (3, 3), (4, 4), (5, 5)]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            RoundLayout::from_assignments(&config, &[(1, 1), (2, 2)]),
            Err(GameError::InvalidLayout)
        );
    }
}
