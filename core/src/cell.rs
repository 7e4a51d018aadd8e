use serde::{Deserialize, Serialize};

use crate::*;

/// A single grid slot as seen by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub value: Option<Digit>,
    pub active: bool,
}

impl Cell {
    pub const fn empty(id: CellId) -> Self {
        Self {
            id,
            value: None,
            active: false,
        }
    }

    /// Whether a click on this cell can count towards the round.
    pub const fn is_clickable(self) -> bool {
        self.active && self.value.is_some()
    }

    /// Dealt and already clicked in the right order.
    pub const fn is_cleared(self) -> bool {
        !self.active && self.value.is_some()
    }
}
