use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered cells with ids `1..=size`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: CellCount) -> Self {
        Self {
            cells: (1..=size).map(Cell::empty).collect(),
        }
    }

    pub fn size(&self) -> CellCount {
        // built from a `CellCount` range
        self.cells.len() as CellCount
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, id: CellId) -> Option<&Cell> {
        let index = usize::from(id.checked_sub(1)?);
        self.cells.get(index)
    }

    pub fn validate_id(&self, id: CellId) -> Result<CellId> {
        if self.get(id).is_some() {
            Ok(id)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.active).count()
    }

    /// Assigns the layout's values and activates those cells, leaving the grid untouched on error.
    pub fn deal(&mut self, layout: &RoundLayout) -> Result<()> {
        for &(id, _) in layout.assignments() {
            self.validate_id(id)?;
        }

        for &(id, value) in layout.assignments() {
            let cell = &mut self.cells[usize::from(id) - 1];
            cell.value = Some(value);
            cell.active = true;
        }
        Ok(())
    }

    pub(crate) fn consume(&mut self, id: CellId) {
        if let Some(index) = id.checked_sub(1) {
            if let Some(cell) = self.cells.get_mut(usize::from(index)) {
                cell.active = false;
            }
        }
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Self::Output {
        &self.cells[usize::from(id) - 1]
    }
}
