use std::collections::HashSet;

use rand::Rng;

use super::state::{Cell, SnakeBody};

/// Coins currently lying in the play volume
#[derive(Debug, Clone, PartialEq)]
pub struct CoinSet {
    cells: HashSet<Cell>,
    capacity: usize,
}

impl CoinSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.capacity
    }

    /// Place a coin on a random free cell of the volume.
    ///
    /// Candidates landing on the snake or on another coin are redrawn, so
    /// the volume must hold free cells (guaranteed by `GameConfig::validate`).
    /// Returns `None` when the set is already at capacity.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        snake: &SnakeBody,
        half_extent: i32,
        rng: &mut R,
    ) -> Option<Cell> {
        if self.is_full() {
            return None;
        }

        loop {
            let cell = Cell::new(
                rng.gen_range(-half_extent..=half_extent),
                rng.gen_range(-half_extent..=half_extent),
                rng.gen_range(-half_extent..=half_extent),
            );

            if !snake.contains(cell) && !self.cells.contains(&cell) {
                self.cells.insert(cell);
                return Some(cell);
            }
        }
    }

    /// Remove the coin at `cell`; false if there was none
    pub fn consume(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Put a coin at a known cell, respecting the capacity
    pub fn insert(&mut self, cell: Cell) -> bool {
        !self.is_full() && self.cells.insert(cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
