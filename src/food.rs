use rand::Rng;

use crate::grid::{Cell, GRID_HEIGHT, GRID_WIDTH};

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn spawn<R: Rng>(rng: &mut R, occupied: &[Cell]) -> Self {
        Food { position: place(rng, occupied) }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn relocate<R: Rng>(&mut self, rng: &mut R, occupied: &[Cell]) {
        self.position = place(rng, occupied);
    }
}

/// Samples uniformly random cells until one falls outside `occupied`.
/// Terminates almost surely as long as the snake leaves at least one cell of
/// the board free, which it does by a wide margin in practice.
pub fn place<R: Rng>(rng: &mut R, occupied: &[Cell]) -> Cell {
    loop {
        let cell = Cell {
            col: rng.gen_range(0..GRID_WIDTH),
            row: rng.gen_range(0..GRID_HEIGHT),
        };

        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
