use crate::snake::Direction;
use crate::Coords;

pub const GRID_WIDTH: i16 = 32;
pub const GRID_HEIGHT: i16 = 24;

// Terminal characters are taller than they are wide, so a cell spans two
// columns to come out roughly square on screen.
pub const CELL_WIDTH: u16 = 2;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cell {
    pub col: i16,
    pub row: i16,
}

impl Cell {
    /// Builds a cell from unbounded coordinates, wrapping both axes onto the
    /// board. `rem_euclid` keeps the result non-negative, so stepping off the
    /// left or top edge lands on the far side instead of underflowing.
    pub fn wrapped(col: i16, row: i16) -> Self {
        Cell {
            col: col.rem_euclid(GRID_WIDTH),
            row: row.rem_euclid(GRID_HEIGHT),
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell::wrapped(self.col + dx, self.row + dy)
    }

    /// Terminal position of the cell's leftmost character.
    pub fn to_screen(self) -> Coords {
        (self.col as u16 * CELL_WIDTH, self.row as u16)
    }

    pub fn center() -> Self {
        Cell {
            col: GRID_WIDTH / 2,
            row: GRID_HEIGHT / 2,
        }
    }
}
