use crate::config::GRID_SIZE;
use crate::input::Direction;

/// Logical cell coordinates on the fixed grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside the grid.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Returns the center cell of the grid.
#[must_use]
pub fn center() -> Cell {
    Cell::new(GRID_SIZE / 2, GRID_SIZE / 2)
}

/// Enumerates every grid cell not claimed by `is_occupied`, in row-major
/// order (y outer, x inner). The stable order keeps downstream random
/// selection reproducible for a seeded rng.
#[must_use]
pub fn free_cells(is_occupied: impl Fn(Cell) -> bool) -> Vec<Cell> {
    let mut free = Vec::new();

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let cell = Cell::new(x, y);
            if !is_occupied(cell) {
                free.push(cell);
            }
        }
    }

    free
}
