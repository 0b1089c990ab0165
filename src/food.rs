use rand::Rng;

use crate::grid::{self, Cell};
use crate::snake::Snake;

/// Cell the spawner falls back to when no free cell exists.
pub const FALLBACK_FOOD_CELL: Cell = Cell { x: 0, y: 0 };

/// Picks a food cell uniformly at random from the cells the snake does
/// not occupy. A fully occupied board yields [`FALLBACK_FOOD_CELL`].
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Cell {
    let free = grid::free_cells(|cell| snake.occupies(cell));

    if free.is_empty() {
        return FALLBACK_FOOD_CELL;
    }

    free[rng.gen_range(0..free.len())]
}
