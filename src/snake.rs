use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::grid::{self, Cell};

/// Ordered snake body; the head is the front element, the tail the back.
///
/// Movement direction is not stored here. The game state owns a single
/// direction field written once per tick.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates the initial snake: three cells on the center row with the
    /// head at the rightmost, which sits on the exact grid center.
    #[must_use]
    pub fn spawn() -> Self {
        let head = grid::center();
        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LENGTH);

        for offset in 0..INITIAL_SNAKE_LENGTH {
            body.push_back(Cell::new(head.x - offset as i32, head.y));
        }

        Self { body }
    }

    /// Creates a snake from explicit cells (front is head).
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            body: VecDeque::from(cells),
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one cell")
    }

    /// Returns the current tail cell.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one cell")
    }

    /// Returns true if any body cell equals `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Moves the head to `next_head`; the tail is kept when `grow` is set
    /// and dropped otherwise.
    pub fn advance(&mut self, next_head: Cell, grow: bool) {
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Cell;

    use super::Snake;

    #[test]
    fn spawned_snake_is_centered_with_head_rightmost() {
        let snake = Snake::spawn();
        let cells: Vec<Cell> = snake.cells().copied().collect();

        assert_eq!(
            cells,
            vec![Cell::new(12, 12), Cell::new(11, 12), Cell::new(10, 12)]
        );
        assert_eq!(snake.head(), Cell::new(12, 12));
        assert_eq!(snake.tail(), Cell::new(10, 12));
    }

    #[test]
    fn advance_moves_head_and_drops_tail() {
        let mut snake = Snake::spawn();

        snake.advance(Cell::new(13, 12), false);

        assert_eq!(snake.head(), Cell::new(13, 12));
        assert_eq!(snake.tail(), Cell::new(11, 12));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::spawn();

        snake.advance(Cell::new(13, 12), true);

        assert_eq!(snake.head(), Cell::new(13, 12));
        assert_eq!(snake.tail(), Cell::new(10, 12));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn occupies_covers_every_cell_including_tail() {
        let snake = Snake::from_cells(vec![
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(6, 6),
        ]);

        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(6, 6)));
        assert!(!snake.occupies(Cell::new(7, 7)));
        assert!(!snake.is_empty());
        assert_eq!(snake.len(), 3);
    }
}
