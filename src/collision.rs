use crate::grid::Cell;
use crate::snake::Snake;

/// What the head would run into on its next step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

impl Collision {
    /// Short lowercase phrase for menus and logs.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Collision::Wall => "hit the wall",
            Collision::SelfCollision => "ran into yourself",
        }
    }
}

/// Checks the prospective head cell against the walls, then against the
/// pre-move body. The tail counts as occupied even though it would move
/// away on the same tick.
pub fn check(next_head: Cell, snake: &Snake) -> Option<Collision> {
    if !next_head.in_bounds() {
        return Some(Collision::Wall);
    }

    if snake.occupies(next_head) {
        return Some(Collision::SelfCollision);
    }

    None
}
