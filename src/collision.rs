//! Point-in-set membership queries shared by movement, placement and the session.

use std::collections::VecDeque;

use crate::snake::Position;

/// Returns true iff `point` equals a member of `cells` on both coordinates.
#[must_use]
pub fn contains<'a, I>(cells: I, point: Position) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    cells.into_iter().any(|cell| *cell == point)
}

/// Returns true when the head (last segment) re-visits any earlier segment.
#[must_use]
pub fn hits_self(body: &VecDeque<Position>) -> bool {
    let Some(&head) = body.back() else {
        return false;
    };

    contains(body.iter().take(body.len() - 1), head)
}

/// Returns true when `head` sits on a wall or obstacle cell.
#[must_use]
pub fn hits_wall(walls: &[Position], head: Position) -> bool {
    contains(walls, head)
}
