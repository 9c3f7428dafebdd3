use std::collections::VecDeque;

use crate::collision;
use crate::config::{GridSize, START_LENGTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns true for cells on the outer ring of the grid.
    #[must_use]
    pub fn is_on_perimeter(self, bounds: GridSize) -> bool {
        self.is_within_bounds(bounds)
            && (self.x == 0
                || self.y == 0
                || self.x == i32::from(bounds.width) - 1
                || self.y == i32::from(bounds.height) - 1)
    }

    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position clamped one cell inside the border on both axes.
    #[must_use]
    pub fn clamped_inside(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.clamp(1, bounds.max_inner_x().max(1)),
            y: self.y.clamp(1, bounds.max_inner_y().max(1)),
        }
    }
}

/// Snake body with its travel direction.
///
/// Segments are stored tail first; the back of the deque is the head.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates the canonical three-segment snake at the grid center, heading right.
    #[must_use]
    pub fn spawn(bounds: GridSize) -> Self {
        let center_x = i32::from(bounds.width / 2);
        let center_y = i32::from(bounds.height / 2);
        let body = (0..START_LENGTH as i32)
            .map(|offset| Position::new(center_x + offset, center_y))
            .collect();

        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit segments, tail first and head last.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Moves one cell along the current direction, clamped inside the border.
    ///
    /// The tail is kept when `grow` is set, so length increases by one.
    pub fn advance(&mut self, bounds: GridSize, grow: bool) {
        let next_head = self.head().step(self.direction).clamped_inside(bounds);

        self.body.push_back(next_head);
        if !grow {
            let _ = self.body.pop_front();
        }
    }

    /// Changes direction when the turn is legal. Returns whether it was applied.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !self.direction.accepts(direction) {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        collision::contains(&self.body, position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        collision::hits_self(&self.body)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Returns the raw segment deque, tail first.
    #[must_use]
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 12,
        height: 10,
    };

    #[test]
    fn spawn_places_three_segments_heading_right() {
        let snake = Snake::spawn(GridSize {
            width: 32,
            height: 32,
        });

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position::new(16, 16),
                Position::new(17, 16),
                Position::new(18, 16),
            ]
        );
        assert_eq!(snake.head(), Position::new(18, 16));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::spawn(BOUNDS);
        let before = snake.head();

        snake.advance(BOUNDS, false);

        assert_eq!(snake.head(), Position::new(before.x + 1, before.y));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let mut snake = Snake::spawn(BOUNDS);
        let tail = *snake.segments().next().expect("tail");

        snake.advance(BOUNDS, true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments().next(), Some(&tail));
    }

    #[test]
    fn advance_clamps_head_inside_border() {
        let corners = [
            Position::new(1, 1),
            Position::new(10, 1),
            Position::new(1, 8),
            Position::new(10, 8),
            Position::new(0, 0),
            Position::new(11, 9),
        ];

        for start in corners {
            for direction in Direction::ALL {
                let mut snake = Snake::from_segments(vec![start], direction);
                snake.advance(BOUNDS, false);

                let head = snake.head();
                assert!((1..=10).contains(&head.x), "{start:?} {direction:?} -> {head:?}");
                assert!((1..=8).contains(&head.y), "{start:?} {direction:?} -> {head:?}");
            }
        }
    }

    #[test]
    fn stalling_against_the_edge_duplicates_the_head() {
        let mut snake = Snake::from_segments(
            vec![Position::new(8, 4), Position::new(9, 4), Position::new(10, 4)],
            Direction::Right,
        );

        snake.advance(BOUNDS, false);

        assert_eq!(snake.head(), Position::new(10, 4));
        assert!(snake.head_overlaps_body());
    }

    #[test]
    fn turn_rejects_reverse() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5)], Direction::Up);

        assert!(!snake.turn(Direction::Down));
        snake.advance(BOUNDS, false);

        assert_eq!(snake.head(), Position::new(5, 4));
    }

    #[test]
    fn turn_applies_on_next_advance() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5)], Direction::Right);

        assert!(snake.turn(Direction::Down));
        snake.advance(BOUNDS, false);

        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn perimeter_cells_are_detected() {
        assert!(Position::new(0, 4).is_on_perimeter(BOUNDS));
        assert!(Position::new(11, 9).is_on_perimeter(BOUNDS));
        assert!(Position::new(5, 0).is_on_perimeter(BOUNDS));
        assert!(!Position::new(1, 1).is_on_perimeter(BOUNDS));
        assert!(!Position::new(12, 4).is_on_perimeter(BOUNDS));
    }
}
