use log::{debug, warn};
use rand::Rng;

use crate::collision;
use crate::config::{
    FOOD_PLACEMENT_ATTEMPTS, GridSize, OBSTACLE_SCORE_INTERVAL, OBSTACLES_PER_TRIGGER,
    SCORE_BAND_COLUMNS, SCORE_BAND_ROW,
};
use crate::snake::Position;

/// Returns true for cells reserved for the on-screen score readout.
#[must_use]
pub fn in_score_band(position: Position) -> bool {
    position.y == SCORE_BAND_ROW && position.x < SCORE_BAND_COLUMNS
}

/// Builds the permanent border: every cell on the outer ring of the grid.
#[must_use]
pub fn perimeter(bounds: GridSize) -> Vec<Position> {
    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);
    let mut walls = Vec::with_capacity(2 * (bounds.width as usize + bounds.height as usize));

    for x in 0..width {
        walls.push(Position::new(x, 0));
        walls.push(Position::new(x, height - 1));
    }
    for y in 1..height - 1 {
        walls.push(Position::new(0, y));
        walls.push(Position::new(width - 1, y));
    }

    walls
}

/// Samples a uniform position with a one-cell margin on every side.
pub fn random_interior<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position::new(
        rng.gen_range(1..=bounds.max_inner_x().max(1)),
        rng.gen_range(1..=bounds.max_inner_y().max(1)),
    )
}

/// Picks a food cell outside the score band that avoids walls and `occupied`.
///
/// Random samples are tried first; after [`FOOD_PLACEMENT_ATTEMPTS`] misses
/// the interior is scanned row by row for the first valid cell.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    walls: &[Position],
    occupied: &[Position],
) -> Position {
    let is_valid = |candidate: Position| {
        !in_score_band(candidate)
            && !collision::contains(walls, candidate)
            && !collision::contains(occupied, candidate)
    };

    let mut candidate = random_interior(rng, bounds);
    for _ in 1..FOOD_PLACEMENT_ATTEMPTS {
        if is_valid(candidate) {
            return candidate;
        }
        candidate = random_interior(rng, bounds);
    }
    if is_valid(candidate) {
        return candidate;
    }

    warn!("food placement missed {FOOD_PLACEMENT_ATTEMPTS} samples; scanning for a free cell");
    match first_free_cell(bounds, is_valid) {
        Some(position) => position,
        None => {
            warn!("no free cell left for food; reusing {candidate:?}");
            candidate
        }
    }
}

fn first_free_cell(bounds: GridSize, is_valid: impl Fn(Position) -> bool) -> Option<Position> {
    (1..=bounds.max_inner_y())
        .flat_map(|y| (1..=bounds.max_inner_x()).map(move |x| Position::new(x, y)))
        .find(|candidate| is_valid(*candidate))
}

/// Returns true when `score` triggers obstacle growth.
#[must_use]
pub fn obstacles_due(score: u32) -> bool {
    score > 0 && score % OBSTACLE_SCORE_INTERVAL == 0
}

/// Adds up to [`OBSTACLES_PER_TRIGGER`] interior obstacles when `score` is due.
///
/// Each slot gets exactly one sample. A sample that lands on the snake, on the
/// food or inside the score band is dropped rather than retried. Returns the
/// number of obstacles appended to `walls`.
pub fn add_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    score: u32,
    bounds: GridSize,
    walls: &mut Vec<Position>,
    food: Position,
    body: &[Position],
) -> usize {
    if !obstacles_due(score) {
        return 0;
    }

    let mut added = 0;
    for _ in 0..OBSTACLES_PER_TRIGGER {
        let wall = random_interior(rng, bounds);
        if collision::contains(body, wall) || wall == food || in_score_band(wall) {
            debug!("obstacle sample {wall:?} rejected");
            continue;
        }

        walls.push(wall);
        added += 1;
    }

    added
}
