use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::collision;
use crate::config::{GridSize, POWER_FLASH_DURATION};
use crate::food::{add_obstacles, perimeter, place_food};
use crate::input::Direction;
use crate::rewards::RewardGrid;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    SelfCollision,
    WallCollision,
}

/// Deadline for the post-meal highlight. Re-armed on every meal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerFlash {
    until: Option<Instant>,
}

impl PowerFlash {
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + POWER_FLASH_DURATION);
    }

    pub fn cancel(&mut self) {
        self.until = None;
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}

/// Read-only view handed to the presentation layer once per tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub bounds: GridSize,
    pub body: &'a VecDeque<Position>,
    pub food: Position,
    pub walls: &'a [Position],
    pub score: u32,
    pub game_over: bool,
    pub powered: bool,
}

/// Final figures shown on the game-over panel.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameOverSummary {
    pub score: u32,
    pub reason: Option<DeathReason>,
    pub collected_count: usize,
    pub collected_total: u32,
    /// Token written to disk, when the export succeeded.
    pub token: Option<String>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub walls: Vec<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    pub rewards: RewardGrid,
    pub power_flash: PowerFlash,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let rewards = RewardGrid::generate(&mut rng, bounds);
        let walls = perimeter(bounds);
        let snake = Snake::spawn(bounds);
        let body: Vec<Position> = snake.segments().copied().collect();
        let food = place_food(&mut rng, bounds, &walls, &body);

        Self {
            snake,
            food,
            walls,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 0,
            rewards,
            power_flash: PowerFlash::default(),
            bounds,
            rng,
        }
    }

    /// Discards everything and starts a fresh session on the same grid.
    ///
    /// The new session draws its seed from the current RNG so seeded runs
    /// stay reproducible across restarts.
    pub fn restart(&mut self) {
        let seed = self.rng.next_u64();
        *self = Self::new_with_seed(self.bounds, seed);
        info!("session restarted");
    }

    /// Queues a turn for the next tick. Returns whether it was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.snake.turn(direction)
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Food is checked against the head as it stood before this move and self
    /// collision against the pre-move body; walls are checked again after the
    /// move. A game-over session ignores further ticks.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;

        let grow = self.snake.head() == self.food;
        if grow {
            self.score += 1;
            let body = self.body_cells();
            self.food = place_food(&mut self.rng, self.bounds, &self.walls, &body);
            self.power_flash.trigger(Instant::now());
            debug!("food eaten, score {} next food {:?}", self.score, self.food);
        }

        if self.snake.head_overlaps_body() {
            self.end(DeathReason::SelfCollision);
            return;
        }
        if collision::hits_wall(&self.walls, self.snake.head()) {
            self.end(DeathReason::WallCollision);
            return;
        }

        self.snake.advance(self.bounds, grow);
        self.rewards.collect(self.snake.head());

        if collision::hits_wall(&self.walls, self.snake.head()) {
            self.end(DeathReason::WallCollision);
            return;
        }

        if grow {
            let body = self.body_cells();
            let added = add_obstacles(
                &mut self.rng,
                self.score,
                self.bounds,
                &mut self.walls,
                self.food,
                &body,
            );
            if added > 0 {
                debug!("{added} obstacle(s) added at score {}", self.score);
            }
        }
    }

    fn end(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self.power_flash.cancel();
        info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count, self.score
        );
    }

    fn body_cells(&self) -> Vec<Position> {
        self.snake.segments().copied().collect()
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Number of walls beyond the permanent border.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.walls
            .iter()
            .filter(|wall| !wall.is_on_perimeter(self.bounds))
            .count()
    }

    /// Returns the renderable view of this session at `now`.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot<'_> {
        Snapshot {
            bounds: self.bounds,
            body: self.snake.body(),
            food: self.food,
            walls: &self.walls,
            score: self.score,
            game_over: self.is_game_over(),
            powered: self.power_flash.is_active(now),
        }
    }

    /// Summarises the finished session; `token` is filled in by the exporter.
    #[must_use]
    pub fn summary(&self) -> GameOverSummary {
        GameOverSummary {
            score: self.score,
            reason: self.death_reason,
            collected_count: self.rewards.collected().len(),
            collected_total: self.rewards.collected_total(),
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{DeathReason, GameState, GameStatus, PowerFlash};
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn row_snake(head_x: i32, y: i32, direction: Direction) -> Snake {
        Snake::from_segments(
            vec![
                Position::new(head_x - 2, y),
                Position::new(head_x - 1, y),
                Position::new(head_x, y),
            ],
            direction,
        )
    }

    #[test]
    fn new_session_starts_running_with_border_only() {
        let state = GameState::new_with_seed(BOUNDS, 1);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.obstacle_count(), 0);
        assert_eq!(state.walls.len(), 36);
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn snake_grows_on_the_tick_after_reaching_food() {
        let mut state = GameState::new_with_seed(BOUNDS, 1);
        state.snake = row_snake(4, 5, Direction::Right);
        state.food = Position::new(5, 5);

        state.tick();
        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 0);

        state.tick();
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 1);
        assert_ne!(state.food, Position::new(5, 5));

        state.food = Position::new(2, 8);
        state.tick();
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn eating_arms_power_flash() {
        let mut state = GameState::new_with_seed(BOUNDS, 2);
        state.snake = row_snake(5, 5, Direction::Right);
        state.food = Position::new(5, 5);

        state.tick();

        assert!(state.snapshot(Instant::now()).powered);
    }

    #[test]
    fn obstacle_hit_after_move_sets_game_over() {
        let mut state = GameState::new_with_seed(BOUNDS, 3);
        state.snake = row_snake(5, 5, Direction::Right);
        state.food = Position::new(2, 8);
        state.walls.push(Position::new(6, 5));

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(state.snake.head(), Position::new(6, 5));
    }

    #[test]
    fn self_collision_is_checked_before_moving() {
        let mut state = GameState::new_with_seed(BOUNDS, 4);
        state.snake = Snake::from_segments(
            vec![
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(1, 3),
            ],
            Direction::Down,
        );
        state.food = Position::new(7, 7);

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
        assert_eq!(state.snake.head(), Position::new(1, 3));
    }

    #[test]
    fn stalling_at_the_edge_ends_on_the_following_tick() {
        let mut state = GameState::new_with_seed(BOUNDS, 5);
        state.snake = row_snake(8, 4, Direction::Right);
        state.food = Position::new(2, 8);

        state.tick();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position::new(8, 4));

        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn ticks_are_ignored_after_game_over() {
        let mut state = GameState::new_with_seed(BOUNDS, 6);
        state.snake = Snake::from_segments(
            vec![Position::new(2, 4), Position::new(1, 4), Position::new(0, 4)],
            Direction::Left,
        );

        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);
        let ticks = state.tick_count;
        let head = state.snake.head();

        state.tick();
        state.tick();

        assert_eq!(state.tick_count, ticks);
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn steering_is_ignored_after_game_over() {
        let mut state = GameState::new_with_seed(BOUNDS, 7);
        state.status = GameStatus::GameOver;

        assert!(!state.steer(Direction::Up));
        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn reward_is_collected_where_the_head_lands() {
        let mut state = GameState::new_with_seed(BOUNDS, 8);
        state.snake = row_snake(4, 6, Direction::Right);
        state.food = Position::new(2, 8);
        let landing = Position::new(5, 6);
        let value = state.rewards.value_at(landing).expect("interior value");

        state.tick();

        assert_eq!(state.rewards.value_at(landing), None);
        assert_eq!(state.rewards.collected(), &[value]);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn power_flash_expires_and_cancels() {
        let now = Instant::now();
        let mut flash = PowerFlash::default();
        assert!(!flash.is_active(now));

        flash.trigger(now);
        assert!(flash.is_active(now + Duration::from_millis(1999)));
        assert!(!flash.is_active(now + Duration::from_secs(2)));

        flash.cancel();
        assert!(!flash.is_active(now));
    }
}
