use std::time::Duration;

use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid, border included.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Largest x a head may reach; the column after it is border.
    #[must_use]
    pub fn max_inner_x(self) -> i32 {
        i32::from(self.width) - 2
    }

    /// Largest y a head may reach; the row after it is border.
    #[must_use]
    pub fn max_inner_y(self) -> i32 {
        i32::from(self.height) - 2
    }
}

/// Width of the playfield in cells, border included.
pub const GRID_WIDTH: u16 = 32;

/// Height of the playfield in cells, border included.
pub const GRID_HEIGHT: u16 = 32;

/// The fixed playfield used by the binary.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
};

/// Fixed simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 80;

/// Fixed simulation tick interval.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Number of segments a fresh snake starts with.
pub const START_LENGTH: usize = 3;

/// Row reserved for the on-screen score readout.
pub const SCORE_BAND_ROW: i32 = 1;

/// Columns `0..SCORE_BAND_COLUMNS` of [`SCORE_BAND_ROW`] are never used for spawns.
pub const SCORE_BAND_COLUMNS: i32 = 10;

/// Obstacles are added whenever the score reaches a positive multiple of this.
pub const OBSTACLE_SCORE_INTERVAL: u32 = 5;

/// Obstacle samples drawn per trigger.
pub const OBSTACLES_PER_TRIGGER: usize = 2;

/// Random samples tried before food placement falls back to a scan.
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 512;

/// Upper bound (inclusive) of a grid reward value.
pub const MAX_REWARD_VALUE: u8 = 9;

/// How long the snake stays highlighted after eating.
pub const POWER_FLASH_DURATION: Duration = Duration::from_secs(2);

/// Default file name of the score token artifact.
pub const SCORE_TOKEN_FILE_NAME: &str = "score_token.txt";

pub const COLOR_BACKGROUND: Color = Color::Black;
pub const COLOR_TEXT: Color = Color::White;
pub const COLOR_GRID: Color = Color::Gray;
pub const COLOR_SNAKE: Color = Color::Green;
pub const COLOR_SNAKE_POWERED: Color = Color::Yellow;
pub const COLOR_FOOD: Color = Color::Red;
pub const COLOR_WALL: Color = Color::Red;

/// Glyph for interior cells that are empty.
pub const GLYPH_GRID: &str = "·";

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "●";

/// Glyph for perimeter and obstacle cells.
pub const GLYPH_WALL: &str = "█";

/// Glyph for snake segments; the cell is colored through its background.
pub const GLYPH_SNAKE: &str = " ";
