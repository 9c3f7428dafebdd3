use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{
    COLOR_BACKGROUND, COLOR_FOOD, COLOR_GRID, COLOR_SNAKE, COLOR_SNAKE_POWERED, COLOR_WALL,
    GLYPH_FOOD, GLYPH_GRID, GLYPH_SNAKE, GLYPH_WALL, GridSize,
};
use crate::game::{GameOverSummary, Snapshot};
use crate::snake::Position;
use crate::ui::hud::{render_controls_hint, render_score_readout};
use crate::ui::menu::render_game_over_menu;

/// Renders a running frame from immutable state.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>) {
    let area = frame.area();
    let board = render_board(frame, snapshot);
    render_controls_hint(frame, area, board);
}

/// Renders the final board with the game-over panel on top.
pub fn render_game_over(
    frame: &mut Frame<'_>,
    snapshot: &Snapshot<'_>,
    summary: &GameOverSummary,
) {
    let area = frame.area();
    render_board(frame, snapshot);
    render_game_over_menu(frame, area, summary);
}

fn render_board(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>) -> Rect {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(COLOR_BACKGROUND)), area);

    let board = board_area(area, snapshot.bounds);
    let buffer = frame.buffer_mut();

    render_grid(buffer, board, snapshot.bounds);

    put(
        buffer,
        board,
        snapshot.bounds,
        snapshot.food,
        GLYPH_FOOD,
        Style::new().fg(COLOR_FOOD),
    );

    let snake_color = if snapshot.powered {
        COLOR_SNAKE_POWERED
    } else {
        COLOR_SNAKE
    };
    for segment in snapshot.body {
        put(
            buffer,
            board,
            snapshot.bounds,
            *segment,
            GLYPH_SNAKE,
            Style::new().bg(snake_color),
        );
    }

    for wall in snapshot.walls {
        put(
            buffer,
            board,
            snapshot.bounds,
            *wall,
            GLYPH_WALL,
            Style::new().fg(COLOR_WALL),
        );
    }

    render_score_readout(buffer, board, snapshot.score);
    board
}

/// Dots every interior cell; later layers paint over the occupied ones.
fn render_grid(buffer: &mut Buffer, board: Rect, bounds: GridSize) {
    let style = Style::new().fg(COLOR_GRID);
    for y in 1..=bounds.max_inner_y() {
        for x in 1..=bounds.max_inner_x() {
            put(buffer, board, bounds, Position::new(x, y), GLYPH_GRID, style);
        }
    }
}

fn put(
    buffer: &mut Buffer,
    board: Rect,
    bounds: GridSize,
    position: Position,
    glyph: &str,
    style: Style,
) {
    if let Some((x, y)) = logical_to_terminal(board, bounds, position) {
        buffer.set_string(x, y, glyph, style);
    }
}

/// One terminal cell per grid cell, anchored at the top-left of `area`.
fn board_area(area: Rect, bounds: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: bounds.width.min(area.width),
        height: bounds.height.min(area.height),
    }
}

fn logical_to_terminal(board: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = board.x.saturating_add(x_offset);
    let y = board.y.saturating_add(y_offset);
    if x >= board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}
