use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{COLOR_BACKGROUND, COLOR_TEXT, SCORE_BAND_COLUMNS, SCORE_BAND_ROW};

const CONTROLS_HINT: &str = "←↑↓→ steer · Esc quit";

/// Columns available to the readout: the band minus the border column.
const READOUT_WIDTH: usize = (SCORE_BAND_COLUMNS - 1) as usize;

/// Formats the score so it fits inside the protected band.
#[must_use]
pub fn score_readout(score: u32) -> String {
    let full = format!("Score: {score}");
    if full.width() <= READOUT_WIDTH {
        full
    } else {
        format!("S:{score}")
    }
}

/// Writes the score readout into the reserved band of the board.
pub fn render_score_readout(buffer: &mut Buffer, board: Rect, score: u32) {
    let Ok(row) = u16::try_from(SCORE_BAND_ROW) else {
        return;
    };

    let x = board.x.saturating_add(1);
    let y = board.y.saturating_add(row);
    if x >= board.right() || y >= board.bottom() {
        return;
    }

    let width = READOUT_WIDTH.min(usize::from(board.right() - x));
    buffer.set_stringn(
        x,
        y,
        score_readout(score),
        width,
        Style::new().fg(COLOR_TEXT).bg(COLOR_BACKGROUND),
    );
}

/// Draws the key reminder on the row under the board, when there is one.
pub fn render_controls_hint(frame: &mut Frame<'_>, area: Rect, board: Rect) {
    if board.bottom() >= area.bottom() {
        return;
    }

    let row = Rect {
        x: board.x,
        y: board.bottom(),
        width: board.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(CONTROLS_HINT))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        row,
    );
}
