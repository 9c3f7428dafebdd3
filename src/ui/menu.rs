use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::{DeathReason, GameOverSummary};

const CONTINUE_PROMPT: &str = "Press Y to play again, N to quit";
const POPUP_PADDING_X: u16 = 4;
const POPUP_HEIGHT: u16 = 10;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, summary: &GameOverSummary) {
    let width = CONTINUE_PROMPT.len() as u16 + POPUP_PADDING_X;
    let popup = centered_popup(area, width, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Final Score: {}", summary.score)),
        Line::from(match summary.reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(format!(
            "Collected: {} from {} cells",
            summary.collected_total, summary.collected_count
        ))
        .style(Style::default().fg(Color::DarkGray)),
        Line::from(match &summary.token {
            Some(token) => format!("Token: {token}"),
            None => "Token not saved".to_owned(),
        }),
        Line::from(""),
        Line::from(CONTINUE_PROMPT),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}
