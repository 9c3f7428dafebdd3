use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the unit vector `(x_speed, y_speed)`; y grows downwards.
    #[must_use]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Returns whether a snake moving in `self` may turn to `requested`.
    ///
    /// Vertical requests need a zero vertical speed, horizontal requests a
    /// zero horizontal speed. This rejects reversals and same-axis no-ops.
    #[must_use]
    pub fn accepts(self, requested: Direction) -> bool {
        let (x_speed, y_speed) = self.vector();
        if requested.is_vertical() {
            y_speed == 0
        } else {
            x_speed == 0
        }
    }
}

/// High-level intents delivered from the input thread to the tick loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Intent {
    Move(Direction),
    /// Play again after a game over.
    Confirm,
    /// Decline another round after a game over.
    Decline,
    /// Leave immediately from any state.
    Quit,
}

/// Maps a terminal key event to an intent.
#[must_use]
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Intent::Move(Direction::Up)),
        KeyCode::Down => Some(Intent::Move(Direction::Down)),
        KeyCode::Left => Some(Intent::Move(Direction::Left)),
        KeyCode::Right => Some(Intent::Move(Direction::Right)),
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('y' | 'Y') => Some(Intent::Confirm),
        KeyCode::Char('n' | 'N') => Some(Intent::Decline),
        _ => None,
    }
}

/// Picks the most recent directional intent that is legal against `current`.
///
/// Legality is judged against the direction held at tick start, so two quick
/// presses cannot chain into a reversal within one tick.
#[must_use]
pub fn latest_legal_turn<I>(current: Direction, intents: I) -> Option<Direction>
where
    I: IntoIterator<Item = Intent>,
{
    intents
        .into_iter()
        .filter_map(|intent| match intent {
            Intent::Move(direction) if current.accepts(direction) => Some(direction),
            _ => None,
        })
        .last()
}

/// Spawns the blocking input poller feeding `intents`.
///
/// The thread ends after forwarding `Quit` or once the receiver is dropped.
pub fn spawn_input_thread(intents: Sender<Intent>) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(error) => {
                    warn!("input polling stopped: {error}");
                    return;
                }
            };

            let Event::Key(key) = event else {
                continue;
            };

            let Some(intent) = intent_for_key(key) else {
                continue;
            };

            debug!("intent {intent:?}");
            if intents.send(intent).is_err() || intent == Intent::Quit {
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Direction, Intent, intent_for_key, latest_legal_turn};

    #[test]
    fn direction_change_table() {
        use Direction::{Down, Left, Right, Up};

        // (current, requested, accepted)
        let table = [
            (Right, Up, true),
            (Right, Down, true),
            (Right, Left, false),
            (Right, Right, false),
            (Left, Up, true),
            (Left, Down, true),
            (Left, Left, false),
            (Left, Right, false),
            (Up, Up, false),
            (Up, Down, false),
            (Up, Left, true),
            (Up, Right, true),
            (Down, Up, false),
            (Down, Down, false),
            (Down, Left, true),
            (Down, Right, true),
        ];

        for (current, requested, accepted) in table {
            assert_eq!(
                current.accepts(requested),
                accepted,
                "{current:?} -> {requested:?}"
            );
        }
    }

    #[test]
    fn arrow_keys_map_to_moves() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);

        assert_eq!(intent_for_key(up), Some(Intent::Move(Direction::Up)));
        assert_eq!(intent_for_key(left), Some(Intent::Move(Direction::Left)));
    }

    #[test]
    fn confirm_decline_and_quit_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(intent_for_key(key(KeyCode::Char('Y'))), Some(Intent::Confirm));
        assert_eq!(intent_for_key(key(KeyCode::Char('n'))), Some(Intent::Decline));
        assert_eq!(intent_for_key(key(KeyCode::Esc)), Some(Intent::Quit));
        assert_eq!(
            intent_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
        assert_eq!(intent_for_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn latest_legal_turn_ignores_chained_reversal() {
        // Up is legal from Right; Left would only be legal after Up took effect.
        let intents = [
            Intent::Move(Direction::Up),
            Intent::Move(Direction::Left),
        ];

        assert_eq!(
            latest_legal_turn(Direction::Right, intents),
            Some(Direction::Up)
        );
    }

    #[test]
    fn latest_legal_turn_prefers_most_recent() {
        let intents = [
            Intent::Move(Direction::Up),
            Intent::Confirm,
            Intent::Move(Direction::Down),
        ];

        assert_eq!(
            latest_legal_turn(Direction::Left, intents),
            Some(Direction::Down)
        );
        assert_eq!(latest_legal_turn(Direction::Left, Vec::new()), None);
    }
}
