use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::TICK_INTERVAL;
use crate::error::AppError;
use crate::game::{GameOverSummary, GameState, GameStatus, Snapshot};
use crate::input::{Intent, latest_legal_turn};
use crate::score::export_score_token;

/// Drawing capability the tick loop calls into.
pub trait Presenter {
    /// Draws one frame of a running session.
    fn present(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;

    /// Draws the game-over panel; called once per finished session.
    fn present_game_over(
        &mut self,
        snapshot: &Snapshot<'_>,
        summary: &GameOverSummary,
    ) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Single owner of the session; intents arrive over a channel.
pub struct App<P> {
    state: GameState,
    presenter: P,
    intents: Receiver<Intent>,
    token_path: PathBuf,
    tick_interval: Duration,
}

impl<P: Presenter> App<P> {
    #[must_use]
    pub fn new(
        state: GameState,
        presenter: P,
        intents: Receiver<Intent>,
        token_path: PathBuf,
    ) -> Self {
        Self {
            state,
            presenter,
            intents,
            token_path,
            tick_interval: TICK_INTERVAL,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs ticks until the player quits or declines another round.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("session started on {:?}", self.state.bounds());
        self.presenter.present(&self.state.snapshot(Instant::now()))?;

        loop {
            let flow = match self.state.status {
                GameStatus::Running => self.run_tick()?,
                GameStatus::GameOver => self.await_decision()?,
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn run_tick(&mut self) -> Result<Flow, AppError> {
        let pending = match self.drain_intents() {
            Some(pending) => pending,
            None => return Ok(Flow::Exit),
        };

        if let Some(direction) = latest_legal_turn(self.state.snake.direction(), pending) {
            self.state.steer(direction);
        }

        self.state.tick();

        if self.state.is_game_over() {
            self.finish_session()?;
            return Ok(Flow::Continue);
        }

        self.presenter.present(&self.state.snapshot(Instant::now()))?;
        thread::sleep(self.tick_interval);
        Ok(Flow::Continue)
    }

    /// Collects everything queued since the last tick. `None` means quit.
    fn drain_intents(&mut self) -> Option<Vec<Intent>> {
        let mut pending = Vec::new();
        loop {
            match self.intents.try_recv() {
                Ok(Intent::Quit) => return None,
                Ok(intent) => pending.push(intent),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return Some(pending),
            }
        }
    }

    fn finish_session(&mut self) -> Result<(), AppError> {
        let mut summary = self.state.summary();
        match export_score_token(&self.token_path, summary.score) {
            Ok(token) => {
                info!("score token written to {}", self.token_path.display());
                summary.token = Some(token);
            }
            Err(error) => warn!("{error}"),
        }

        let snapshot = self.state.snapshot(Instant::now());
        self.presenter.present_game_over(&snapshot, &summary)?;
        Ok(())
    }

    /// Blocks for the next intent; only confirm, decline and quit matter here.
    fn await_decision(&mut self) -> Result<Flow, AppError> {
        let Ok(intent) = self.intents.recv() else {
            return Ok(Flow::Exit);
        };

        match intent {
            Intent::Confirm => {
                self.state.restart();
                self.presenter.present(&self.state.snapshot(Instant::now()))?;
                Ok(Flow::Continue)
            }
            Intent::Decline | Intent::Quit => Ok(Flow::Exit),
            Intent::Move(_) => Ok(Flow::Continue),
        }
    }
}
