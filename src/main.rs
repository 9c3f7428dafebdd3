use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use log::info;
use snek::app::App;
use snek::config::DEFAULT_GRID;
use snek::error::AppError;
use snek::game::GameState;
use snek::input::spawn_input_thread;
use snek::logging;
use snek::score::default_token_path;
use snek::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the game RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives the score token when a game ends.
    #[arg(long = "token-file", default_value_os_t = default_token_path())]
    token_file: PathBuf,

    /// Write the log here instead of the platform data directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log debug events as well.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path, cli.verbose) {
        eprintln!("Logging disabled: {error}");
    }

    install_panic_hook();

    let state = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            GameState::new_with_seed(DEFAULT_GRID, seed)
        }
        None => GameState::new(DEFAULT_GRID),
    };

    let (intents_tx, intents_rx) = mpsc::channel();
    let session = TerminalSession::enter()?;
    let _input = spawn_input_thread(intents_tx);

    let mut app = App::new(state, session, intents_rx, cli.token_file);
    let result = app.run();
    drop(app);

    info!("exiting");
    result
}
