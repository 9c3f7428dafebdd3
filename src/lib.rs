//! Terminal Snake: a fixed-tick simulation with growing obstacles, driven by
//! intents from an input thread and drawn through a `Presenter`.

pub mod app;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod rewards;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
