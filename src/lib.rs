//! Noughts - single-player tic-tac-toe against a heuristic computer.
//!
//! The pure rules live in [`noughts_rules`]; this crate wraps them in the
//! state a front end needs to run a game.
//!
//! # Architecture
//!
//! - **Session**: the explicit game state (board, scores, input lock, alert)
//!   advanced one half-turn at a time
//! - **Controller**: async driver that applies human moves right away and the
//!   computer's reply after a thinking delay, cancelled on reset
//! - **Config**: TOML settings for the delay and the random seed
//!
//! # Example
//!
//! ```no_run
//! use noughts::{EngineConfig, GameController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (mut controller, mut events) = GameController::new(&EngineConfig::default());
//! controller.process_human_move(0).await;
//! controller.wait_for_reply().await;
//! while let Ok(event) = events.try_recv() {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alert;
mod config;
mod controller;
mod scoreboard;
mod session;

pub use alert::Alert;
pub use config::{ConfigError, EngineConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
pub use controller::{GameController, GameEvent};
pub use scoreboard::Scoreboard;
pub use session::{ComputerTurn, GameSession, HumanTurn, IgnoreReason, ReplyTicket};

pub use noughts_rules::{
    Board, CellPicker, FirstOpenPicker, Move, MoveError, Outcome, Player, Position, RandomPicker,
};
