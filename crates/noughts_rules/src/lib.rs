//! Pure tic-tac-toe logic for a human-versus-computer game.
//!
//! This crate holds everything with decision structure and nothing with
//! side effects:
//!
//! - [`Board`]: the nine-cell move ledger
//! - [`rules`]: win and draw detection over the ledger
//! - [`select_computer_move`]: the win / block / center / random heuristic
//! - [`evaluate`]: the per-half-turn outcome check
//!
//! # Example
//!
//! ```
//! use noughts_rules::{select_computer_move, Board, FirstOpenPicker, Player, Position};
//!
//! let mut board = Board::new();
//! board.apply(Player::Human, Position::TopLeft).unwrap();
//! let reply = select_computer_move(&board, &mut FirstOpenPicker).unwrap();
//! assert_eq!(reply, Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod board;
mod error;
mod outcome;
mod position;
pub mod rules;

pub use action::{Move, Player};
pub use ai::{select_computer_move, CellPicker, FirstOpenPicker, RandomPicker};
pub use board::Board;
pub use error::MoveError;
pub use outcome::{evaluate, Outcome, TurnStatus};
pub use position::Position;
pub use rules::{has_won, is_draw, is_full, winner, WIN_PATTERNS};
