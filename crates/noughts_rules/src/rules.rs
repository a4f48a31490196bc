//! Game rules for tic-tac-toe.
//!
//! Pure functions over the [`Board`](crate::Board) ledger. Rules are kept
//! apart from board storage so the heuristic and the turn check can share
//! them.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_won, winner, WIN_PATTERNS};
