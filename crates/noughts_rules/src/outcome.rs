//! Terminal outcomes and the per-half-turn status check.

use crate::action::Player;
use crate::board::Board;
use crate::rules::{has_won, is_full};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// The win outcome for `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Human => Outcome::HumanWin,
            Player::Computer => Outcome::ComputerWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::HumanWin => Some(Player::Human),
            Outcome::ComputerWin => Some(Player::Computer),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "{} wins", player),
            None => write!(f, "Draw"),
        }
    }
}

/// Where the game stands after a half-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// Nobody has won and cells remain; `next` moves.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The game is over.
    Finished(Outcome),
}

/// Checks the board right after `mover` placed a mark.
///
/// A win for the mover is checked first; only then does a full board count
/// as a draw. Otherwise the turn passes to the opponent.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> TurnStatus {
    let status = if has_won(board, mover) {
        TurnStatus::Finished(Outcome::win_for(mover))
    } else if is_full(board) {
        TurnStatus::Finished(Outcome::Draw)
    } else {
        TurnStatus::Continue {
            next: mover.opponent(),
        }
    };
    debug!(?status, "Evaluated half-turn");
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_continue_passes_turn() {
        let mut board = Board::new();
        board.apply(Player::Human, Position::Center).unwrap();
        assert_eq!(
            evaluate(&board, Player::Human),
            TurnStatus::Continue {
                next: Player::Computer
            }
        );
    }

    #[test]
    fn test_win_beats_full_board() {
        // Last mark both fills the board and completes a line.
        let mut board = Board::new();
        for i in [0, 1, 5, 6, 8] {
            board.apply(Player::Human, Position::ALL[i]).unwrap();
        }
        for i in [2, 3, 4] {
            board.apply(Player::Computer, Position::ALL[i]).unwrap();
        }
        // X X O / O O X / X _ X
        board.apply(Player::Human, Position::BottomCenter).unwrap();
        assert!(board.is_full());
        assert_eq!(
            evaluate(&board, Player::Human),
            TurnStatus::Finished(Outcome::HumanWin)
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut board = Board::new();
        for i in [0, 2, 3, 7, 8] {
            board.apply(Player::Human, Position::ALL[i]).unwrap();
        }
        for i in [1, 4, 5, 6] {
            board.apply(Player::Computer, Position::ALL[i]).unwrap();
        }
        assert_eq!(
            evaluate(&board, Player::Human),
            TurnStatus::Finished(Outcome::Draw)
        );
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Outcome::win_for(Player::Computer), Outcome::ComputerWin);
        assert_eq!(Outcome::HumanWin.winner(), Some(Player::Human));
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::ComputerWin.to_string(), "Computer wins");
    }
}
