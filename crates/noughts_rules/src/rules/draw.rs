//! Draw detection.

use super::win::winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn fill(board: &mut Board, human: &[usize], computer: &[usize]) {
        for &i in human {
            board.apply(Player::Human, Position::ALL[i]).unwrap();
        }
        for &i in computer {
            board.apply(Player::Computer, Position::ALL[i]).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        fill(&mut board, &[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, &[0, 1, 2, 5, 6], &[3, 4, 7, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
