//! Win detection.

use crate::{Board, Player, Position};
use tracing::instrument;

/// The eight three-in-a-row lines.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True iff `player` holds all three cells of at least one line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|&pos| board.occupant(pos) == Some(player)))
}

/// Returns the player with three in a row, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(human: &[usize], computer: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in human {
            board.apply(Player::Human, Position::ALL[i]).unwrap();
        }
        for &i in computer {
            board.apply(Player::Computer, Position::ALL[i]).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_pattern_wins() {
        for line in WIN_PATTERNS {
            let cells: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
            let board = board_with(&[], &cells);
            assert!(has_won(&board, Player::Computer), "line {line:?}");
            assert!(!has_won(&board, Player::Human));
        }
    }

    #[test]
    fn test_top_row_completed_by_third_move() {
        let mut board = board_with(&[0, 1], &[]);
        assert!(!has_won(&board, Player::Human));

        board.apply(Player::Human, Position::TopRight).unwrap();
        assert!(has_won(&board, Player::Human));
        assert_eq!(winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[0, 2], &[1]);
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
    }

    #[test]
    fn test_win_is_superset_match() {
        // Extra cells outside the line do not matter.
        let board = board_with(&[2, 4, 6, 0], &[1, 3]);
        assert!(has_won(&board, Player::Human));
    }
}
