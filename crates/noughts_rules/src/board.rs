//! The move ledger: which player holds which cell.

use crate::action::{Move, Player};
use crate::error::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 board as nine optional move slots, indexed by cell.
///
/// The slot at index `i` is either empty or holds the single move made at
/// position `i`. Slots are filled one at a time and never overwritten; the
/// only way back to empty is [`Board::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Move>; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the move recorded at a position, if any.
    pub fn get(&self, pos: Position) -> Option<Move> {
        self.cells[pos.to_index()]
    }

    /// Returns the player holding a position, if any.
    pub fn occupant(&self, pos: Position) -> Option<Player> {
        self.get(pos).map(|m| m.player())
    }

    /// True iff some move has been made at this position.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells[pos.to_index()].is_some()
    }

    /// Records a move for `player` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the square is taken; the board is
    /// left untouched.
    #[instrument(skip(self))]
    pub fn apply(&mut self, player: Player, pos: Position) -> Result<Move, MoveError> {
        let slot = &mut self.cells[pos.to_index()];
        if slot.is_some() {
            debug!(%pos, "Rejecting move on occupied square");
            return Err(MoveError::Occupied(pos));
        }
        let action = Move::new(player, pos);
        *slot = Some(action);
        Ok(action)
    }

    /// True iff all nine cells are occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Iterates over the recorded moves in cell order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.cells.iter().flatten()
    }

    /// Empty positions in cell order.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| !self.is_occupied(*pos))
            .collect()
    }

    /// Positions held by `player` in cell order.
    pub fn positions_of(&self, player: Player) -> Vec<Position> {
        self.moves()
            .filter(|m| m.player() == player)
            .map(|m| m.position())
            .collect()
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [None; 9];
    }

    /// Formats the board as a human-readable grid. Empty cells show the
    /// 1-based number used to pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Some(m) => result.push(m.player().mark()),
                    None => result.push_str(&(index + 1).to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
