//! Computer opponent: a fixed-priority heuristic.
//!
//! In order, the computer takes a winning cell, blocks the human's winning
//! cell, takes the center, or falls back to a random open cell. The random
//! choice goes through [`CellPicker`] so tests can pin it down.

use crate::action::Player;
use crate::board::Board;
use crate::error::MoveError;
use crate::position::Position;
use crate::rules::WIN_PATTERNS;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Chooses one cell out of the open ones for the random fallback.
pub trait CellPicker {
    /// Picks one of `open`. Returns `None` only when `open` is empty.
    fn pick(&mut self, open: &[Position]) -> Option<Position>;
}

/// Uniform choice over the open cells.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker from a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from the operating system.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> CellPicker for RandomPicker<R> {
    fn pick(&mut self, open: &[Position]) -> Option<Position> {
        open.choose(&mut self.rng).copied()
    }
}

/// Always the lowest-numbered open cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOpenPicker;

impl CellPicker for FirstOpenPicker {
    fn pick(&mut self, open: &[Position]) -> Option<Position> {
        open.first().copied()
    }
}

/// Returns the single empty cell of `line` when the other two belong to
/// `player`.
fn completing_cell(board: &Board, line: &[Position; 3], player: Player) -> Option<Position> {
    let mut empty = None;
    let mut held = 0;
    for &pos in line {
        match board.occupant(pos) {
            None if empty.is_none() => empty = Some(pos),
            None => return None,
            Some(p) if p == player => held += 1,
            Some(_) => return None,
        }
    }
    if held == 2 { empty } else { None }
}

/// First line (in [`WIN_PATTERNS`] order) that `player` can complete now.
fn find_completion(board: &Board, player: Player) -> Option<Position> {
    WIN_PATTERNS
        .iter()
        .find_map(|line| completing_cell(board, line, player))
}

/// Chooses the computer's next cell.
///
/// Priority: win now, block the human, take the center, then a cell from
/// `picker`.
///
/// # Errors
///
/// Returns [`MoveError::BoardFull`] when no cell is open.
#[instrument(skip(board, picker), fields(occupied = board.occupied_count()))]
pub fn select_computer_move<P>(board: &Board, picker: &mut P) -> Result<Position, MoveError>
where
    P: CellPicker + ?Sized,
{
    let open = board.open_positions();
    if open.is_empty() {
        return Err(MoveError::BoardFull);
    }

    if let Some(pos) = find_completion(board, Player::Computer) {
        debug!(%pos, "Taking the win");
        return Ok(pos);
    }

    if let Some(pos) = find_completion(board, Player::Human) {
        debug!(%pos, "Blocking");
        return Ok(pos);
    }

    if !board.is_occupied(Position::Center) {
        debug!("Taking the center");
        return Ok(Position::Center);
    }

    let pos = picker.pick(&open).ok_or(MoveError::BoardFull)?;
    if board.is_occupied(pos) {
        // Picker ignored the open list; fall back to the first open cell.
        debug!(%pos, "Picker returned an occupied cell");
        return Ok(open[0]);
    }
    debug!(%pos, "Picked a cell");
    Ok(pos)
}
