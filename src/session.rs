//! Game session state and the half-turn state machine.
//!
//! [`GameSession`] is the whole observable state of a game: board, scores,
//! input lock, the pending alert and a game epoch. It changes only through
//! the methods below, each of which advances the game by one half-turn.

use crate::alert::Alert;
use crate::scoreboard::Scoreboard;
use derive_getters::Getters;
use noughts_rules::{
    evaluate, select_computer_move, Board, CellPicker, MoveError, Outcome, Player, Position,
    TurnStatus,
};
use tracing::{debug, info, instrument, warn};

/// Proof that a computer reply was scheduled for a particular game.
///
/// Tickets from before a reset are refused by
/// [`GameSession::complete_computer_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    epoch: u64,
}

/// Why a human move was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// Board rejected the move.
    #[display("{}", _0)]
    Rejected(MoveError),
    /// The computer is still thinking.
    #[display("Waiting for the computer")]
    InputLocked,
    /// The game has ended; reset to play again.
    #[display("Game is already over")]
    GameOver,
}

/// Result of a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanTurn {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The human's move ended the game.
    Finished(Outcome),
    /// The move was applied; the computer replies next.
    AwaitingComputer(ReplyTicket),
}

/// Result of a scheduled computer reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerTurn {
    /// The ticket belongs to a game that was reset; nothing changed.
    Stale,
    /// The computer moved and the human is up.
    Continue {
        /// Where the computer played.
        position: Position,
    },
    /// The computer's move ended the game.
    Finished {
        /// Where the computer played.
        position: Position,
        /// How the game ended.
        outcome: Outcome,
    },
}

/// Complete state of a human-versus-computer game.
#[derive(Debug, Clone, Default, Getters)]
pub struct GameSession {
    /// The move ledger.
    board: Board,
    /// Wins per side, kept across resets.
    scores: Scoreboard,
    /// Set while a computer reply is pending; human moves are ignored.
    input_locked: bool,
    /// Alert for the finished game, until dismissed.
    alert: Option<Alert>,
    /// Set once the game has ended.
    outcome: Option<Outcome>,
    /// Bumped on every reset.
    epoch: u64,
}

impl GameSession {
    /// Creates a session with an empty board and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the current game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Applies the human's move at `index` (0-8).
    ///
    /// Taps on occupied or invalid cells, during the computer's turn, or
    /// after the game ended are ignored and leave the session unchanged.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn process_human_move(&mut self, index: usize) -> HumanTurn {
        if self.is_over() {
            debug!("Ignoring move after game over");
            return HumanTurn::Ignored(IgnoreReason::GameOver);
        }
        if self.input_locked {
            debug!("Ignoring move while computer is thinking");
            return HumanTurn::Ignored(IgnoreReason::InputLocked);
        }

        let applied = Position::try_from(index)
            .and_then(|pos| self.board.apply(Player::Human, pos));
        if let Err(e) = applied {
            debug!(error = %e, "Ignoring rejected move");
            return HumanTurn::Ignored(IgnoreReason::Rejected(e));
        }

        match evaluate(&self.board, Player::Human) {
            TurnStatus::Finished(outcome) => {
                self.finish(outcome);
                HumanTurn::Finished(outcome)
            }
            TurnStatus::Continue { .. } => {
                self.input_locked = true;
                HumanTurn::AwaitingComputer(ReplyTicket { epoch: self.epoch })
            }
        }
    }

    /// Plays the computer's reply scheduled by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::BoardFull`] if no cell is open, which a ticket
    /// from [`process_human_move`](Self::process_human_move) never allows.
    #[instrument(skip(self, picker), fields(epoch = self.epoch))]
    pub fn complete_computer_move<P>(
        &mut self,
        ticket: ReplyTicket,
        picker: &mut P,
    ) -> Result<ComputerTurn, MoveError>
    where
        P: CellPicker + ?Sized,
    {
        if ticket.epoch != self.epoch || !self.input_locked {
            warn!(ticket_epoch = ticket.epoch, "Dropping stale computer reply");
            return Ok(ComputerTurn::Stale);
        }

        let position = select_computer_move(&self.board, picker)?;
        self.board.apply(Player::Computer, position)?;
        self.input_locked = false;

        match evaluate(&self.board, Player::Computer) {
            TurnStatus::Finished(outcome) => {
                self.finish(outcome);
                Ok(ComputerTurn::Finished { position, outcome })
            }
            TurnStatus::Continue { .. } => Ok(ComputerTurn::Continue { position }),
        }
    }

    /// Clears the board for a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.input_locked = false;
        self.alert = None;
        self.outcome = None;
        self.epoch = self.epoch.wrapping_add(1);
        info!(epoch = self.epoch, "Game reset");
    }

    /// Takes the pending alert, if any.
    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "Game over");
        self.outcome = Some(outcome);
        self.scores.record(outcome);
        self.alert = Some(Alert::for_outcome(outcome));
    }
}
