//! Async turn driver.
//!
//! The human's move is applied immediately. The computer's reply runs on a
//! spawned task after the configured thinking delay; the task handle is kept
//! so a reset can abort it.

use crate::alert::Alert;
use crate::config::EngineConfig;
use crate::scoreboard::Scoreboard;
use crate::session::{ComputerTurn, GameSession, HumanTurn, ReplyTicket};
use noughts_rules::{Board, CellPicker, Outcome, Player, Position, RandomPicker};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the controller to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// Board after the latest change.
    BoardChanged(Board),
    /// The computer's reply has been scheduled.
    ComputerThinking,
    /// The game ended.
    GameOver {
        /// How it ended.
        outcome: Outcome,
        /// Dialog to show.
        alert: Alert,
        /// Scores including this game.
        scores: Scoreboard,
    },
    /// The board was cleared for a new game.
    Reset,
}

/// State shared with the reply task.
struct Shared {
    session: GameSession,
    picker: Box<dyn CellPicker + Send>,
}

/// Owns the game session and schedules computer replies.
pub struct GameController {
    shared: Arc<Mutex<Shared>>,
    events: mpsc::UnboundedSender<GameEvent>,
    thinking_delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl GameController {
    /// Creates a controller from configuration. The random fallback is
    /// seeded from `seed` when set, otherwise from the OS.
    #[instrument(skip(config))]
    pub fn new(config: &EngineConfig) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let picker: Box<dyn CellPicker + Send> = match config.seed() {
            Some(seed) => Box::new(RandomPicker::seeded(*seed)),
            None => Box::new(RandomPicker::from_os_rng()),
        };
        Self::with_picker(config.thinking_delay(), picker)
    }

    /// Creates a controller with an explicit delay and picker.
    #[instrument(skip(picker))]
    pub fn with_picker(
        thinking_delay: Duration,
        picker: Box<dyn CellPicker + Send>,
    ) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (events, event_rx) = mpsc::unbounded_channel();
        let controller = Self {
            shared: Arc::new(Mutex::new(Shared {
                session: GameSession::new(),
                picker,
            })),
            events,
            thinking_delay,
            pending: None,
        };
        (controller, event_rx)
    }

    /// Copy of the current session state.
    pub async fn snapshot(&self) -> GameSession {
        self.shared.lock().await.session.clone()
    }

    /// Handles a human tap on cell `index` (0-8).
    ///
    /// On a continuing game the computer's reply is scheduled and this
    /// returns without waiting for it.
    #[instrument(skip(self))]
    pub async fn process_human_move(&mut self, index: usize) -> HumanTurn {
        let turn = {
            let mut shared = self.shared.lock().await;
            let turn = shared.session.process_human_move(index);
            if !matches!(turn, HumanTurn::Ignored(_))
                && let Some(position) = Position::from_index(index)
            {
                emit(
                    &self.events,
                    GameEvent::MoveMade {
                        player: Player::Human,
                        position,
                    },
                );
                emit(
                    &self.events,
                    GameEvent::BoardChanged(shared.session.board().clone()),
                );
            }
            if let HumanTurn::Finished(outcome) = turn {
                emit_game_over(&self.events, outcome, &shared.session);
            }
            turn
        };

        match turn {
            HumanTurn::Ignored(reason) => debug!(%reason, "Human move ignored"),
            HumanTurn::AwaitingComputer(ticket) => {
                emit(&self.events, GameEvent::ComputerThinking);
                self.schedule_reply(ticket);
            }
            HumanTurn::Finished(_) => {}
        }
        turn
    }

    /// Spawns the delayed computer reply.
    fn schedule_reply(&mut self, ticket: ReplyTicket) {
        let shared = Arc::clone(&self.shared);
        let events = self.events.clone();
        let delay = self.thinking_delay;

        debug!(?delay, "Scheduling computer reply");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut guard = shared.lock().await;
            let Shared { session, picker } = &mut *guard;
            match session.complete_computer_move(ticket, &mut **picker) {
                Ok(ComputerTurn::Stale) => {}
                Ok(ComputerTurn::Continue { position }) => {
                    emit_computer_move(&events, position, session.board());
                }
                Ok(ComputerTurn::Finished { position, outcome }) => {
                    emit_computer_move(&events, position, session.board());
                    emit_game_over(&events, outcome, session);
                }
                Err(e) => warn!(error = %e, "Computer could not move"),
            }
        });

        if let Some(previous) = self.pending.replace(handle) {
            previous.abort();
        }
    }

    /// Waits until the scheduled computer reply, if any, has run.
    #[instrument(skip(self))]
    pub async fn wait_for_reply(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await
                && !e.is_cancelled()
            {
                warn!(error = %e, "Computer reply task failed");
            }
        }
    }

    /// Starts a new game: cancels any pending reply and clears the board.
    /// Scores are kept.
    #[instrument(skip(self))]
    pub async fn reset_game(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer reply");
            handle.abort();
        }
        self.shared.lock().await.session.reset_game();
        info!("New game");
        emit(&self.events, GameEvent::Reset);
    }
}

impl Drop for GameController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

fn emit(events: &mpsc::UnboundedSender<GameEvent>, event: GameEvent) {
    if events.send(event).is_err() {
        debug!("Event receiver dropped");
    }
}

fn emit_computer_move(events: &mpsc::UnboundedSender<GameEvent>, position: Position, board: &Board) {
    emit(
        events,
        GameEvent::MoveMade {
            player: Player::Computer,
            position,
        },
    );
    emit(events, GameEvent::BoardChanged(board.clone()));
}

fn emit_game_over(events: &mpsc::UnboundedSender<GameEvent>, outcome: Outcome, session: &GameSession) {
    let alert = session.alert().unwrap_or_else(|| Alert::for_outcome(outcome));
    emit(
        events,
        GameEvent::GameOver {
            outcome,
            alert,
            scores: *session.scores(),
        },
    );
}
