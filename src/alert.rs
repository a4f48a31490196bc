//! End-of-game alert texts.

use derive_new::new;
use noughts_rules::Outcome;
use serde::Serialize;
use tracing::instrument;

/// Dialog content shown when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct Alert {
    /// Headline.
    title: &'static str,
    /// Body text.
    message: &'static str,
    /// Label of the button that starts the next game.
    button: &'static str,
}

impl Alert {
    /// Headline.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Body text.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Label of the button that starts the next game.
    pub fn button(&self) -> &'static str {
        self.button
    }

    /// The alert for a finished game.
    #[instrument]
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::HumanWin => Self::new("You Win!", "You are so smart", "Play again!"),
            Outcome::ComputerWin => {
                Self::new("You lost!", "I guess AI is smarter", "Play again!")
            }
            Outcome::Draw => Self::new(
                "Draw!",
                "Battle is over but the war is just starting...",
                "Try again",
            ),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} [{}]", self.title, self.message, self.button)
    }
}
