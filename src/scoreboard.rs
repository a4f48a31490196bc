//! Running win counts for the current run of the program.

use noughts_rules::Outcome;
use serde::Serialize;
use tracing::{info, instrument};

/// Wins per side. Draws are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    human: u32,
    computer: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Human wins so far.
    pub fn human(&self) -> u32 {
        self.human
    }

    /// Computer wins so far.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Credits the winner of a finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWin => self.human += 1,
            Outcome::ComputerWin => self.computer += 1,
            Outcome::Draw => {}
        }
        info!(human = self.human, computer = self.computer, "Score updated");
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You {} - {} Computer", self.human, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wins_are_counted_draws_are_not() {
        let mut scores = Scoreboard::new();
        scores.record(Outcome::HumanWin);
        scores.record(Outcome::Draw);
        scores.record(Outcome::ComputerWin);
        scores.record(Outcome::HumanWin);

        assert_eq!(scores.human(), 2);
        assert_eq!(scores.computer(), 1);
        assert_eq!(scores.to_string(), "You 2 - 1 Computer");
    }
}
