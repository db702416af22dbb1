//! Result of a finished game.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Score of this outcome from X's side: 1, -1 or 0.
    pub fn utility(&self) -> i8 {
        match self {
            Outcome::Winner(Player::X) => 1,
            Outcome::Winner(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}

/// A finished board with no winner is a draw.
impl From<Option<Player>> for Outcome {
    fn from(winner: Option<Player>) -> Self {
        match winner {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
