//! Moves and the error raised when one cannot be played.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error returned when an action cannot be applied to a board.
///
/// Only raised for caller-contract violations; a search that draws its
/// actions from the board it plays on never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square is already occupied.
    #[display("Invalid move: {} is already occupied", _0)]
    InvalidMove(Position),
}

impl MoveError {
    /// The position the failed move targeted.
    pub fn position(&self) -> Position {
        match self {
            MoveError::InvalidMove(pos) => *pos,
        }
    }
}

impl std::error::Error for MoveError {}
