//! Single winner invariant: the players never both own a line.

use super::super::rules::win::has_line;
use super::super::{Board, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: X and O do not both hold a complete line.
///
/// Play stops at the first line, so a second player's line is unreachable.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let valid = !(has_line(board, Player::X) && has_line(board, Player::O));
        if !valid {
            warn!("Both players hold a line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player holds a complete line"
    }
}
