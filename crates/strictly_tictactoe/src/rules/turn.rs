//! Turn inference.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player to move.
///
/// The turn is not stored; it follows from the marks on the board. X moves
/// first, so O is to move exactly when X is ahead.
#[instrument(level = "trace", skip(board))]
pub fn current_player(board: &Board) -> Player {
    let counts = board.cell_counts();
    if counts.x > counts.o {
        Player::O
    } else {
        Player::X
    }
}
