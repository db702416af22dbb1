//! Optimal self-play.

use crate::search::Minimax;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    Board, Move, MoveError, Outcome, apply_action, current_player, is_terminal, outcome,
};
use tracing::{debug, info, instrument};

/// A game played to the end by one searcher on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Playout {
    /// Moves played, in order.
    moves: Vec<Move>,
    /// Final, terminal board.
    board: Board,
    /// How the game ended.
    outcome: Outcome,
}

/// Plays `searcher`'s best action for whoever is to move until the game ends.
///
/// # Errors
///
/// Propagates [`MoveError`] if a chosen action cannot be applied, which
/// would mean the searcher picked an occupied square.
#[instrument(skip(searcher, board))]
pub fn play_out(searcher: &Minimax, board: &Board) -> Result<Playout, MoveError> {
    let mut board = *board;
    let mut moves = Vec::new();

    while let Some(action) = searcher.best_action(&board) {
        let player = current_player(&board);
        board = apply_action(&board, action)?;
        debug!(%player, %action, "Self-play move");
        moves.push(Move::new(player, action));
    }

    debug_assert!(is_terminal(&board), "search stopped on a live board:\n{board}");
    let outcome = outcome(&board).unwrap_or(Outcome::Draw);
    info!(%outcome, moves = moves.len(), "Self-play finished");
    Ok(Playout::new(moves, board, outcome))
}
