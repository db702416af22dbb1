//! Terminal-state detection and scoring.

use super::super::{Board, Outcome, Player};
use super::draw::is_full;
use super::win::winner;
use tracing::instrument;

/// Returns true if the game is over: someone has a line or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board from X's side: 1 if X has a line, -1 if O has one,
/// 0 otherwise.
///
/// Only meaningful on terminal boards; in-progress boards score 0.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Returns the outcome of a terminal board, `None` while the game is on.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    is_terminal(board).then(|| Outcome::from(winner(board)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert!(!is_terminal(&board));
        assert_eq!(utility(&board), 0);
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(winner(&board), None);
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), 0);
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_o_top_row_is_terminal_with_empties() {
        let board = Board::from_rows([[O, O, O], [X, X, E], [X, E, E]]);
        assert_eq!(winner(&board), Some(Player::O));
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), -1);
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::O)));
    }

    #[test]
    fn test_x_win_scores_one() {
        let board = Board::from_rows([[X, O, E], [X, O, E], [X, E, E]]);
        assert_eq!(utility(&board), 1);
        assert_eq!(outcome(&board).map(|o| o.utility()), Some(1));
    }
}
