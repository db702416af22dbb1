//! Move generation and application.

use super::super::contracts::{ApplyContract, Contract};
use super::super::{Action, Board, MoveError, Position};
use super::turn::current_player;
use tracing::{debug, instrument};

/// Returns the empty squares of `board`, in row-major order.
///
/// Treat the result as a set; the order is fixed only so that searches
/// break ties reproducibly.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Plays `action` for the player to move and returns the resulting board.
///
/// The input board is left as it was.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] if the target square is occupied.
#[instrument(skip(board), fields(player = %current_player(board)))]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, MoveError> {
    ApplyContract::pre(board, &action)?;

    let next = board.with_mark(action, current_player(board));

    debug_assert!(
        ApplyContract::post(board, &action, &next).is_ok(),
        "apply_action postcondition violated"
    );
    Ok(next)
}

/// Every legal action paired with the board it produces.
///
/// Children are built with the same placement as [`apply_action`], without
/// re-checking each target, since every action comes from
/// [`legal_actions`] of this very board.
#[instrument(level = "trace", skip(board))]
pub fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> {
    let board = *board;
    let player = current_player(&board);
    legal_actions(&board)
        .into_iter()
        .map(move |action| (action, board.with_mark(action, player)))
}

/// Plays `actions` in order from the initial board.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] at the first action whose square is
/// already taken.
#[instrument(skip(actions), fields(moves = actions.len()))]
pub fn replay(actions: &[Action]) -> Result<Board, MoveError> {
    let board = actions
        .iter()
        .try_fold(Board::new(), |board, &action| apply_action(&board, action))?;
    debug!(%board, "Replayed moves");
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_all_actions_on_empty_board() {
        assert_eq!(legal_actions(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_legal_actions_filters_occupied() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let actions = legal_actions(&board);
        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Position::TopLeft));
        assert!(!actions.contains(&Position::Center));
        assert_eq!(actions.first(), Some(&Position::TopCenter));
    }

    #[test]
    fn test_apply_places_current_player() {
        let board = Board::new();
        let next = apply_action(&board, Position::Center).unwrap();
        assert_eq!(next.get(Position::Center), X);
        assert_eq!(board, Board::new());

        let after = apply_action(&next, Position::TopLeft).unwrap();
        assert_eq!(after.get(Position::TopLeft), O);
    }

    #[test]
    fn test_apply_occupied_fails() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        assert_eq!(
            apply_action(&board, Position::TopLeft),
            Err(MoveError::InvalidMove(Position::TopLeft))
        );
    }

    #[test]
    fn test_successors_match_apply() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [E, E, E]]);
        for (action, child) in successors(&board) {
            assert_eq!(Ok(child), apply_action(&board, action));
        }
        assert_eq!(successors(&board).count(), 5);
    }

    #[test]
    fn test_replay() {
        let board = replay(&[Position::Center, Position::TopLeft, Position::BottomRight]).unwrap();
        assert_eq!(board, Board::from_rows([[O, E, E], [E, X, E], [E, E, X]]));
    }

    #[test]
    fn test_replay_rejects_repeat() {
        let result = replay(&[Position::Center, Position::Center]);
        assert_eq!(result, Err(MoveError::InvalidMove(Position::Center)));
    }
}
