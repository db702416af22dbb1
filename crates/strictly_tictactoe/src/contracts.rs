//! Contract-based validation for applying actions.
//!
//! Contracts state what must hold before an action is applied and what the
//! transition guarantees afterwards: {P} action {Q}.

use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::rules::{current_player, is_terminal};
use super::{Action, Board, MoveError, Position, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), InvariantViolation>;
}

/// Precondition: the square at the action's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::InvalidMove`] if `pos` is taken.
    #[instrument(level = "trace", skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::InvalidMove(pos))
        }
    }
}

/// Contract for [`crate::apply_action`].
///
/// Precondition:
/// - Target square is empty
///
/// Postconditions:
/// - Only the target square changed
/// - It now holds the mark of the player who was to move
/// - Board invariants still hold if they held on an unfinished board
pub struct ApplyContract;

impl Contract<Board, Action> for ApplyContract {
    fn pre(board: &Board, action: &Action) -> Result<(), MoveError> {
        SquareIsEmpty::check(board, *action)
    }

    fn post(before: &Board, action: &Action, after: &Board) -> Result<(), InvariantViolation> {
        let changed: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|pos| before.get(*pos) != after.get(*pos))
            .collect();
        if changed != [*action] {
            warn!(?changed, %action, "Move touched unexpected squares");
            return Err(InvariantViolation::new(
                "Exactly the target square changes",
            ));
        }

        let mover = current_player(before);
        if after.get(*action) != Square::Occupied(mover) {
            warn!(%mover, %action, "Move placed the wrong mark");
            return Err(InvariantViolation::new(
                "The target holds the mover's mark",
            ));
        }

        // Play after a finished game may legitimately break the invariants.
        if !is_terminal(before) && BoardInvariants::check_all(before).is_ok() {
            BoardInvariants::check_all(after).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
            })?;
        }

        Ok(())
    }
}
