//! Balanced marks invariant: X is never behind O and at most one ahead.

use super::super::Board;
use super::Invariant;
use tracing::warn;

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
///
/// X moves first and the players alternate, so any other count means the
/// board was not reached by legal play.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let counts = board.cell_counts();
        let valid = counts.x == counts.o || counts.x == counts.o + 1;
        if !valid {
            warn!(x = counts.x, o = counts.o, "Balanced marks violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate, X first (X count equals O count or exceeds it by one)"
    }
}
