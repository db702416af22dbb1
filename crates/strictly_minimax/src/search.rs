//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. Every line of play is followed
//! to a terminal board; there is no pruning, depth limit or table.
//!
//! Ties between equally valued actions go to the first one in
//! [`legal_actions`](strictly_tictactoe::legal_actions) order (row-major),
//! for both players.

use crate::config::SearchConfig;
use crate::stats::SearchStats;
use derive_getters::Getters;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    Action, Board, Player, current_player, is_terminal, successors, utility,
};
use tracing::{debug, instrument};

/// Value of `board` if X, the maximizer, chooses next.
///
/// Terminal boards are worth their [`utility`]; otherwise the best over all
/// legal actions of [`min_value`] of the resulting board.
#[instrument(level = "debug", skip(board), fields(%board))]
pub fn max_value(board: &Board) -> i8 {
    evaluate(board, true, &mut SearchStats::default())
}

/// Value of `board` if O, the minimizer, chooses next.
///
/// Terminal boards are worth their [`utility`]; otherwise the worst over all
/// legal actions of [`max_value`] of the resulting board.
#[instrument(level = "debug", skip(board), fields(%board))]
pub fn min_value(board: &Board) -> i8 {
    evaluate(board, false, &mut SearchStats::default())
}

/// Optimal action for the player to move, or `None` on a terminal board.
///
/// Runs a sequential [`Minimax`] search with the default configuration.
pub fn best_action(board: &Board) -> Option<Action> {
    Minimax::default().best_action(board)
}

/// The shared recursion behind [`max_value`] and [`min_value`].
fn evaluate(board: &Board, maximizing: bool, stats: &mut SearchStats) -> i8 {
    stats.record_node();
    if is_terminal(board) {
        stats.record_terminal();
        return utility(board);
    }

    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    for (_, child) in successors(board) {
        let value = evaluate(&child, !maximizing, stats);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// What a search found at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct SearchReport {
    /// Optimal action, `None` if the root was terminal.
    action: Option<Action>,
    /// Minimax value of the root from X's side.
    value: i8,
    /// Nodes visited.
    stats: SearchStats,
}

/// Minimax searcher.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    /// Creates a searcher.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Optimal action for the player to move, or `None` on a terminal board.
    pub fn best_action(&self, board: &Board) -> Option<Action> {
        *self.search(board).action()
    }

    /// Searches the full tree below `board`.
    ///
    /// The player to move picks the child whose value is strictly better
    /// than every child before it, so the earliest optimal action wins.
    #[instrument(skip(self, board), fields(parallel = *self.config.parallel()))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut stats = SearchStats::default();
        stats.record_node();
        if is_terminal(board) {
            stats.record_terminal();
            debug!("Root is terminal");
            return SearchReport::new(None, utility(board), stats);
        }

        let player = current_player(board);
        let maximizing = player == Player::X;
        // X's children are scored by O's reply and vice versa.
        let scored = self.score_children(board, !maximizing);

        let mut best_value = if maximizing { i8::MIN } else { i8::MAX };
        let mut best_action = None;
        for (action, value, child_stats) in scored {
            stats.merge(&child_stats);
            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_value = value;
                best_action = Some(action);
            }
        }

        debug!(%player, ?best_action, value = best_value, %stats, "Search complete");
        SearchReport::new(best_action, best_value, stats)
    }

    /// Value of every child of `board`, in enumeration order.
    fn score_children(&self, board: &Board, maximizing: bool) -> Vec<(Action, i8, SearchStats)> {
        let children: Vec<(Action, Board)> = successors(board).collect();
        let score = move |(action, child): &(Action, Board)| {
            let mut stats = SearchStats::default();
            let value = evaluate(child, maximizing, &mut stats);
            (*action, value, stats)
        };

        if *self.config.parallel() {
            children.par_iter().map(score).collect()
        } else {
            children.iter().map(score).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Position, Square, apply_action};

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_terminal_root_has_no_action() {
        let board = Board::from_rows([[O, O, O], [X, X, E], [X, E, E]]);
        assert_eq!(best_action(&board), None);
        let report = Minimax::default().search(&board);
        assert_eq!(*report.value(), -1);
        assert_eq!(*report.stats().nodes(), 1);
        assert_eq!(*report.stats().terminals(), 1);
    }

    #[test]
    fn test_x_takes_the_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let action = best_action(&board);
        assert_eq!(action, Some(Position::TopRight));
        let next = apply_action(&board, Position::TopRight).unwrap();
        assert_eq!(utility(&next), 1);
    }

    #[test]
    fn test_o_takes_the_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
        assert_eq!(current_player(&board), Player::O);
        assert_eq!(best_action(&board), Some(Position::MiddleRight));
        assert_eq!(*Minimax::default().search(&board).value(), -1);
    }

    #[test]
    fn test_o_blocks() {
        // X threatens the top row; O has no win of its own.
        let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        assert_eq!(best_action(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_value_functions_on_terminal_boards() {
        let draw = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(max_value(&draw), 0);
        assert_eq!(min_value(&draw), 0);
    }

    #[test]
    fn test_value_functions_follow_the_mover() {
        // X to move completes the top row.
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(max_value(&board), 1);

        // O to move completes the middle row.
        let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
        assert_eq!(min_value(&board), -1);
    }

    #[test]
    fn test_ties_go_to_first_action() {
        // A single empty square leaves one action.
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        assert_eq!(best_action(&board), Some(Position::BottomRight));

        // Every reply to this opening draws; row-major order picks the first.
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let report = Minimax::default().search(&board);
        assert_eq!(*report.value(), 0);
        assert_eq!(*report.action(), Some(Position::TopCenter));
    }

    #[test]
    fn test_o_avoids_the_losing_square() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [O, X, X]]);
        let report = Minimax::default().search(&board);
        assert_eq!(*report.value(), 0);
        assert_eq!(*report.action(), Some(Position::MiddleRight));
    }

    #[test]
    fn test_searcher_keeps_its_config() {
        let config = SearchConfig::new(true);
        let searcher = Minimax::new(config.clone());
        assert_eq!(searcher.config(), &config);
        assert!(!*Minimax::default().config().parallel());
    }

    #[test]
    fn test_report_value_matches_value_functions() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let report = Minimax::default().search(&board);
        assert_eq!(*report.value(), max_value(&board));
    }
}
