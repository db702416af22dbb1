//! Optimal tic-tac-toe play by exhaustive minimax.
//!
//! The search walks every line of play below a board, scoring terminal
//! boards by their utility (1 for an X win, -1 for an O win, 0 for a draw).
//! X maximizes and O minimizes.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::best_action;
//! use strictly_tictactoe::{Board, Player, Position, Square};
//!
//! let (x, o, e) = (Square::Occupied(Player::X), Square::Occupied(Player::O), Square::Empty);
//! let board = Board::from_rows([[x, x, e], [o, o, e], [e, e, e]]);
//! assert_eq!(best_action(&board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod search;
mod self_play;
mod stats;

pub use config::{ConfigError, SearchConfig};
pub use search::{Minimax, SearchReport, best_action, max_value, min_value};
pub use self_play::{Playout, play_out};
pub use stats::SearchStats;
