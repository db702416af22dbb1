//! Pure tic-tac-toe game logic.
//!
//! This crate is the data model a game-tree search runs over: a 3x3
//! [`Board`] of [`Square`]s and the rules that act on it.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: turn inference, move generation, win and terminal detection
//! - **Contracts**: pre/postconditions checked around [`apply_action`]
//! - **Invariants**: properties every legally reached board satisfies
//!
//! Boards are `Copy` values. Every move yields a new board, so callers can
//! explore many continuations from one position without sharing mutable
//! state.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{apply_action, current_player, initial, is_terminal, Player, Position};
//!
//! let board = initial();
//! assert_eq!(current_player(&board), Player::X);
//!
//! let next = apply_action(&board, Position::Center)?;
//! assert_eq!(current_player(&next), Player::O);
//! assert!(!is_terminal(&next));
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{ApplyContract, Contract, SquareIsEmpty};
pub use invariants::{
    BalancedMarksInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleWinnerInvariant,
};
pub use outcome::Outcome;
pub use position::{Action, Position};
pub use rules::{
    apply_action, current_player, is_full, is_terminal, legal_actions, outcome, replay,
    successors, utility, winner,
};
pub use types::{Board, CellCounts, Player, Square, cell_counts, initial};
