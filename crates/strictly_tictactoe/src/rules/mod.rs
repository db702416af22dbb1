//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards: whose turn it is, which moves are legal,
//! what a move produces, and when and how the game ends. None of them
//! mutate their input.

pub mod draw;
pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use moves::{apply_action, legal_actions, replay, successors};
pub use terminal::{is_terminal, outcome, utility};
pub use turn::current_player;
pub use win::winner;
