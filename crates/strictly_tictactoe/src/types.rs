//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// Number of marks each player has on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCounts {
    /// Squares held by X.
    pub x: usize,
    /// Squares held by O.
    pub o: usize,
}

impl CellCounts {
    /// Total number of occupied squares.
    pub fn total(&self) -> usize {
        self.x + self.o
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Nothing in the public API mutates one in place;
/// playing a move yields a new board and leaves the old one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Creates a board from three rows, top to bottom.
    ///
    /// Any grid is accepted; see [`crate::BoardInvariants`] for checking
    /// that the grid is reachable by legal play.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the board as three rows, top to bottom.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let mut rows = [[Square::Empty; 3]; 3];
        for (index, square) in self.squares.iter().enumerate() {
            rows[index / 3][index % 3] = *square;
        }
        rows
    }

    /// Counts the marks of each player.
    pub fn cell_counts(&self) -> CellCounts {
        self.squares
            .iter()
            .fold(CellCounts::default(), |mut counts, square| {
                match square {
                    Square::Occupied(Player::X) => counts.x += 1,
                    Square::Occupied(Player::O) => counts.o += 1,
                    Square::Empty => {}
                }
                counts
            })
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// Unchecked: callers must know the square is empty.
    pub(crate) fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}|{}|{}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

/// Returns the starting board: all nine squares empty.
#[instrument]
pub fn initial() -> Board {
    Board::new()
}

/// Counts X and O marks on `board`.
#[instrument(level = "trace", skip(board))]
pub fn cell_counts(board: &Board) -> CellCounts {
    board.cell_counts()
}
