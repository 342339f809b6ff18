//! Connect-N board engine
//!
//! Connect 4 is a two-player connection game where players drop discs into a
//! vertically suspended grid. The objective is to be the first to form a
//! horizontal, vertical, or diagonal line of `connect_n` discs. The classic
//! game is 7 columns by 6 rows with four in a row; all three are configurable.
//!
//! # Board Layout
//!
//! The grid is stored in row-major order, with row 0 at the bottom:
//! ```text
//! Row 5: [35][36][37][38][39][40][41]  <- Top
//! Row 4: [28][29][30][31][32][33][34]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{GameState, Grid, Player};
//!
//! let mut grid = Grid::new();
//! for _ in 0..3 {
//!     grid.apply_move(3, Player::One).unwrap();
//! }
//! assert_eq!(grid.check_state(Player::One, Some(3)), GameState::Ongoing);
//!
//! grid.apply_move(3, Player::One).unwrap();
//! assert_eq!(grid.check_state(Player::One, Some(3)), GameState::Win);
//! ```

use std::fmt;
use thiserror::Error;

mod text;

/// Default board dimensions
pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Default number of aligned discs needed to win
pub const CONNECT_N: usize = 4;

/// Scan directions as (column step, row step): horizontal, vertical,
/// diagonal `/` and diagonal `\`.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Errors raised by board operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid move: column {column} is full")]
    InvalidMove { column: usize },

    #[error("Column {column} out of range (board has {cols} columns)")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("Invalid board dimensions: {rows}x{cols} with connect {connect_n}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        connect_n: usize,
    },

    #[error("Malformed board text: {0}")]
    MalformedBoardText(String),
}

/// One of the two players. `One` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player whose score minimax maximizes.
    pub const MAX: Player = Player::One;

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Glyph used in the text format.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Player> {
        match symbol {
            'X' => Some(Player::One),
            'O' => Some(Player::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1 (X)"),
            Player::Two => write!(f, "Player 2 (O)"),
        }
    }
}

/// Content of a single cell; `None` is empty.
pub type Cell = Option<Player>;

/// Outcome of a position from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The player has `connect_n` aligned discs somewhere on the grid
    Win,
    /// No empty cell remains and the player has not won
    Draw,
    Ongoing,
}

/// A rows x cols Connect-N grid.
///
/// Each column fills bottom-up. `Clone` is a deep copy, so a grid handed to
/// a search node or a recursive call never shares storage with its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    connect_n: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Empty classic 6x7 board with four in a row.
    pub fn new() -> Self {
        Self::empty(ROWS, COLS, CONNECT_N)
    }

    /// Empty board with custom dimensions and win length.
    pub fn with_dimensions(rows: usize, cols: usize, connect_n: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || connect_n == 0 {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                connect_n,
            });
        }
        Ok(Self::empty(rows, cols, connect_n))
    }

    fn empty(rows: usize, cols: usize, connect_n: usize) -> Self {
        Self {
            rows,
            cols,
            connect_n,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn connect_n(&self) -> usize {
        self.connect_n
    }

    /// Convert column and row to cell index
    #[inline]
    fn pos(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at (col, row).
    ///
    /// # Panics
    /// If the coordinates are outside the grid.
    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        assert!(col < self.cols && row < self.rows, "cell ({col}, {row}) off the board");
        self.cells[self.pos(col, row)]
    }

    pub(crate) fn set_cell(&mut self, col: usize, row: usize, cell: Cell) {
        let pos = self.pos(col, row);
        self.cells[pos] = cell;
    }

    /// Cell reached by taking `steps` steps from (col, row) along `direction`,
    /// or `None` once the walk leaves the grid.
    #[inline]
    pub fn cell_along(
        &self,
        col: usize,
        row: usize,
        (dc, dr): (isize, isize),
        steps: usize,
    ) -> Option<Cell> {
        let c = col as isize + dc * steps as isize;
        let r = row as isize + dr * steps as isize;
        if c < 0 || r < 0 || c >= self.cols as isize || r >= self.rows as isize {
            return None;
        }
        Some(self.cells[self.pos(c as usize, r as usize)])
    }

    /// A column accepts a disc iff its top cell is empty.
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < self.cols && self.cell(column, self.rows - 1).is_none()
    }

    /// Columns that still accept a disc, ascending.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid_move(col)).collect()
    }

    pub fn has_valid_move(&self) -> bool {
        (0..self.cols).any(|col| self.is_valid_move(col))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Highest occupied row in a column, i.e. where the last disc landed.
    pub fn top_row(&self, column: usize) -> Option<usize> {
        if column >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cell(column, row).is_some())
    }

    /// Drop a disc for `player` into `column`, mutating this grid.
    ///
    /// Returns the row the disc landed in. A failed move leaves the grid
    /// untouched.
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<usize, BoardError> {
        if column >= self.cols {
            return Err(BoardError::ColumnOutOfRange {
                column,
                cols: self.cols,
            });
        }

        let row = (0..self.rows)
            .find(|&row| self.cell(column, row).is_none())
            .ok_or(BoardError::InvalidMove { column })?;

        self.set_cell(column, row, Some(player));
        Ok(row)
    }

    /// Copy of this grid with a disc for `player` dropped into `column`.
    pub fn with_move(&self, column: usize, player: Player) -> Result<Grid, BoardError> {
        let mut next = self.clone();
        next.apply_move(column, player)?;
        Ok(next)
    }

    /// Whether `player` has `connect_n` aligned discs anywhere on the grid.
    pub fn connected(&self, player: Player) -> bool {
        (0..self.rows).any(|row| {
            (0..self.cols).any(|col| {
                self.cell(col, row) == Some(player)
                    && DIRECTIONS
                        .iter()
                        .any(|&direction| self.window_filled(col, row, direction, player))
            })
        })
    }

    /// The `connect_n` window starting at (col, row) is all `player`.
    fn window_filled(&self, col: usize, row: usize, direction: (isize, isize), player: Player) -> bool {
        (1..self.connect_n).all(|steps| self.cell_along(col, row, direction, steps) == Some(Some(player)))
    }

    /// Whether a line through (col, row) reaches `connect_n` discs of `player`.
    fn connected_through(&self, col: usize, row: usize, player: Player) -> bool {
        DIRECTIONS.iter().any(|&(dc, dr)| {
            let forward = self.run_length(col, row, (dc, dr), player);
            let backward = self.run_length(col, row, (-dc, -dr), player);
            1 + forward + backward >= self.connect_n
        })
    }

    /// Consecutive `player` discs after (col, row) along `direction`.
    fn run_length(&self, col: usize, row: usize, direction: (isize, isize), player: Player) -> usize {
        (1..)
            .take_while(|&steps| self.cell_along(col, row, direction, steps) == Some(Some(player)))
            .count()
    }

    /// Whether the top disc of `column` is `player`'s and completes a line
    /// of `connect_n` through it.
    ///
    /// Only lines through that disc are scanned. Right after `player` drops
    /// into `column` on a grid where `player` had no connect, this agrees
    /// with [`Grid::connected`].
    pub fn wins_with(&self, column: usize, player: Player) -> bool {
        match self.top_row(column) {
            Some(row) if self.cell(column, row) == Some(player) => {
                self.connected_through(column, row, player)
            }
            _ => false,
        }
    }

    /// Game state for `player`.
    ///
    /// `last_move` lets the scan start with the lines through the top disc
    /// of that column. The result is always the same as with `None`.
    pub fn check_state(&self, player: Player, last_move: Option<usize>) -> GameState {
        let won = last_move.is_some_and(|col| self.wins_with(col, player))
            || self.connected(player);

        if won {
            GameState::Win
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Ongoing
        }
    }

    /// Player with a connect-N on the grid, checking both players.
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&player| self.connected(player))
    }

    /// Either player has won or no column accepts a disc.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.has_valid_move()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
