//! Bordered text format for grids.
//!
//! ```text
//! |==============|
//! |              |
//! |              |
//! |              |
//! |              |
//! |      X       |
//! |X O X O       |
//! |==============|
//! |0 1 2 3 4 5 6 |
//! ```
//!
//! Rows are printed top to bottom, each cell as its glyph followed by a
//! space. Column indices wider than one digit are printed mod 10.

use std::fmt;
use std::str::FromStr;

use crate::{BoardError, Cell, Grid, Player, CONNECT_N};

const EDGE: char = '|';
const BORDER: char = '=';
const EMPTY: char = ' ';

fn glyph(cell: Cell) -> char {
    cell.map_or(EMPTY, Player::symbol)
}

fn border_line(cols: usize) -> String {
    format!("{EDGE}{}{EDGE}", BORDER.to_string().repeat(cols * 2))
}

fn footer_line(cols: usize) -> String {
    let indices: String = (0..cols).map(|col| format!("{} ", col % 10)).collect();
    format!("{EDGE}{indices}{EDGE}")
}

fn malformed(reason: impl Into<String>) -> BoardError {
    BoardError::MalformedBoardText(reason.into())
}

/// Number of columns described by a `|====|` border line.
fn parse_border(line: &str) -> Result<usize, BoardError> {
    let inner = line
        .strip_prefix(EDGE)
        .and_then(|rest| rest.strip_suffix(EDGE))
        .ok_or_else(|| malformed(format!("border line {line:?} is not enclosed in '|'")))?;

    if inner.is_empty() || inner.len() % 2 != 0 || !inner.chars().all(|c| c == BORDER) {
        return Err(malformed(format!(
            "border line {line:?} must hold an even, non-zero number of '='"
        )));
    }

    Ok(inner.len() / 2)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = border_line(self.cols());
        writeln!(f, "{border}")?;
        for row in (0..self.rows()).rev() {
            write!(f, "{EDGE}")?;
            for col in 0..self.cols() {
                write!(f, "{} ", glyph(self.cell(col, row)))?;
            }
            writeln!(f, "{EDGE}")?;
        }
        writeln!(f, "{border}")?;
        write!(f, "{}", footer_line(self.cols()))
    }
}

impl Grid {
    /// Parse the bordered text format back into a grid with the given win
    /// length. Exact inverse of the `Display` output; trailing whitespace
    /// and trailing blank lines are ignored.
    pub fn parse(text: &str, connect_n: usize) -> Result<Grid, BoardError> {
        let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        if lines.len() < 4 {
            return Err(malformed(
                "expected a border, at least one row, a border and a column footer",
            ));
        }

        let footer = lines[lines.len() - 1];
        let cols = parse_border(lines[0])?;
        if parse_border(lines[lines.len() - 2])? != cols {
            return Err(malformed("top and bottom borders differ in width"));
        }

        let body = &lines[1..lines.len() - 2];
        let rows = body.len();
        let mut grid = Grid::with_dimensions(rows, cols, connect_n)?;

        for (i, line) in body.iter().enumerate() {
            let row = rows - 1 - i;
            let chars: Vec<char> = line.chars().collect();

            if chars.len() != cols * 2 + 2 || chars[0] != EDGE || chars[chars.len() - 1] != EDGE {
                return Err(malformed(format!(
                    "row {row} ({line:?}) does not span {cols} columns between '|' edges"
                )));
            }

            for col in 0..cols {
                let symbol = chars[1 + 2 * col];
                let cell = match symbol {
                    EMPTY => None,
                    other => Some(Player::from_symbol(other).ok_or_else(|| {
                        malformed(format!("unknown glyph {other:?} in row {row}, column {col}"))
                    })?),
                };
                if chars[2 + 2 * col] != EMPTY {
                    return Err(malformed(format!(
                        "expected a space after column {col} in row {row}"
                    )));
                }
                grid.set_cell(col, row, cell);
            }
        }

        if footer != footer_line(cols) {
            return Err(malformed(format!("unexpected column footer {footer:?}")));
        }

        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s, CONNECT_N)
    }
}
