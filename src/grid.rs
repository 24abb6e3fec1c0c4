mod marker;
mod parse;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use marker::{MarkStack, PathMark};

/// Written into a cell while it sits on the active search path.
/// No constructor produces a grid containing it.
pub const SENTINEL: char = '\0';

/// Number of orthogonal directions a path may step in.
pub const DIRECTIONS: usize = 4;

const OFFSETS: [(isize, isize); DIRECTIONS] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The neighbour in `direction` (`0..DIRECTIONS`: up, down, left, right).
    /// Only underflow is caught here; the grid rejects positions past its edge.
    pub fn step(self, direction: usize) -> Option<Position> {
        let (dr, dc) = *OFFSETS.get(direction)?;
        Some(Position::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }

    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        (0..DIRECTIONS).filter_map(move |direction| self.step(direction))
    }
}

/// A rectangular, row-major buffer of single characters.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<char>>", into = "Vec<Vec<char>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from rows of cells. Every row must have the same length
    /// and no cell may hold [`SENTINEL`].
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Grid> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow { row: r, expected: cols, found: row.len() });
            }
            if let Some(c) = row.iter().position(|&ch| ch == SENTINEL) {
                return Err(Error::ReservedCharacter { row: r, col: c });
            }
            cells.extend_from_slice(row);
        }

        Ok(Grid { rows: rows.len(), cols, cells })
    }

    /// One string per row, one cell per `char`.
    pub fn from_strs<I, S>(rows: I) -> Result<Grid>
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        Self::from_rows(rows.into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect())
    }

    /// Parses the plain-text grid format: one row per line, cells optionally
    /// separated by spaces, tabs or commas. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Grid> {
        Self::from_rows(parse::grid_rows(text)?)
    }

    /// Parses a JSON array of rows, each an array of one-character strings.
    pub fn from_json_str(json: &str) -> Result<Grid> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fills a `rows × cols` grid with characters drawn uniformly from `alphabet`.
    ///
    /// # Panics
    /// If `alphabet` contains [`SENTINEL`], or is empty while the grid has at
    /// least one cell.
    pub fn random<R: Rng>(rows: usize, cols: usize, alphabet: &[char], rng: &mut R) -> Grid {
        assert!(!alphabet.contains(&SENTINEL), "alphabet must not contain the path sentinel");
        assert!(!alphabet.is_empty() || rows * cols == 0, "cannot fill a non-empty grid from an empty alphabet");
        let cells = (0..rows * cols)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// The character at `pos`, or `None` past the edge. A cell on the active
    /// search path reads as [`SENTINEL`].
    pub fn get(&self, pos: Position) -> Option<char> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn is_marked(&self, pos: Position) -> bool {
        self.get(pos) == Some(SENTINEL)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.position_of(i))
    }

    pub fn row_chars(&self, row: usize) -> Option<&[char]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Puts `pos` on the active path until the returned guard is dropped.
    /// Returns `None` if `pos` is off the grid or already marked.
    pub fn mark(&mut self, pos: Position) -> Option<PathMark<'_>> {
        PathMark::acquire(self, pos)
    }

    fn replace(&mut self, index: usize, ch: char) -> char {
        std::mem::replace(&mut self.cells[index], ch)
    }
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<char>> {
    fn from(grid: Grid) -> Self {
        (0..grid.rows)
            .map(|r| grid.row_chars(r).map(<[char]>::to_vec).unwrap_or_default())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::parse(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            let row = self.row_chars(r).unwrap_or_default();
            let line = row.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
