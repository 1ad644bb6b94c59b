//! The n×n takoyaki board.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::Position;

/// An n×n grid where each cell either holds a takoyaki or is empty.
///
/// Cells are stored in row-major order and indexed by [`Position`].
/// The textual form (used by [`Display`] and [`FromStr`]) is one line per
/// row with `'1'` for an occupied cell and `'0'` for an empty one.
///
/// # Examples
///
/// ```
/// use takoyaki_core::{Board, Position};
///
/// let mut board: Board = "100\n000\n001".parse()?;
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.count(), 2);
///
/// board.set_takoyaki(Position::new(0, 0), false);
/// board.set_takoyaki(Position::new(1, 1), true);
/// assert_eq!(board.to_string(), "000\n010\n001\n");
/// # Ok::<(), takoyaki_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an empty board of `size`×`size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Builds a board from its rows.
    ///
    /// Each row must contain exactly as many characters as there are rows,
    /// each of them `'0'` or `'1'`. Trailing whitespace (including `'\r'`) is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardParseError::Empty`] if there are no rows,
    /// [`BoardParseError::RowLength`] if a row has the wrong length and
    /// [`BoardParseError::InvalidCell`] if a character is not `'0'`/`'1'`.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, BoardParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<S> = rows.into_iter().collect();
        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }
        let size = rows.len();
        let mut board = Self::new(size);
        for (x, row) in rows.iter().enumerate() {
            board.fill_row(x, row.as_ref())?;
        }
        Ok(board)
    }

    /// Overwrites row `x` from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardParseError::RowLength`] or [`BoardParseError::InvalidCell`]
    /// when `row` is malformed; the board is left unchanged in that case.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not a row of this board.
    pub fn fill_row(&mut self, x: usize, row: &str) -> Result<(), BoardParseError> {
        assert!(x < self.size, "row {x} out of range for size {}", self.size);
        let row = row.trim_end();
        let len = row.chars().count();
        if len != self.size {
            return Err(BoardParseError::RowLength {
                row: x,
                expected: self.size,
                actual: len,
            });
        }
        let mut values = Vec::with_capacity(self.size);
        for (y, ch) in row.chars().enumerate() {
            let value = match ch {
                '1' => true,
                '0' => false,
                _ => return Err(BoardParseError::InvalidCell { row: x, col: y, ch }),
            };
            values.push(value);
        }
        let start = x * self.size;
        self.cells[start..start + self.size].copy_from_slice(&values);
        Ok(())
    }

    /// Returns the side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Converts signed coordinates into a position on this board.
    ///
    /// Returns `None` when the coordinates fall outside `[0, size)²`.
    #[must_use]
    pub fn position(&self, x: isize, y: isize) -> Option<Position> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let pos = Position::new(x, y);
        self.contains(pos).then_some(pos)
    }

    /// Returns `true` if the cell at `pos` holds a takoyaki.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not on the board.
    #[must_use]
    pub fn has_takoyaki(&self, pos: Position) -> bool {
        self[pos]
    }

    /// Sets whether the cell at `pos` holds a takoyaki.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not on the board.
    pub fn set_takoyaki(&mut self, pos: Position, value: bool) {
        let index = self.index_of(pos);
        self.cells[index] = value;
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns an iterator over the occupied cells in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} out of range for size {}",
            self.size
        );
        pos.x * self.size + pos.y
    }
}

impl Index<Position> for Board {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos)]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for &cell in row {
                f.write_str(if cell { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines().map(str::trim).filter(|line| !line.is_empty()))
    }
}

/// Errors that can occur when parsing a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The board has no rows.
    #[display("board has no rows")]
    Empty,
    /// A row does not have exactly `size` cells.
    #[display("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        /// Row index.
        row: usize,
        /// Expected number of cells.
        expected: usize,
        /// Actual number of cells.
        actual: usize,
    },
    /// A cell character is neither `'0'` nor `'1'`.
    #[display("invalid cell {ch:?} at ({row}, {col})")]
    InvalidCell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The offending character.
        ch: char,
    },
}
