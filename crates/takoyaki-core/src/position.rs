//! Board coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell on the board.
///
/// `x` is the row index and `y` is the column index, both starting at 0.
/// [`Direction::Up`] and [`Direction::Down`] move along `x`;
/// [`Direction::Left`] and [`Direction::Right`] move along `y`.
///
/// A `Position` carries no board size; use [`Board::contains`] to check
/// whether it lies on a particular board.
///
/// [`Board::contains`]: crate::Board::contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
}

impl Position {
    /// The top-left cell.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the signed coordinates reached by moving one step in `direction`.
    ///
    /// The result may lie outside any board (including negative coordinates),
    /// so callers can report exactly where an illegal move would have landed.
    ///
    /// # Examples
    ///
    /// ```
    /// use takoyaki_core::{Direction, Position};
    ///
    /// assert_eq!(Position::ORIGIN.step(Direction::Up), (-1, 0));
    /// assert_eq!(Position::new(2, 3).step(Direction::Right), (2, 4));
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn step(self, direction: Direction) -> (isize, isize) {
        let (dx, dy) = direction.offset();
        (self.x as isize + dx, self.y as isize + dy)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_offsets() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.step(Direction::Left), (1, 0));
        assert_eq!(pos.step(Direction::Right), (1, 2));
        assert_eq!(pos.step(Direction::Up), (0, 1));
        assert_eq!(pos.step(Direction::Down), (2, 1));
        assert_eq!(pos.step(Direction::Stay), (1, 1));
    }

    #[test]
    fn test_step_can_leave_origin() {
        assert_eq!(Position::ORIGIN.step(Direction::Left), (0, -1));
        assert_eq!(Position::ORIGIN.step(Direction::Up), (-1, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }
}
