//! Move tokens of a candidate solution.
//!
//! Each turn of a solution script is a two-character token: a [`Direction`]
//! character followed by an [`Interaction`] character, e.g. `"DP"` moves the
//! agent down and then picks up or places a takoyaki.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Direction of the agent's movement for a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// `L`: one column to the left.
    Left,
    /// `R`: one column to the right.
    Right,
    /// `U`: one row up.
    Up,
    /// `D`: one row down.
    Down,
    /// `.`: stay in place.
    Stay,
}

impl Direction {
    /// All directions in token order (`L`, `R`, `U`, `D`, `.`).
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Up, Self::Down, Self::Stay];

    /// Returns the `(dx, dy)` offset of this direction.
    ///
    /// `dx` changes the row and `dy` the column.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Stay => (0, 0),
        }
    }

    /// Returns the token character of this direction.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Stay => '.',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            '.' => Ok(Self::Stay),
            _ => Err(InvalidDirection(value)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

/// Error returned when a character is not a direction token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid direction character: {_0:?}")]
pub struct InvalidDirection(#[error(not(source))] pub char);

/// What the agent does with the cell it stands on after moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Interaction {
    /// `.`: leave the cell and the held takoyaki untouched.
    None,
    /// `P`: pick up the takoyaki on the cell, or place the held one there.
    PickOrPlace,
}

impl Interaction {
    /// All interactions in token order (`.`, `P`).
    pub const ALL: [Self; 2] = [Self::None, Self::PickOrPlace];

    /// Returns the token character of this interaction.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::None => '.',
            Self::PickOrPlace => 'P',
        }
    }
}

impl TryFrom<char> for Interaction {
    type Error = InvalidInteraction;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Self::None),
            'P' => Ok(Self::PickOrPlace),
            _ => Err(InvalidInteraction(value)),
        }
    }
}

impl Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

/// Error returned when a character is not an interaction token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid interaction character: {_0:?}")]
pub struct InvalidInteraction(#[error(not(source))] pub char);

/// A single turn: a movement followed by an interaction.
///
/// # Examples
///
/// ```
/// use takoyaki_core::{Direction, Interaction, Move};
///
/// let mv: Move = ".P".parse()?;
/// assert_eq!(mv, Move::new(Direction::Stay, Interaction::PickOrPlace));
/// assert_eq!(Move::new(Direction::Left, Interaction::None).to_string(), "L.");
/// # Ok::<(), takoyaki_core::MoveParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Movement applied first.
    pub direction: Direction,
    /// Interaction applied at the new position.
    pub interaction: Interaction,
}

impl Move {
    /// Creates a new move.
    #[must_use]
    pub const fn new(direction: Direction, interaction: Interaction) -> Self {
        Self {
            direction,
            interaction,
        }
    }

    /// Creates a move that only walks in `direction`.
    #[must_use]
    pub const fn walk(direction: Direction) -> Self {
        Self::new(direction, Interaction::None)
    }

    /// Creates a move that walks in `direction` and then picks or places.
    #[must_use]
    pub const fn walk_and_toggle(direction: Direction) -> Self {
        Self::new(direction, Interaction::PickOrPlace)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.interaction)
    }
}

/// Error returned when parsing a [`Move`] token fails.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum MoveParseError {
    /// The first character is not a direction.
    #[display("{_0}")]
    Direction(InvalidDirection),
    /// The second character is not an interaction.
    #[display("{_0}")]
    Interaction(InvalidInteraction),
    /// The token is not exactly two characters long.
    #[display("move token must be two characters, got {len}")]
    #[from(ignore)]
    Length {
        /// Number of characters in the token.
        len: usize,
    },
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(d), Some(i), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(MoveParseError::Length {
                len: s.chars().count(),
            });
        };
        Ok(Self::new(Direction::try_from(d)?, Interaction::try_from(i)?))
    }
}
