use std::io;

use takoyaki_core::{BoardParseError, Position};

/// A rule violation found while replaying a solution.
///
/// Every variant carries the context needed to reproduce the violation.
/// Turns are numbered from 1; the start position is checked before the
/// first turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ViolationError {
    /// The start position lies outside the board.
    #[display("start position ({x}, {y}) is outside the {size}x{size} board")]
    InvalidStartPosition {
        /// Start row.
        x: isize,
        /// Start column.
        y: isize,
        /// Board side length.
        size: usize,
    },
    /// The first character of a move is not one of `L`, `R`, `U`, `D`, `.`.
    #[display("illegal direction (turn {turn}): {token:?}")]
    IllegalDirection {
        /// Turn number.
        turn: usize,
        /// The offending character.
        token: char,
    },
    /// The move takes the agent off the board.
    #[display("out of board (turn {turn}): ({x}, {y})")]
    OutOfBoard {
        /// Turn number.
        turn: usize,
        /// Row the agent would have moved to.
        x: isize,
        /// Column the agent would have moved to.
        y: isize,
    },
    /// The second character of a move is not one of `.`, `P`.
    #[display("illegal interaction (turn {turn}): {token:?}")]
    IllegalInteraction {
        /// Turn number.
        turn: usize,
        /// The offending character.
        token: char,
    },
    /// `P` on an empty cell while not holding a takoyaki.
    #[display("not found takoyaki (turn {turn}) at {position}")]
    NotFoundTakoyaki {
        /// Turn number.
        turn: usize,
        /// Cell the agent tried to pick from.
        position: Position,
    },
    /// `P` on an occupied cell while already holding a takoyaki.
    #[display("takoyaki already exists (turn {turn}) at {position}")]
    DuplicationTakoyaki {
        /// Turn number.
        turn: usize,
        /// Cell the agent tried to place on.
        position: Position,
    },
    /// The script has more turns than allowed.
    #[display("operation count is over: {count} > {max}")]
    ExceedMaxOperationTurn {
        /// Number of turns in the script.
        count: usize,
        /// Largest accepted number of turns.
        max: usize,
    },
}

impl ViolationError {
    /// Returns the kind of this violation without its context.
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::InvalidStartPosition { .. } => ViolationKind::InvalidStartPosition,
            Self::IllegalDirection { .. } => ViolationKind::IllegalDirection,
            Self::OutOfBoard { .. } => ViolationKind::OutOfBoard,
            Self::IllegalInteraction { .. } => ViolationKind::IllegalInteraction,
            Self::NotFoundTakoyaki { .. } => ViolationKind::NotFoundTakoyaki,
            Self::DuplicationTakoyaki { .. } => ViolationKind::DuplicationTakoyaki,
            Self::ExceedMaxOperationTurn { .. } => ViolationKind::ExceedMaxOperationTurn,
        }
    }

    /// Returns the turn at which the violation happened, if it is tied to one.
    #[must_use]
    pub fn turn(&self) -> Option<usize> {
        match self {
            Self::IllegalDirection { turn, .. }
            | Self::OutOfBoard { turn, .. }
            | Self::IllegalInteraction { turn, .. }
            | Self::NotFoundTakoyaki { turn, .. }
            | Self::DuplicationTakoyaki { turn, .. } => Some(*turn),
            Self::InvalidStartPosition { .. } | Self::ExceedMaxOperationTurn { .. } => None,
        }
    }
}

/// The kind of a [`ViolationError`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum ViolationKind {
    /// See [`ViolationError::InvalidStartPosition`].
    InvalidStartPosition,
    /// See [`ViolationError::IllegalDirection`].
    IllegalDirection,
    /// See [`ViolationError::OutOfBoard`].
    OutOfBoard,
    /// See [`ViolationError::IllegalInteraction`].
    IllegalInteraction,
    /// See [`ViolationError::NotFoundTakoyaki`].
    NotFoundTakoyaki,
    /// See [`ViolationError::DuplicationTakoyaki`].
    DuplicationTakoyaki,
    /// See [`ViolationError::ExceedMaxOperationTurn`].
    ExceedMaxOperationTurn,
}

/// Which of the two boards of a problem a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardKind {
    /// The board the agent starts on.
    #[display("initial")]
    Initial,
    /// The board the agent should reach.
    #[display("target")]
    Target,
}

/// Errors that can occur when parsing a problem description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProblemError {
    /// The description is empty.
    #[display("problem description is empty")]
    MissingHeader,
    /// The header is not three unsigned integers `n m v` with `n > 0`.
    #[display("invalid problem header {line:?}: expected `n m v`")]
    InvalidHeader {
        /// The header line.
        line: String,
    },
    /// The description ends before all board rows were read.
    #[display("{board} board is missing row {row}")]
    MissingRow {
        /// Board the row belongs to.
        board: BoardKind,
        /// Row index.
        row: usize,
    },
    /// A board row is malformed.
    #[display("invalid {board} board: {source}")]
    Board {
        /// Board the row belongs to.
        board: BoardKind,
        /// Underlying parse error.
        source: BoardParseError,
    },
}

/// Errors that can occur when reading the header of a candidate solution.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolutionError {
    /// The solution ends before the start position line.
    #[display("solution has no start position line")]
    MissingStart,
    /// The start position line is not two integers `x y`.
    #[display("invalid start position line {line:?}: expected `x y`")]
    InvalidStart {
        /// The start position line.
        line: String,
    },
}

/// Errors that can abort a validation run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CheckError {
    /// Reading one of the inputs failed.
    #[display("failed to read input: {_0}")]
    Io(io::Error),
    /// The problem description is malformed.
    #[display("{_0}")]
    Problem(ProblemError),
    /// The solution header is malformed.
    #[display("{_0}")]
    Solution(SolutionError),
    /// The solution breaks a rule.
    #[display("{_0}")]
    Violation(ViolationError),
}

impl CheckError {
    /// Returns the violation kind if this error is a rule violation.
    #[must_use]
    pub fn violation_kind(&self) -> Option<ViolationKind> {
        match self {
            Self::Violation(err) => Some(err.kind()),
            Self::Io(_) | Self::Problem(_) | Self::Solution(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = ViolationError::OutOfBoard {
            turn: 3,
            x: -1,
            y: 0,
        };
        assert_eq!(err.to_string(), "out of board (turn 3): (-1, 0)");

        let err = ViolationError::NotFoundTakoyaki {
            turn: 1,
            position: Position::new(1, 0),
        };
        assert_eq!(err.to_string(), "not found takoyaki (turn 1) at (1, 0)");

        let err = ViolationError::IllegalInteraction {
            turn: 2,
            token: 'X',
        };
        assert_eq!(err.to_string(), "illegal interaction (turn 2): 'X'");

        let err = ViolationError::ExceedMaxOperationTurn {
            count: 100_001,
            max: 100_000,
        };
        assert_eq!(err.to_string(), "operation count is over: 100001 > 100000");
    }

    #[test]
    fn test_kind_and_turn() {
        let err = ViolationError::DuplicationTakoyaki {
            turn: 7,
            position: Position::ORIGIN,
        };
        assert_eq!(err.kind(), ViolationKind::DuplicationTakoyaki);
        assert_eq!(err.turn(), Some(7));

        let err = ViolationError::InvalidStartPosition { x: 5, y: 0, size: 2 };
        assert!(err.kind().is_invalid_start_position());
        assert_eq!(err.turn(), None);
    }

    #[test]
    fn test_check_error_violation_kind() {
        let err = CheckError::from(ViolationError::IllegalDirection {
            turn: 1,
            token: 'X',
        });
        assert_eq!(err.violation_kind(), Some(ViolationKind::IllegalDirection));

        let err = CheckError::from(SolutionError::MissingStart);
        assert_eq!(err.violation_kind(), None);
    }
}
