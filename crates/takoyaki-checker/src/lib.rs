//! Rule checker for takoyaki pick-and-place solutions.
//!
//! A validation run takes two inputs:
//!
//! - a problem description ([`Problem`]): board size, takoyaki count, arm
//!   vertex count, and the initial and target boards;
//! - a candidate solution: the agent's start position followed by one move
//!   token per turn.
//!
//! [`Simulator`] replays the moves against a copy of the initial board and
//! stops at the first rule violation, reported as a [`ViolationError`].
//! [`check`] composes parsing and simulation for a single run.
//!
//! Only the legality of the move script is checked. The final board is
//! not compared with the target board.
//!
//! # Examples
//!
//! ```
//! use takoyaki_checker::{CheckOptions, ViolationKind, check_str};
//!
//! let problem = "2 1 1\n10\n00\n00\n10\n";
//!
//! let report = check_str(problem, "1\n0 0\n.P\nD.\n.P\n", &CheckOptions::default())?;
//! assert_eq!(report.simulation.turns, 3);
//! assert_eq!(report.simulation.board.to_string(), "00\n10\n");
//!
//! let err = check_str(problem, "1\n0 0\nDP\n", &CheckOptions::default()).unwrap_err();
//! assert_eq!(err.violation_kind(), Some(ViolationKind::NotFoundTakoyaki));
//! # Ok::<(), takoyaki_checker::CheckError>(())
//! ```

pub use self::{check::*, error::*, options::*, problem::*, simulator::*, solution::*};

mod check;
mod error;
mod options;
mod problem;
mod simulator;
mod solution;
