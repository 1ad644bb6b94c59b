//! Core data structures for the takoyaki pick-and-place puzzle.
//!
//! This crate provides the value types shared by the checker and its
//! front-ends:
//!
//! - [`Position`] - A cell on the n×n board (`x` is the row, `y` the column)
//! - [`Board`] - An n×n grid of cells that either hold a takoyaki or not
//! - [`Direction`], [`Interaction`] and [`Move`] - One turn of the agent's script
//!
//! # Examples
//!
//! ```
//! use takoyaki_core::{Board, Move, Position};
//!
//! let board: Board = "10\n00".parse()?;
//! assert!(board[Position::new(0, 0)]);
//! assert_eq!(board.count(), 1);
//!
//! let mv: Move = "DP".parse()?;
//! assert_eq!(mv.to_string(), "DP");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{board::*, moves::*, position::*};

mod board;
mod moves;
mod position;
