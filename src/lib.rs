//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! The computer searches the game tree with alpha-beta pruning and falls back
//! to a static window heuristic once the search horizon is reached.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four::{board::{Board, Side}, search::search};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // YOU opens in columns 6 and 7 while CPU builds 1, 2, 3 along the bottom
//! let mut board = Board::from_moves(6, 7, "6162737")?;
//! let result = search(&mut board, Side::Cpu, 2);
//!
//! assert_eq!((result.column, result.score), (Some(4), -1000));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod heuristic;

pub mod search;

pub mod policy;

pub mod arena;


pub use error::Error;

/// The number of pieces in a row needed to win
pub const CONNECT_NUMBER: usize = 4;

/// The score of a position won by YOU. A CPU win scores the negation.
pub const WIN_SCORE: i32 = 1000;

/// The per-piece weight of YOU in the static heuristic
pub const PER_YOU_SCORE: i32 = 1;

/// The probability that the quick-move policy prefers the center column
pub const CENTER_PREFERENCE: f64 = 0.65;

/// The default number of rows on the game board
pub const DEFAULT_ROWS: usize = 6;

/// The default number of columns on the game board
pub const DEFAULT_COLUMNS: usize = 7;

/// The default search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

// a single complete window must never outscore a decided game
const_assert!((CONNECT_NUMBER as i32) * PER_YOU_SCORE * 100 < WIN_SCORE);
// the heuristic windows are the same length as a winning run
const_assert_eq!(CONNECT_NUMBER, 4);
const_assert!(DEFAULT_ROWS > CONNECT_NUMBER && DEFAULT_COLUMNS > CONNECT_NUMBER);
