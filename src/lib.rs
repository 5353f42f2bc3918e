//! Liquid Sort: a pure mechanics engine for beaker-sorting puzzles.
//!
//! A puzzle is a fixed set of beakers, each a column of sections holding a
//! liquid or empty space. A move pours liquid from one beaker into another;
//! after every move the game is re-classified as in play, won or lost.
//!
//! # Core Concepts
//!
//! - **Beaker**: Fixed-capacity container with derived predicates
//! - **Transfer**: Pure pour algorithm over a pair of beakers
//! - **Game**: Owns the beakers and keeps its state in sync after each move
//!
//! # Example
//!
//! ```rust
//! use liquid_sort::{game, GameState};
//!
//! let mut game = game![[0, 1, 2], [0, 1, 3], [0, 0, 0]].unwrap();
//! assert_eq!(game.state(), GameState::Play);
//!
//! // Pour the top of the first beaker into the last one.
//! game.make_move(0, -1).unwrap();
//! assert_eq!(game.to_string(), "[[0, 0, 2], [0, 1, 3], [0, 0, 1]]");
//! ```

pub mod builder;
pub mod core;
pub mod game;
pub mod transfer;

// Re-export commonly used types
pub use builder::{BuildError, GameBuilder};
pub use core::{Beaker, GameState, InvalidBeaker, Liquid, State, TopLiquid};
pub use game::{Game, GameError};
pub use transfer::{is_miscible, transfer};
