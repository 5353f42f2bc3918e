//! Game errors.

use thiserror::Error;

/// Errors that can occur when creating or playing a game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Beaker index {index} is out of range for {len} beakers")]
    InvalidIndex { index: isize, len: usize },

    #[error("A game needs at least one beaker")]
    NoBeakers,
}
