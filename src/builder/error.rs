//! Build errors for games.

use crate::core::InvalidBeaker;
use crate::game::GameError;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No beakers defined. Add at least one beaker")]
    NoBeakers,

    #[error("Beaker {index} is malformed: {source}")]
    InvalidBeaker {
        index: usize,
        #[source]
        source: InvalidBeaker,
    },

    #[error(transparent)]
    Game(#[from] GameError),
}
