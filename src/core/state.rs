//! Game states and the State trait they implement.
//!
//! States provide pure methods for inspecting their properties without
//! side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use liquid_sort::{GameState, State};
///
/// assert_eq!(GameState::Play.name(), "Play");
/// assert!(!GameState::Play.is_final());
/// assert!(GameState::Won.is_final());
/// assert!(GameState::Lost.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No transitions leave a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Overall state of a game, derived from its beakers after every move.
    #[derive(Copy, Eq, Hash)]
    pub enum GameState {
        /// At least one move is still available.
        Play,
        /// Every beaker is empty or solved.
        Won,
        /// Not won and no move is available.
        Lost,
    }
    final: [Won, Lost]
    error: [Lost]
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Play => "PLAY",
            Self::Won => "WON",
            Self::Lost => "LOST",
        };
        f.write_str(label)
    }
}
