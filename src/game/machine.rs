//! The game: a beaker collection and the state derived from it.

use super::classifier::classify;
use super::error::GameError;
use crate::core::{Beaker, GameState, State};
use crate::transfer::transfer;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument};

/// A liquid-sorting game.
///
/// The state is recomputed after every move and is never stale. Once the
/// game is won or lost, moves leave it untouched.
///
/// # Example
///
/// ```rust
/// use liquid_sort::{Beaker, Game, GameState};
///
/// let mut game = Game::new(vec![
///     Beaker::new(vec![0, 1]).unwrap(),
///     Beaker::new(vec![0, 1]).unwrap(),
///     Beaker::new(vec![0, 0]).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(game.state(), GameState::Play);
/// assert_eq!(game.make_move(0, 1).unwrap(), GameState::Won);
/// assert_eq!(game.to_string(), "[[0, 0], [1, 1], [0, 0]]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    beakers: Vec<Beaker>,
    state: GameState,
}

impl Game {
    /// Create a game and classify its starting position.
    pub fn new(beakers: Vec<Beaker>) -> Result<Self, GameError> {
        if beakers.is_empty() {
            return Err(GameError::NoBeakers);
        }

        let state = classify(&beakers);
        debug!(%state, beakers = beakers.len(), "game created");
        Ok(Self { beakers, state })
    }

    /// Get current state (pure)
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if the game is over (pure)
    pub fn is_final(&self) -> bool {
        self.state.is_final()
    }

    pub fn beakers(&self) -> &[Beaker] {
        &self.beakers
    }

    pub fn beaker_count(&self) -> usize {
        self.beakers.len()
    }

    /// Look up a beaker. Negative indices count back from the end.
    pub fn beaker(&self, index: isize) -> Result<&Beaker, GameError> {
        let index = self.resolve_index(index)?;
        Ok(&self.beakers[index])
    }

    /// Map a possibly negative index onto a position in the collection.
    ///
    /// `-1` addresses the last beaker. Anything outside `[-n, n - 1]` fails.
    pub fn resolve_index(&self, index: isize) -> Result<usize, GameError> {
        let len = self.beakers.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };

        resolved
            .filter(|&position| position < len)
            .ok_or(GameError::InvalidIndex { index, len })
    }

    /// Pour from one beaker into another and re-derive the game state.
    ///
    /// In a final state this is a no-op that returns the stored state
    /// without looking at the indices. Pouring a beaker into itself is also
    /// a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn make_move(
        &mut self,
        source: isize,
        destination: isize,
    ) -> Result<GameState, GameError> {
        if self.is_final() {
            debug!("game is over, move ignored");
            return Ok(self.state);
        }

        let source = self.resolve_index(source)?;
        let destination = self.resolve_index(destination)?;

        if source == destination {
            debug!(source, "source and destination are the same beaker");
            return Ok(self.state);
        }

        let (from, to) = pair_mut(&mut self.beakers, source, destination);
        let moved = transfer(from, to);

        let previous = self.state;
        self.state = classify(&self.beakers);
        debug!(moved, state = %self.state, "move applied");

        if self.state != previous {
            info!(from = %previous, to = %self.state, "game state changed");
        }

        Ok(self.state)
    }
}

/// Borrow two distinct beakers mutably at once.
fn pair_mut(beakers: &mut [Beaker], first: usize, second: usize) -> (&mut Beaker, &mut Beaker) {
    if first < second {
        let (head, tail) = beakers.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = beakers.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, beaker) in self.beakers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{beaker}")?;
        }
        write!(f, "]")
    }
}
