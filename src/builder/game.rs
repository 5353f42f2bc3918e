//! Builder for constructing games.

use crate::builder::error::BuildError;
use crate::core::Beaker;
use crate::game::Game;

/// Builder for constructing games with a fluent API.
///
/// Beakers are validated when the game is built, so a malformed layout is
/// reported with its position in the collection.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    beakers: Vec<Vec<i64>>,
}

impl GameBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a beaker from its sections, top first.
    pub fn beaker<I>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.beakers.push(sections.into_iter().collect());
        self
    }

    /// Add a pre-built beaker.
    pub fn add_beaker(mut self, beaker: Beaker) -> Self {
        self.beakers
            .push(beaker.sections().iter().map(|&liquid| i64::from(liquid)).collect());
        self
    }

    /// Add multiple pre-built beakers at once.
    pub fn beakers(self, beakers: impl IntoIterator<Item = Beaker>) -> Self {
        beakers.into_iter().fold(self, Self::add_beaker)
    }

    /// Build the game.
    /// Returns an error for an empty collection or the first malformed beaker.
    pub fn build(self) -> Result<Game, BuildError> {
        if self.beakers.is_empty() {
            return Err(BuildError::NoBeakers);
        }

        let beakers = self
            .beakers
            .into_iter()
            .enumerate()
            .map(|(index, sections)| {
                Beaker::from_signed(sections)
                    .map_err(|source| BuildError::InvalidBeaker { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Game::new(beakers)?)
    }
}
