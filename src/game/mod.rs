//! Game orchestration and state classification.
//!
//! A [`Game`] owns the beakers and delegates each move to the transfer
//! engine, then re-derives its state with [`classify`]:
//!
//! ```text
//! Game::make_move(src, dst) -> transfer(src, dst) -> classify(beakers)
//! ```

mod classifier;
mod error;
mod machine;

pub use classifier::{classify, is_lost, is_play, is_won};
pub use error::GameError;
pub use machine::Game;
