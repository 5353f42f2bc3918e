//! Core value types and predicates.
//!
//! This module contains the pure core of the puzzle:
//! - Beakers and their derived predicates (full, empty, top liquid, solved)
//! - Game states via the `State` trait
//! - Construction errors
//!
//! Nothing in this module mutates shared state; beakers change only through
//! the transfer engine.

mod beaker;
mod error;
mod state;

pub use beaker::{Beaker, Liquid, TopLiquid, EMPTY};
pub use error::{InvalidBeaker, SectionViolation};
pub use state::{GameState, State};
