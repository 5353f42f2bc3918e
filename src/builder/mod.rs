//! Builder API for ergonomic game construction.
//!
//! This module provides a fluent builder and macros for creating games
//! with minimal boilerplate while still validating every beaker.

pub mod error;
pub mod game;
pub mod macros;

pub use error::BuildError;
pub use game::GameBuilder;
