//! Liquid transfer between two beakers.
//!
//! The engine is a set of pure functions over an explicit pair of beakers.
//! It only relies on the beaker predicates from [`crate::core`]:
//!
//! - [`check_pour`] evaluates the guards that prevent a pour from starting
//! - [`is_miscible`] compares top liquids
//! - [`transfer`] runs the bounded pour loop in place

mod guards;
mod pour;

pub use guards::{check_pour, PourBlock};
pub use pour::{is_miscible, transfer};
