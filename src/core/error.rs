//! Beaker construction errors.

use thiserror::Error;

/// A single reason a sequence of sections cannot form a beaker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SectionViolation {
    #[error("Beaker has no sections")]
    ZeroCapacity,

    #[error("Section {index} holds negative value {value}")]
    NegativeSection { index: usize, value: i64 },

    #[error("Section {index} value {value} exceeds the liquid identifier range")]
    OutOfRange { index: usize, value: i64 },

    #[error("Section {index} is empty but sits below liquid")]
    Gap { index: usize },
}

/// Every violation found while validating a beaker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid beaker: {}", join(.violations))]
pub struct InvalidBeaker {
    pub violations: Vec<SectionViolation>,
}

fn join(violations: &[SectionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
