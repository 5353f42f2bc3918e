//! Guards that stop a pour before any liquid moves.

use crate::core::Beaker;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Reason a pour between two beakers cannot start.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum PourBlock {
    #[error("Destination beaker is full")]
    DestinationFull,

    #[error("Source beaker is empty")]
    SourceEmpty,

    #[error("Destination beaker is already solved")]
    DestinationSolved,

    #[error("Source beaker is already solved")]
    SourceSolved,
}

/// Evaluate every pour guard, accumulating ALL that fire.
///
/// Returns `Validation::Success(())` when a pour may proceed. A blocked pour
/// is not an error for callers of [`transfer`](super::transfer); it simply
/// leaves both beakers untouched.
///
/// # Example
///
/// ```rust
/// use liquid_sort::transfer::{check_pour, PourBlock};
/// use liquid_sort::Beaker;
/// use stillwater::validation::Validation;
///
/// let solved = Beaker::new(vec![1, 1, 1]).unwrap();
/// let empty = Beaker::new(vec![0, 0, 0]).unwrap();
///
/// match check_pour(&empty, &solved) {
///     Validation::Failure(blocks) => assert_eq!(blocks.len(), 3),
///     Validation::Success(_) => unreachable!(),
/// }
/// ```
pub fn check_pour(source: &Beaker, destination: &Beaker) -> Validation<(), NonEmptyVec<PourBlock>> {
    let guards = [
        (destination.is_full(), PourBlock::DestinationFull),
        (source.is_empty(), PourBlock::SourceEmpty),
        (destination.is_solved(), PourBlock::DestinationSolved),
        (source.is_solved(), PourBlock::SourceSolved),
    ];

    let checks: Vec<Validation<(), NonEmptyVec<PourBlock>>> = guards
        .into_iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, block)| Validation::fail(block))
        .collect();

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beaker(sections: &[u32]) -> Beaker {
        Beaker::new(sections.to_vec()).unwrap()
    }

    fn blocks(source: &Beaker, destination: &Beaker) -> Vec<PourBlock> {
        match check_pour(source, destination) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().copied().collect(),
        }
    }

    #[test]
    fn open_pour_passes_all_guards() {
        let result = check_pour(&beaker(&[0, 2, 1]), &beaker(&[0, 0, 2]));
        assert!(result.is_success());
    }

    #[test]
    fn full_destination_blocks() {
        let found = blocks(&beaker(&[0, 1, 1]), &beaker(&[1, 2, 2]));
        assert_eq!(found, vec![PourBlock::DestinationFull]);
    }

    #[test]
    fn empty_source_blocks() {
        let found = blocks(&beaker(&[0, 0, 0]), &beaker(&[0, 1, 1]));
        assert_eq!(found, vec![PourBlock::SourceEmpty]);
    }

    #[test]
    fn solved_source_blocks_even_into_empty() {
        let found = blocks(&beaker(&[1, 1, 1, 1]), &beaker(&[0, 0, 0, 0]));
        assert_eq!(found, vec![PourBlock::SourceSolved]);
    }

    #[test]
    fn solved_destination_reports_full_and_solved() {
        let found = blocks(&beaker(&[0, 0, 3]), &beaker(&[3, 3, 3]));
        assert_eq!(found.len(), 2);
        assert!(found.contains(&PourBlock::DestinationFull));
        assert!(found.contains(&PourBlock::DestinationSolved));
    }
}
