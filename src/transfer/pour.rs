//! The pour algorithm.

use super::guards::{check_pour, PourBlock};
use crate::core::{Beaker, EMPTY};
use stillwater::validation::Validation;
use tracing::{debug, instrument, trace};

/// Check whether the top liquids of two beakers match.
///
/// This is a raw comparison: two empty beakers both report the `0` sentinel
/// and count as miscible. Pouring into an empty destination is always
/// allowed and is gated separately by [`transfer`].
pub fn is_miscible(source: &Beaker, destination: &Beaker) -> bool {
    source.top_liquid().liquid == destination.top_liquid().liquid
}

/// Pour as much same-type liquid as is reachable from the top of `source`
/// into `destination`, one unit at a time.
///
/// Pouring stops when a guard fires (see [`check_pour`]) or the tops stop
/// matching. Returns the number of units moved; `0` means both beakers are
/// unchanged.
///
/// # Example
///
/// ```rust
/// use liquid_sort::{transfer, Beaker};
///
/// let mut source = Beaker::new(vec![0, 1, 1, 2]).unwrap();
/// let mut destination = Beaker::new(vec![0, 0, 1, 2]).unwrap();
///
/// assert_eq!(transfer(&mut source, &mut destination), 2);
/// assert_eq!(source.sections(), &[0, 0, 0, 2]);
/// assert_eq!(destination.sections(), &[1, 1, 1, 2]);
/// ```
#[instrument(level = "debug", skip_all, fields(source = %source, destination = %destination))]
pub fn transfer(source: &mut Beaker, destination: &mut Beaker) -> usize {
    // Every step moves one unit, so neither capacity can be exceeded.
    let bound = source.capacity().min(destination.capacity());
    let mut moved = 0;

    for _ in 0..bound {
        if let Validation::Failure(blocks) = check_pour(source, destination) {
            let blocks: Vec<PourBlock> = blocks.iter().copied().collect();
            debug!(?blocks, moved, "pour stopped by guard");
            break;
        }

        let destination_was_empty = destination.is_empty();
        if !(destination_was_empty || is_miscible(source, destination)) {
            debug!(moved, "top liquids differ");
            break;
        }

        pour_unit(source, destination, destination_was_empty);
        moved += 1;

        if !is_miscible(source, destination) {
            break;
        }
    }

    moved
}

fn pour_unit(source: &mut Beaker, destination: &mut Beaker, destination_was_empty: bool) {
    let from = source.top_liquid();
    let to = destination.top_liquid();

    source.set_section(from.index, EMPTY);

    // An empty destination reports its bottom slot; otherwise stack above
    // the current top. The full-destination guard keeps `to.index >= 1` here.
    let target = if destination_was_empty {
        to.index
    } else {
        to.index - 1
    };
    destination.set_section(target, from.liquid);

    trace!(liquid = from.liquid, from = from.index, to = target, "poured unit");
}
