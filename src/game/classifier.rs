//! Classification of a beaker collection into a game state.
//!
//! All functions here are pure: they inspect the beakers and never modify
//! them.

use crate::core::{Beaker, GameState};

/// Every beaker is either empty or solved.
pub fn is_won(beakers: &[Beaker]) -> bool {
    beakers
        .iter()
        .all(|beaker| beaker.is_empty() || beaker.is_solved())
}

/// Some move is still worth attempting.
///
/// True when two distinct beakers share a top liquid value and their
/// top-liquid indices sum to a positive number. The index stands in for the
/// free space above the liquid; an empty beaker reports `capacity - 1`
/// through the top-liquid sentinel. A single empty beaker on its own does
/// not count as a move, because its sentinel value `0` matches no liquid.
pub fn is_play(beakers: &[Beaker]) -> bool {
    let tops: Vec<_> = beakers.iter().map(Beaker::top_liquid).collect();

    tops.iter().enumerate().any(|(i, first)| {
        tops.iter().enumerate().any(|(j, second)| {
            i != j && first.liquid == second.liquid && first.index + second.index > 0
        })
    })
}

/// Not won and no move is available.
pub fn is_lost(beakers: &[Beaker]) -> bool {
    !is_won(beakers) && !is_play(beakers)
}

/// Derive the game state. A won position takes priority over open moves.
///
/// # Example
///
/// ```rust
/// use liquid_sort::game::classify;
/// use liquid_sort::{Beaker, GameState};
///
/// let beakers = vec![
///     Beaker::new(vec![0, 2, 1, 1]).unwrap(),
///     Beaker::new(vec![0, 3, 1, 1]).unwrap(),
///     Beaker::new(vec![0, 1, 1, 1]).unwrap(),
/// ];
///
/// assert_eq!(classify(&beakers), GameState::Lost);
/// ```
pub fn classify(beakers: &[Beaker]) -> GameState {
    if is_won(beakers) {
        GameState::Won
    } else if is_play(beakers) {
        GameState::Play
    } else {
        GameState::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beakers(rows: &[&[u32]]) -> Vec<Beaker> {
        rows.iter()
            .map(|row| Beaker::new(row.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn solved_and_empty_beakers_win() {
        let b = beakers(&[&[1, 1], &[0, 0], &[2, 2]]);

        assert!(is_won(&b));
        assert!(!is_lost(&b));
        assert_eq!(classify(&b), GameState::Won);
    }

    #[test]
    fn won_takes_priority_over_play() {
        // Two empty beakers satisfy the play check too.
        let b = beakers(&[&[0, 0], &[0, 0], &[3, 3]]);

        assert!(is_play(&b));
        assert_eq!(classify(&b), GameState::Won);
    }

    #[test]
    fn matching_tops_with_space_is_play() {
        let b = beakers(&[&[0, 1, 2], &[0, 1, 3], &[0, 0, 0]]);

        assert!(is_play(&b));
        assert_eq!(classify(&b), GameState::Play);
    }

    #[test]
    fn distinct_tops_are_lost() {
        let b = beakers(&[&[0, 2, 1, 1], &[0, 3, 1, 1], &[0, 1, 1, 1]]);

        assert!(!is_play(&b));
        assert!(is_lost(&b));
        assert_eq!(classify(&b), GameState::Lost);
    }

    #[test]
    fn lone_empty_beaker_does_not_open_a_move() {
        let b = beakers(&[&[0, 0, 1, 2], &[0, 2, 1, 1], &[0, 0, 0, 0]]);

        assert_eq!(classify(&b), GameState::Lost);
    }

    #[test]
    fn full_beakers_with_matching_tops_have_no_space() {
        let b = beakers(&[&[1, 2], &[1, 3]]);

        assert!(!is_play(&b));
        assert_eq!(classify(&b), GameState::Lost);
    }

    #[test]
    fn one_section_empty_beakers_have_no_space() {
        let b = beakers(&[&[0], &[0], &[1, 2]]);

        assert!(!is_play(&b));
    }

    #[test]
    fn beaker_never_pairs_with_itself() {
        let b = beakers(&[&[0, 1, 2], &[0, 3, 3]]);

        assert!(!is_play(&b));
    }
}
