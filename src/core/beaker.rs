//! Beaker value type and its derived predicates.
//!
//! A beaker is a fixed-length column of sections. Index 0 is the top, where
//! liquid is poured in and out; the last index is the bottom. A section
//! holding `0` is empty space, any positive value identifies a liquid.

use super::error::{InvalidBeaker, SectionViolation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Identifier of a liquid type. `0` marks an empty section.
pub type Liquid = u32;

/// Value marking an empty section.
pub const EMPTY: Liquid = 0;

/// Position and type of the topmost liquid in a beaker.
///
/// For an empty beaker this is the sentinel `(capacity - 1, 0)`: the index
/// refers to the bottom slot, which is where the next pour lands. The index
/// doubles as the number of empty sections above the liquid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopLiquid {
    pub index: usize,
    pub liquid: Liquid,
}

/// A fixed-capacity container of liquid sections.
///
/// Sections are liquid-contiguous: once a liquid is found scanning from the
/// top, every section below it holds liquid too. Construction rejects any
/// layout that breaks this, and only the transfer engine mutates a beaker
/// afterwards.
///
/// # Example
///
/// ```rust
/// use liquid_sort::Beaker;
///
/// let beaker = Beaker::new(vec![0, 2, 1, 1]).unwrap();
///
/// assert_eq!(beaker.capacity(), 4);
/// assert!(!beaker.is_full());
/// assert!(!beaker.is_empty());
/// assert_eq!(beaker.top_liquid().index, 1);
/// assert_eq!(beaker.top_liquid().liquid, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<Liquid>")]
pub struct Beaker {
    sections: Vec<Liquid>,
}

impl Beaker {
    /// Create a beaker from its sections, top first.
    pub fn new(sections: Vec<Liquid>) -> Result<Self, InvalidBeaker> {
        into_result(Self::validate_iter(
            sections.iter().map(|&liquid| i64::from(liquid)),
        ))?;
        Ok(Self { sections })
    }

    /// Create a beaker from signed input, reporting negative sections.
    ///
    /// ```rust
    /// use liquid_sort::Beaker;
    ///
    /// assert!(Beaker::from_signed([0, 3, 3]).is_ok());
    /// assert!(Beaker::from_signed([0, -3, 3]).is_err());
    /// ```
    pub fn from_signed<I>(sections: I) -> Result<Self, InvalidBeaker>
    where
        I: IntoIterator<Item = i64>,
    {
        let raw: Vec<i64> = sections.into_iter().collect();
        into_result(Self::validate(&raw))?;

        let sections = raw
            .into_iter()
            .map(|value| Liquid::try_from(value).unwrap_or(EMPTY))
            .collect();
        Ok(Self { sections })
    }

    /// Check a section layout, accumulating ALL violations.
    pub fn validate(sections: &[i64]) -> Validation<(), NonEmptyVec<SectionViolation>> {
        Self::validate_iter(sections.iter().copied())
    }

    fn validate_iter<I>(sections: I) -> Validation<(), NonEmptyVec<SectionViolation>>
    where
        I: Iterator<Item = i64>,
    {
        let mut checks: Vec<Validation<(), NonEmptyVec<SectionViolation>>> = Vec::new();
        let mut capacity = 0;
        let mut below_liquid = false;

        for (index, value) in sections.enumerate() {
            capacity += 1;

            if value < 0 {
                checks.push(Validation::fail(SectionViolation::NegativeSection {
                    index,
                    value,
                }));
            } else if value > i64::from(Liquid::MAX) {
                checks.push(Validation::fail(SectionViolation::OutOfRange {
                    index,
                    value,
                }));
            }

            if value != 0 {
                below_liquid = true;
            } else if below_liquid {
                checks.push(Validation::fail(SectionViolation::Gap { index }));
            }
        }

        if capacity == 0 {
            checks.push(Validation::fail(SectionViolation::ZeroCapacity));
        }

        if checks.is_empty() {
            return Validation::success(());
        }
        Validation::all_vec(checks).map(|_| ())
    }

    /// Number of sections. Fixed for the lifetime of the beaker.
    pub fn capacity(&self) -> usize {
        self.sections.len()
    }

    /// Sections from top to bottom.
    pub fn sections(&self) -> &[Liquid] {
        &self.sections
    }

    /// Top section occupied, nothing more can be poured in.
    pub fn is_full(&self) -> bool {
        self.sections[0] != EMPTY
    }

    /// Bottom section empty, so by contiguity the whole beaker is.
    pub fn is_empty(&self) -> bool {
        self.sections[self.capacity() - 1] == EMPTY
    }

    /// First non-empty section scanning from the top.
    ///
    /// Returns the `(capacity - 1, 0)` sentinel for an empty beaker.
    pub fn top_liquid(&self) -> TopLiquid {
        self.sections
            .iter()
            .position(|&liquid| liquid != EMPTY)
            .map(|index| TopLiquid {
                index,
                liquid: self.sections[index],
            })
            .unwrap_or(TopLiquid {
                index: self.capacity() - 1,
                liquid: EMPTY,
            })
    }

    /// Full and holding a single liquid type throughout.
    pub fn is_solved(&self) -> bool {
        if self.is_empty() || !self.is_full() {
            return false;
        }

        let top = self.top_liquid().liquid;
        self.sections.iter().all(|&liquid| liquid == top)
    }

    /// Count of sections holding liquid.
    pub fn liquid_units(&self) -> usize {
        self.sections.iter().filter(|&&liquid| liquid != EMPTY).count()
    }

    /// Count of empty sections.
    pub fn free_space(&self) -> usize {
        self.capacity() - self.liquid_units()
    }

    pub(crate) fn set_section(&mut self, index: usize, liquid: Liquid) {
        self.sections[index] = liquid;
    }
}

fn into_result(
    validation: Validation<(), NonEmptyVec<SectionViolation>>,
) -> Result<(), InvalidBeaker> {
    match validation {
        Validation::Success(()) => Ok(()),
        Validation::Failure(violations) => Err(InvalidBeaker {
            violations: violations.iter().cloned().collect(),
        }),
    }
}

impl TryFrom<Vec<i64>> for Beaker {
    type Error = InvalidBeaker;

    fn try_from(sections: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_signed(sections)
    }
}

impl From<Beaker> for Vec<Liquid> {
    fn from(beaker: Beaker) -> Self {
        beaker.sections
    }
}

impl Index<usize> for Beaker {
    type Output = Liquid;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sections[index]
    }
}

impl fmt::Display for Beaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, liquid) in self.sections.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{liquid}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beaker(sections: &[Liquid]) -> Beaker {
        Beaker::new(sections.to_vec()).unwrap()
    }

    #[test]
    fn partially_filled_beaker_predicates() {
        let b = beaker(&[0, 2, 1, 1]);

        assert_eq!(b.top_liquid(), TopLiquid { index: 1, liquid: 2 });
        assert!(!b.is_full());
        assert!(!b.is_empty());
        assert!(!b.is_solved());
    }

    #[test]
    fn empty_beaker_reports_bottom_sentinel() {
        let b = beaker(&[0, 0, 0, 0]);

        assert!(b.is_empty());
        assert!(!b.is_full());
        assert_eq!(b.top_liquid(), TopLiquid { index: 3, liquid: 0 });
    }

    #[test]
    fn single_section_empty_beaker_sentinel_is_zero() {
        let b = beaker(&[0]);

        assert!(b.is_empty());
        assert_eq!(b.top_liquid(), TopLiquid { index: 0, liquid: 0 });
    }

    #[test]
    fn full_uniform_beaker_is_solved() {
        let b = beaker(&[3, 3, 3]);

        assert!(b.is_full());
        assert!(b.is_solved());
        assert_eq!(b.top_liquid(), TopLiquid { index: 0, liquid: 3 });
    }

    #[test]
    fn full_mixed_beaker_is_not_solved() {
        assert!(!beaker(&[1, 1, 2]).is_solved());
    }

    #[test]
    fn uniform_but_not_full_is_not_solved() {
        assert!(!beaker(&[0, 1, 1]).is_solved());
    }

    #[test]
    fn liquid_units_and_free_space() {
        let b = beaker(&[0, 0, 4, 1]);

        assert_eq!(b.liquid_units(), 2);
        assert_eq!(b.free_space(), 2);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = Beaker::new(Vec::new()).unwrap_err();
        assert_eq!(err.violations, vec![SectionViolation::ZeroCapacity]);
    }

    #[test]
    fn gap_below_liquid_is_rejected() {
        let err = Beaker::new(vec![0, 1, 0, 2]).unwrap_err();
        assert_eq!(err.violations, vec![SectionViolation::Gap { index: 2 }]);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let result = Beaker::validate(&[-1, 0, 2, -5]);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SectionViolation::Gap { index: 1 })));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    SectionViolation::NegativeSection { index: 3, value: -5 }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn from_signed_accepts_valid_layout() {
        let b = Beaker::from_signed([0, 2, 1, 1]).unwrap();
        assert_eq!(b, beaker(&[0, 2, 1, 1]));
    }

    #[test]
    fn indexing_reads_sections() {
        let b = beaker(&[0, 5, 6]);
        assert_eq!(b[0], 0);
        assert_eq!(b[2], 6);
    }

    #[test]
    fn display_renders_list() {
        assert_eq!(beaker(&[0, 2, 1, 1]).to_string(), "[0, 2, 1, 1]");
    }

    #[test]
    fn serializes_as_plain_array() {
        let b = beaker(&[0, 2, 1]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[0,2,1]");

        let back: Beaker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn deserialization_revalidates() {
        assert!(serde_json::from_str::<Beaker>("[1,0]").is_err());
        assert!(serde_json::from_str::<Beaker>("[0,-2]").is_err());
        assert!(serde_json::from_str::<Beaker>("[0,4294967296]").is_err());
    }
}
