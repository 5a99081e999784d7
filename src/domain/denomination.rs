use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::{EnumerationError, Result};

/// Validated set of note/coin denominations
///
/// Values are distinct, positive and kept in strictly descending order. The
/// position of a value in this order is the index used by every
/// [`Combination`](super::Combination) built over the set. Cloning is cheap;
/// all combinations of one enumeration share the same backing slice.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Denominations(Arc<[u64]>);

impl Denominations {
    /// Validate raw denomination values
    ///
    /// Rejects any value `<= 0`. Duplicates are dropped.
    pub fn new(values: &[i64]) -> Result<Self> {
        let mut validated = Vec::with_capacity(values.len());
        for &value in values {
            if value <= 0 {
                return Err(EnumerationError::InvalidDenomination { value });
            }
            validated.push(value as u64);
        }

        validated.sort_unstable_by(|a, b| b.cmp(a));
        let before = validated.len();
        validated.dedup();
        if validated.len() != before {
            debug!(
                dropped = before - validated.len(),
                "duplicate denominations removed"
            );
        }

        Ok(Self(validated.into()))
    }

    /// Values in descending order
    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the value at a position of the descending order
    pub fn value_at(&self, position: usize) -> u64 {
        self.0[position]
    }

    /// Find the position of a denomination value
    pub fn position_of(&self, denomination: u64) -> Option<usize> {
        // Descending order, so compare reversed
        self.0
            .binary_search_by(|probe| denomination.cmp(probe))
            .ok()
    }

    /// Positions ordered by ascending denomination value
    pub fn ascending_positions(&self) -> impl Iterator<Item = usize> {
        (0..self.0.len()).rev()
    }

    /// Smallest denomination, if any
    pub fn smallest(&self) -> Option<u64> {
        self.0.last().copied()
    }
}

impl fmt::Debug for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Denominations {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Validate a raw target amount (must be non-negative)
///
/// Table-size limits are strategy specific and checked by the DP enumerator.
pub fn validate_target(target: i64) -> Result<u64> {
    if target < 0 {
        return Err(EnumerationError::InvalidTarget {
            target,
            reason: "amount must not be negative",
        });
    }
    Ok(target as u64)
}

/// Greatest common divisor of all denominations, `None` for an empty set
pub fn common_divisor(denominations: &Denominations) -> Option<u64> {
    denominations.values().iter().copied().reduce(|mut a, mut b| {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending_and_deduplicated() {
        let denoms = Denominations::new(&[10, 100, 50, 10]).unwrap();
        assert_eq!(denoms.values(), &[100, 50, 10]);
        assert_eq!(denoms.len(), 3);
        assert_eq!(denoms.smallest(), Some(10));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            Denominations::new(&[10, 0, 50]),
            Err(EnumerationError::InvalidDenomination { value: 0 })
        );
        assert_eq!(
            Denominations::new(&[-5]),
            Err(EnumerationError::InvalidDenomination { value: -5 })
        );
    }

    #[test]
    fn test_empty_set_is_valid() {
        let denoms = Denominations::new(&[]).unwrap();
        assert!(denoms.is_empty());
        assert_eq!(denoms.smallest(), None);
    }

    #[test]
    fn test_positions() {
        let denoms = Denominations::new(&[10, 50, 100]).unwrap();
        assert_eq!(denoms.position_of(100), Some(0));
        assert_eq!(denoms.position_of(50), Some(1));
        assert_eq!(denoms.position_of(10), Some(2));
        assert_eq!(denoms.position_of(20), None);
        assert_eq!(denoms.ascending_positions().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(denoms.value_at(1), 50);
    }

    #[test]
    fn test_display() {
        let denoms = Denominations::new(&[10, 50, 100]).unwrap();
        assert_eq!(denoms.to_string(), "{100, 50, 10}");
    }

    #[test]
    fn test_validate_target() {
        assert_eq!(validate_target(0), Ok(0));
        assert_eq!(validate_target(980), Ok(980));
        assert_eq!(validate_target(i64::MAX), Ok(i64::MAX as u64));
        assert!(matches!(
            validate_target(-1),
            Err(EnumerationError::InvalidTarget { target: -1, .. })
        ));
    }

    #[test]
    fn test_common_divisor() {
        let denoms = Denominations::new(&[10, 50, 100]).unwrap();
        assert_eq!(common_divisor(&denoms), Some(10));
        let denoms = Denominations::new(&[6, 10, 15]).unwrap();
        assert_eq!(common_divisor(&denoms), Some(1));
        let denoms = Denominations::new(&[1 << 50]).unwrap();
        assert_eq!(common_divisor(&denoms), Some(1 << 50));
        assert_eq!(common_divisor(&Denominations::new(&[]).unwrap()), None);
    }
}
