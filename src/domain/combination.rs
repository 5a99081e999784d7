use serde::{Serialize, Serializer};
use std::fmt;

use super::Denominations;

/// One assignment of a note count to every denomination of a set
///
/// Counts are stored by position in the descending order of the
/// [`Denominations`] the combination was built over. Zero counts are explicit.
/// Two combinations over the same set are equal iff every count is equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    denominations: Denominations,
    counts: Vec<u64>,
}

impl Combination {
    /// Combination with every count at zero (the only way to make amount 0)
    pub fn zero(denominations: &Denominations) -> Self {
        Self {
            denominations: denominations.clone(),
            counts: vec![0; denominations.len()],
        }
    }

    /// Build from a count vector aligned with the descending denomination order
    pub fn from_counts(denominations: &Denominations, counts: Vec<u64>) -> Self {
        assert_eq!(
            counts.len(),
            denominations.len(),
            "count vector must cover every denomination"
        );
        Self {
            denominations: denominations.clone(),
            counts,
        }
    }

    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }

    /// Counts in descending denomination order
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Count for a denomination value, `None` if the value is not in the set
    pub fn count_of(&self, denomination: u64) -> Option<u64> {
        self.denominations
            .position_of(denomination)
            .map(|position| self.counts[position])
    }

    /// `(denomination, count)` pairs, descending by denomination
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.denominations
            .values()
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
    }

    /// Pairs with a nonzero count, descending by denomination
    pub fn nonzero(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }

    /// Weighted sum of the combination
    pub fn total(&self) -> u64 {
        self.iter().map(|(denomination, count)| denomination * count).sum()
    }

    /// Number of notes dispensed
    pub fn note_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// New combination with one more note at `position`
    pub fn incremented(&self, position: usize) -> Self {
        let mut counts = self.counts.clone();
        counts[position] += 1;
        Self {
            denominations: self.denominations.clone(),
            counts,
        }
    }
}

impl fmt::Debug for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (denomination, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}x{}", count, denomination)?;
        }
        write!(f, "}}")
    }
}

/// Serialized as a denomination -> count map
impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
