use std::collections::HashSet;
use tracing::debug;

use super::{Algorithm, DedupStrategy, EnumerationStrategy};
use crate::domain::{common_divisor, validate_target, Combination, Denominations};
use crate::error::{EnumerationError, Result};

/// Upper bound on the number of amount slots in one table
pub const MAX_TABLE_SLOTS: usize = 1 << 24;

/// Bottom-up enumerator over a table of combination sets, one per amount
///
/// Amount 0 is seeded with the all-zero combination. Denominations are
/// processed smallest first; for each denomination `d` the amounts are walked
/// upwards from `d`, and every combination of `a - d` is extended by one note
/// of `d` into the set of `a`. Because the walk is ascending, the set of
/// `a - d` has already received this pass's additions when it is read, which
/// is what lets a pass add more than one note of the same denomination.
///
/// Only multiples of the denominations' common divisor can be reached, so the
/// table is indexed by `amount / gcd`. A table that would still need more than
/// [`MAX_TABLE_SLOTS`] slots, or that cannot be allocated, is reported as
/// [`EnumerationError::InvalidTarget`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicProgrammingEnumerator {
    pub dedup: DedupStrategy,
}

impl DynamicProgrammingEnumerator {
    pub fn new(dedup: DedupStrategy) -> Self {
        Self { dedup }
    }
}

/// Combination set for a single amount
struct AmountSet {
    entries: Vec<Combination>,
    index: Option<HashSet<Vec<u64>>>,
}

impl AmountSet {
    fn new(dedup: DedupStrategy) -> Self {
        let index = match dedup {
            DedupStrategy::Scan => None,
            DedupStrategy::Hashed => Some(HashSet::new()),
        };
        Self {
            entries: Vec::new(),
            index,
        }
    }

    /// Append unless an equal combination is already present
    fn insert(&mut self, candidate: Combination) -> bool {
        let duplicate = match &mut self.index {
            None => self.entries.iter().any(|existing| *existing == candidate),
            Some(index) => !index.insert(candidate.counts().to_vec()),
        };
        if duplicate {
            return false;
        }
        self.entries.push(candidate);
        true
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl EnumerationStrategy for DynamicProgrammingEnumerator {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DynamicProgramming
    }

    fn enumerate(&self, denominations: &Denominations, target: u64) -> Result<Vec<Combination>> {
        let Some(step) = common_divisor(denominations) else {
            // No notes: only the zero amount is reachable
            return Ok(if target == 0 {
                vec![Combination::zero(denominations)]
            } else {
                Vec::new()
            });
        };
        if target % step != 0 {
            debug!(target, step, "target is not a multiple of the common divisor");
            return Ok(Vec::new());
        }

        let n = table_slots(target, step)?;
        let mut table: Vec<AmountSet> = Vec::new();
        table
            .try_reserve_exact(n + 1)
            .map_err(|_| too_large(target, "not enough memory for the DP table"))?;
        table.extend((0..=n).map(|_| AmountSet::new(self.dedup)));
        table[0].insert(Combination::zero(denominations));

        let mut candidates = 0u64;
        let mut rejected = 0u64;

        for position in denominations.ascending_positions() {
            let denomination = denominations.value_at(position);
            if denomination > target {
                continue;
            }
            // Bounded by n, which fits in usize
            let d = (denomination / step) as usize;

            for slot in d..=n {
                // Source slot is strictly smaller, so split the table there
                let (lower, upper) = table.split_at_mut(slot);
                let source = &lower[slot - d];
                let destination = &mut upper[0];

                for combination in &source.entries {
                    candidates += 1;
                    if !destination.insert(combination.incremented(position)) {
                        rejected += 1;
                    }
                }
            }
        }

        let answer = table.swap_remove(n);
        debug!(
            target,
            step,
            slots = n + 1,
            dedup = %self.dedup,
            candidates,
            duplicates_rejected = rejected,
            found = answer.len(),
            "dp table built"
        );
        Ok(answer.entries)
    }
}

/// Index of the target slot, or an error if the table would exceed the cap
fn table_slots(target: u64, step: u64) -> Result<usize> {
    usize::try_from(target / step)
        .ok()
        .filter(|&n| n < MAX_TABLE_SLOTS)
        .ok_or_else(|| too_large(target, "amount needs more DP table slots than allowed"))
}

fn too_large(target: u64, reason: &'static str) -> EnumerationError {
    EnumerationError::InvalidTarget {
        target: i64::try_from(target).unwrap_or(i64::MAX),
        reason,
    }
}

/// Enumerate every combination with the DP table, in construction order
pub fn enumerate_dp(denominations: &[i64], target: i64) -> Result<Vec<Combination>> {
    enumerate_dp_with(denominations, target, DedupStrategy::default())
}

/// Same as [`enumerate_dp`] with an explicit duplicate check
pub fn enumerate_dp_with(
    denominations: &[i64],
    target: i64,
    dedup: DedupStrategy,
) -> Result<Vec<Combination>> {
    let denominations = Denominations::new(denominations)?;
    let target = validate_target(target)?;
    DynamicProgrammingEnumerator::new(dedup).enumerate(&denominations, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn counts(combinations: &[Combination]) -> Vec<Vec<u64>> {
        combinations.iter().map(|c| c.counts().to_vec()).collect()
    }

    #[rstest]
    #[case(DedupStrategy::Scan)]
    #[case(DedupStrategy::Hashed)]
    fn test_construction_order(#[case] dedup: DedupStrategy) {
        // Counts are (100, 50, 10): the 10-only set is built first
        let found = enumerate_dp_with(&[10, 50, 100], 100, dedup).unwrap();
        assert_eq!(
            counts(&found),
            vec![vec![0, 0, 10], vec![0, 1, 5], vec![0, 2, 0], vec![1, 0, 0]]
        );
    }

    #[rstest]
    #[case(DedupStrategy::Scan)]
    #[case(DedupStrategy::Hashed)]
    fn test_multiple_notes_of_one_denomination_in_a_pass(#[case] dedup: DedupStrategy) {
        let found = enumerate_dp_with(&[10], 50, dedup).unwrap();
        assert_eq!(counts(&found), vec![vec![5]]);
    }

    #[test]
    fn test_zero_target_is_seed() {
        let found = enumerate_dp(&[10, 50, 100], 0).unwrap();
        assert_eq!(counts(&found), vec![vec![0, 0, 0]]);
    }

    #[test]
    fn test_denomination_larger_than_target_is_skipped() {
        let found = enumerate_dp(&[10, 50, 100], 30).unwrap();
        assert_eq!(counts(&found), vec![vec![0, 0, 3]]);
    }

    #[test]
    fn test_unreachable_and_empty() {
        assert!(enumerate_dp(&[50], 30).unwrap().is_empty());
        assert!(enumerate_dp(&[], 40).unwrap().is_empty());
        assert_eq!(enumerate_dp(&[], 0).unwrap().len(), 1);
    }

    #[test]
    fn test_amount_set_rejects_duplicates() {
        let denoms = Denominations::new(&[10, 50]).unwrap();
        let candidate = Combination::from_counts(&denoms, vec![1, 1]);

        for dedup in [DedupStrategy::Scan, DedupStrategy::Hashed] {
            let mut set = AmountSet::new(dedup);
            assert!(set.insert(candidate.clone()));
            assert!(!set.insert(candidate.clone()));
            assert!(set.insert(Combination::from_counts(&denoms, vec![0, 6])));
            assert_eq!(set.len(), 2);
        }
    }

    #[test]
    fn test_invalid_input() {
        assert!(enumerate_dp(&[10, 0], 10).is_err());
        assert!(enumerate_dp(&[10], -10).is_err());
    }

    #[test]
    fn test_huge_denominations_use_scaled_table() {
        let found = enumerate_dp(&[1 << 50], 1 << 51).unwrap();
        assert_eq!(counts(&found), vec![vec![2]]);
        let searched = crate::enumerator::enumerate_backtracking(&[1 << 50], 1 << 51).unwrap();
        assert_eq!(found, searched);

        let found = enumerate_dp(&[1 << 40, 1 << 41], 1 << 42).unwrap();
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_target_off_the_common_divisor_is_empty() {
        assert!(enumerate_dp(&[1 << 50], (1 << 50) + 10).unwrap().is_empty());
        assert!(enumerate_dp(&[10, 50, 100], 75).unwrap().is_empty());
    }

    #[test]
    fn test_table_too_large_is_invalid_target() {
        let target: i64 = 1 << 40;
        assert_eq!(
            enumerate_dp(&[1], target),
            Err(EnumerationError::InvalidTarget {
                target,
                reason: "amount needs more DP table slots than allowed",
            })
        );
        assert!(matches!(
            enumerate_dp(&[3, 7], i64::MAX - 1),
            Err(EnumerationError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_table_slots_bound() {
        assert_eq!(table_slots(980, 10).unwrap(), 98);
        let largest = (MAX_TABLE_SLOTS as u64 - 1) * 10;
        assert_eq!(table_slots(largest, 10).unwrap(), MAX_TABLE_SLOTS - 1);
        assert!(table_slots(MAX_TABLE_SLOTS as u64 * 10, 10).is_err());
    }
}
