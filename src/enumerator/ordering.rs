use std::cmp::Ordering;

use crate::domain::Combination;

/// Display order of combinations
///
/// Counts are compared denomination by denomination, largest denomination
/// first. The first differing count decides and the combination holding
/// *more* of that denomination sorts first. Both combinations must be built
/// over the same denomination set.
pub fn compare_combinations(a: &Combination, b: &Combination) -> Ordering {
    debug_assert_eq!(a.denominations(), b.denominations());

    for (count_a, count_b) in a.counts().iter().zip(b.counts()) {
        match count_b.cmp(count_a) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}

/// Sort into display order (stable, idempotent)
pub fn sort_combinations(combinations: &mut [Combination]) {
    combinations.sort_by(compare_combinations);
}
