use tracing::debug;

use super::{Algorithm, EnumerationStrategy};
use crate::domain::{validate_target, Combination, Denominations};
use crate::error::Result;

/// Exhaustive depth-first enumerator
///
/// Fixes the count of one denomination per recursion level, largest
/// denomination first, and tries every count from zero up to what still fits
/// into the remaining amount. A combination is recorded as soon as the
/// remaining amount reaches zero; all deeper levels then hold a zero count.
/// Distinct paths always fix distinct count vectors, so no deduplication is
/// needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingEnumerator;

/// Mutable state of one search: the working count vector and the results
struct SearchContext<'a> {
    denominations: &'a Denominations,
    working: Vec<u64>,
    found: Vec<Combination>,
    nodes_visited: u64,
}

impl<'a> SearchContext<'a> {
    fn new(denominations: &'a Denominations) -> Self {
        Self {
            denominations,
            working: vec![0; denominations.len()],
            found: Vec::new(),
            nodes_visited: 0,
        }
    }

    fn search(&mut self, index: usize, remaining: u64) {
        self.nodes_visited += 1;

        if remaining == 0 {
            // Snapshot, the working vector keeps changing
            self.found
                .push(Combination::from_counts(self.denominations, self.working.clone()));
            return;
        }

        if index >= self.denominations.len() {
            return;
        }

        let denomination = self.denominations.value_at(index);
        let max_count = remaining / denomination;

        for count in 0..=max_count {
            self.working[index] = count;
            self.search(index + 1, remaining - count * denomination);
        }

        self.working[index] = 0;
    }
}

impl EnumerationStrategy for BacktrackingEnumerator {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Backtracking
    }

    fn enumerate(&self, denominations: &Denominations, target: u64) -> Result<Vec<Combination>> {
        let mut ctx = SearchContext::new(denominations);
        ctx.search(0, target);

        debug!(
            target,
            nodes_visited = ctx.nodes_visited,
            found = ctx.found.len(),
            "backtracking search finished"
        );

        Ok(ctx.found)
    }
}

/// Enumerate every combination by backtracking, in search order
pub fn enumerate_backtracking(denominations: &[i64], target: i64) -> Result<Vec<Combination>> {
    let denominations = Denominations::new(denominations)?;
    let target = validate_target(target)?;
    BacktrackingEnumerator.enumerate(&denominations, target)
}
