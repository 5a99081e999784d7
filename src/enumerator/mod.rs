//! Combination Enumerators
//!
//! Two independent strategies produce the same set of combinations:
//! - Backtracking: depth-first search over denomination counts
//! - DP: bottom-up table of combination sets per amount
//!
//! Results are put into display order by [`sort_combinations`].

pub mod backtracking;
pub mod dp;
pub mod ordering;
pub mod types;

pub use backtracking::*;
pub use dp::*;
pub use ordering::*;
pub use types::*;

use crate::domain::Combination;
use crate::error::Result;

/// Enumerate with the selected algorithm and return the sorted combinations
pub fn enumerate(denominations: &[i64], target: i64, algorithm: Algorithm) -> Result<Vec<Combination>> {
    CombinationEnumerator::new(algorithm).enumerate(denominations, target)
}
