use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::{sort_combinations, BacktrackingEnumerator, DynamicProgrammingEnumerator};
use crate::domain::{validate_target, Combination, Denominations};
use crate::error::Result;

/// Enumeration algorithm selector
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case", try_from = "AlgorithmRepr")]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    /// Depth-first search over counts, one denomination per level
    #[default]
    #[strum(to_string = "backtracking", serialize = "bt", serialize = "1")]
    Backtracking,
    /// Bottom-up table of combination sets per amount
    #[strum(to_string = "dynamic_programming", serialize = "dp", serialize = "2")]
    DynamicProgramming,
}

/// Accepted config forms: a name or menu number, as a string or a bare integer
///
/// Environment providers hand `2` over as an integer, so both shapes go
/// through the same `FromStr` lookup.
#[derive(Deserialize)]
#[serde(untagged)]
enum AlgorithmRepr {
    Choice(u64),
    Name(String),
}

impl TryFrom<AlgorithmRepr> for Algorithm {
    type Error = strum::ParseError;

    fn try_from(repr: AlgorithmRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            AlgorithmRepr::Choice(choice) => choice.to_string().parse(),
            AlgorithmRepr::Name(name) => name.parse(),
        }
    }
}

impl Algorithm {
    /// Map an answer to the console menu: `2` selects DP, anything else backtracking
    pub fn from_menu_choice(choice: &str) -> Self {
        if choice.trim() == "2" {
            Algorithm::DynamicProgramming
        } else {
            Algorithm::Backtracking
        }
    }

    /// Human readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Backtracking => "Backtracking",
            Algorithm::DynamicProgramming => "Dynamic Programming",
        }
    }

    /// The alternative algorithm, used for cross-checking
    pub fn other(&self) -> Self {
        match self {
            Algorithm::Backtracking => Algorithm::DynamicProgramming,
            Algorithm::DynamicProgramming => Algorithm::Backtracking,
        }
    }

    /// Documented cost profile of the algorithm
    pub fn complexity_note(&self) -> &'static str {
        match self {
            Algorithm::Backtracking => {
                "time O(k^m) for m denominations and at most k notes of each; \
                 space O(m) for the recursion. Simple and fast for small amounts."
            }
            Algorithm::DynamicProgramming => {
                "time O(target * m * c) where c is the average set size per amount \
                 (duplicate checking); space O(target * c). Reuses subproblems."
            }
        }
    }
}

/// Duplicate detection used when the DP table appends to an amount's set
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DedupStrategy {
    /// Pairwise equality scan against every entry already in the set
    #[default]
    Scan,
    /// Hash index of count vectors per amount
    Hashed,
}

/// A way of enumerating every combination that makes up a target amount
///
/// Implementations return the combinations in their own construction order;
/// [`CombinationEnumerator`] applies the canonical display order. A strategy
/// may refuse a target it cannot handle with
/// [`InvalidTarget`](crate::error::EnumerationError::InvalidTarget).
pub trait EnumerationStrategy: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn enumerate(&self, denominations: &Denominations, target: u64) -> Result<Vec<Combination>>;
}

/// Runs a strategy over raw inputs and sorts the result for display
pub struct CombinationEnumerator {
    pub strategy: Box<dyn EnumerationStrategy>,
}

impl CombinationEnumerator {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_dedup(algorithm, DedupStrategy::default())
    }

    /// Select an algorithm, passing the dedup strategy through to DP
    pub fn with_dedup(algorithm: Algorithm, dedup: DedupStrategy) -> Self {
        let strategy: Box<dyn EnumerationStrategy> = match algorithm {
            Algorithm::Backtracking => Box::new(BacktrackingEnumerator),
            Algorithm::DynamicProgramming => Box::new(DynamicProgrammingEnumerator::new(dedup)),
        };
        Self { strategy }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.strategy.algorithm()
    }

    /// Validate inputs, enumerate and sort
    pub fn enumerate(&self, denominations: &[i64], target: i64) -> Result<Vec<Combination>> {
        let denominations = Denominations::new(denominations)?;
        let target = validate_target(target)?;
        self.enumerate_validated(&denominations, target)
    }

    /// Enumerate already validated inputs and sort
    pub fn enumerate_validated(
        &self,
        denominations: &Denominations,
        target: u64,
    ) -> Result<Vec<Combination>> {
        let mut combinations = self.strategy.enumerate(denominations, target)?;
        sort_combinations(&mut combinations);
        Ok(combinations)
    }
}
