//! Amount sweep: enumerate a list of amounts with one algorithm and time each

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::config::{EnumerationConfig, OutputConfig};
use crate::domain::{validate_target, Combination, Denominations};
use crate::enumerator::{Algorithm, CombinationEnumerator};
use crate::presentation::render_lines;

/// Result of enumerating one amount
#[derive(Debug, Clone, Serialize)]
pub struct AmountReport {
    pub amount: u64,
    pub algorithm: Algorithm,
    pub combination_count: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub combinations: Vec<Combination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_check: Option<CrossCheck>,
}

/// Outcome of re-running an amount with the other algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrossCheck {
    pub algorithm: Algorithm,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub matched: bool,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

impl AmountReport {
    /// Console report: heading, numbered lines, timing and a rule
    pub fn render_text(&self, output: &OutputConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Possible combinations for {} {}:",
            self.amount, output.currency
        );
        for line in render_lines(&self.combinations, &output.render_options()) {
            let _ = writeln!(out, "{}", line);
        }
        if output.show_timing {
            let _ = writeln!(out, "Time elapsed: {} ms", self.elapsed.as_millis());
        }
        if let Some(check) = &self.cross_check {
            let _ = writeln!(
                out,
                "Cross-check ({}): {}",
                check.algorithm,
                if check.matched { "same set" } else { "MISMATCH" }
            );
        }
        out.push_str("--------------------------");
        out
    }
}

/// Set equality ignoring order
pub fn same_combination_set(a: &[Combination], b: &[Combination]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let left: HashSet<&Combination> = a.iter().collect();
    let right: HashSet<&Combination> = b.iter().collect();
    left == right
}

/// Enumerate every configured amount
///
/// All inputs are validated before the first enumeration, so an invalid
/// amount anywhere in the list yields no reports at all.
pub fn run(cfg: &EnumerationConfig) -> Result<Vec<AmountReport>> {
    let denominations =
        Denominations::new(&cfg.denominations).context("invalid denomination set")?;
    let amounts = cfg
        .amounts
        .iter()
        .map(|&amount| validate_target(amount).with_context(|| format!("invalid amount {}", amount)))
        .collect::<Result<Vec<_>>>()?;

    let enumerator = CombinationEnumerator::with_dedup(cfg.algorithm, cfg.dp_dedup);
    let checker = cfg
        .cross_check
        .then(|| CombinationEnumerator::with_dedup(cfg.algorithm.other(), cfg.dp_dedup));

    info!(
        algorithm = %cfg.algorithm,
        denominations = %denominations,
        amounts = amounts.len(),
        cross_check = cfg.cross_check,
        "starting enumeration run"
    );

    amounts
        .into_iter()
        .map(|amount| run_amount(&enumerator, checker.as_ref(), &denominations, amount))
        .collect()
}

/// Enumerate one validated amount, optionally cross-checking
pub fn run_amount(
    enumerator: &CombinationEnumerator,
    checker: Option<&CombinationEnumerator>,
    denominations: &Denominations,
    amount: u64,
) -> Result<AmountReport> {
    let started = Instant::now();
    let combinations = enumerator
        .enumerate_validated(denominations, amount)
        .with_context(|| format!("amount {} cannot be enumerated", amount))?;
    let elapsed = started.elapsed();

    info!(
        amount,
        algorithm = %enumerator.algorithm(),
        combinations = combinations.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "amount enumerated"
    );

    let cross_check = match checker {
        Some(checker) => {
            let started = Instant::now();
            let reference = checker
                .enumerate_validated(denominations, amount)
                .with_context(|| format!("amount {} cannot be cross-checked", amount))?;
            let check = CrossCheck {
                algorithm: checker.algorithm(),
                elapsed: started.elapsed(),
                matched: same_combination_set(&combinations, &reference),
            };
            if !check.matched {
                error!(
                    amount,
                    primary = combinations.len(),
                    reference = reference.len(),
                    "algorithms disagree"
                );
                bail!(
                    "{} and {} produced different combination sets for amount {}",
                    enumerator.algorithm(),
                    checker.algorithm(),
                    amount
                );
            }
            Some(check)
        }
        None => None,
    };

    Ok(AmountReport {
        amount,
        algorithm: enumerator.algorithm(),
        combination_count: combinations.len(),
        elapsed,
        combinations,
        cross_check,
    })
}
