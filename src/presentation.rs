//! Rendering of combinations as numbered denomination-count lines

use itertools::Itertools;

use crate::domain::Combination;

pub const NO_COMBINATIONS: &str = "No valid combinations found.";
pub const NO_NOTES: &str = "(no notes)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Unit label appended to each denomination, e.g. `EUR`
    pub currency: String,
    /// Joins the denomination parts of one line
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            separator: " + ".to_string(),
        }
    }
}

/// Render one combination without its line number
///
/// Only nonzero counts are listed, largest denomination first.
pub fn render_combination(combination: &Combination, options: &RenderOptions) -> String {
    let parts = combination
        .nonzero()
        .map(|(denomination, count)| {
            if options.currency.is_empty() {
                format!("{} x {}", count, denomination)
            } else {
                format!("{} x {} {}", count, denomination, options.currency)
            }
        })
        .join(&options.separator);

    if parts.is_empty() {
        NO_NOTES.to_string()
    } else {
        parts
    }
}

/// Render every combination as a 1-based numbered line, preserving input order
pub fn render_lines(combinations: &[Combination], options: &RenderOptions) -> Vec<String> {
    if combinations.is_empty() {
        return vec![NO_COMBINATIONS.to_string()];
    }

    combinations
        .iter()
        .enumerate()
        .map(|(i, combination)| format!("{}. {}", i + 1, render_combination(combination, options)))
        .collect()
}

/// Render every combination, one per line
pub fn render_combinations(combinations: &[Combination], options: &RenderOptions) -> String {
    render_lines(combinations, options).join("\n")
}
