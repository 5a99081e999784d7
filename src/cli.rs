//! Command-line arguments for the ATM denomination calculator
//!
//! Flags override values loaded from the configuration file and environment.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::warn;

use crate::config::{Config, OutputFormat};
use crate::enumerator::{Algorithm, DedupStrategy};

/// ATM Denomination Calculator - list every note combination for an amount
#[derive(Parser, Debug)]
#[command(name = "atm-denominations")]
#[command(version)]
#[command(about = "Enumerate every combination of notes that makes up an amount", long_about = None)]
pub struct Args {
    /// Amounts to enumerate (replaces the configured list)
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amounts: Vec<i64>,

    /// Available denominations, comma separated
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub denominations: Option<Vec<i64>>,

    /// Algorithm: backtracking (1) or dynamic_programming (dp, 2)
    #[arg(short, long, value_parser = Algorithm::from_str)]
    pub algorithm: Option<Algorithm>,

    /// Duplicate check used by the DP table: scan or hashed
    #[arg(long, value_parser = DedupStrategy::from_str)]
    pub dedup: Option<DedupStrategy>,

    /// Ask for the algorithm on stdin
    #[arg(short, long, conflicts_with = "algorithm")]
    pub interactive: bool,

    /// Also run the other algorithm and fail if the sets differ
    #[arg(long)]
    pub cross_check: bool,

    /// Output format: text or json
    #[arg(short, long, value_parser = OutputFormat::from_str)]
    pub format: Option<OutputFormat>,

    /// Currency label shown after each denomination
    #[arg(long)]
    pub currency: Option<String>,

    /// Hide elapsed time in text output
    #[arg(long)]
    pub no_timing: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the available algorithms and exit
    #[arg(long)]
    pub list_algorithms: bool,

    /// Verbosity: -v (info), -vv (debug), -vvv (trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Filter directive implied by `-v` flags, if any
    pub fn log_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Apply flag overrides on top of the loaded configuration
    pub fn apply(&self, cfg: &mut Config) {
        if !self.amounts.is_empty() {
            cfg.enumeration.amounts = self.amounts.clone();
        }
        if let Some(denominations) = &self.denominations {
            cfg.enumeration.denominations = denominations.clone();
        }
        if let Some(algorithm) = self.algorithm {
            cfg.enumeration.algorithm = algorithm;
        }
        if let Some(dedup) = self.dedup {
            cfg.enumeration.dp_dedup = dedup;
        }
        if self.cross_check {
            cfg.enumeration.cross_check = true;
        }
        if let Some(format) = self.format {
            cfg.output.format = format;
        }
        if let Some(currency) = &self.currency {
            cfg.output.currency = currency.clone();
        }
        if self.no_timing {
            cfg.output.show_timing = false;
        }
        if let Some(filter) = self.log_filter() {
            cfg.logging.filter = filter.to_string();
        }
    }
}

/// Console menu; `2` selects DP, anything else (or no answer) backtracking
///
/// The menu goes to `prompt` rather than the report stream, so JSON output
/// stays parseable.
pub fn prompt_algorithm<R: BufRead, W: Write>(mut input: R, mut prompt: W) -> Result<Algorithm> {
    writeln!(prompt, "Choose algorithm:")?;
    for (i, algorithm) in Algorithm::iter().enumerate() {
        writeln!(prompt, "{}. {}", i + 1, algorithm.label())?;
    }
    write!(prompt, "Enter your choice (1 or 2): ")?;
    prompt.flush()?;

    let mut choice = String::new();
    let read = input
        .read_line(&mut choice)
        .context("failed to read algorithm choice")?;
    if read == 0 {
        warn!("no algorithm choice on stdin, using backtracking");
    }

    Ok(Algorithm::from_menu_choice(&choice))
}
