//! ATM denomination calculator
//!
//! Enumerates every combination of note counts that makes up a target amount,
//! with two independent strategies that must agree on the result set:
//!
//! - **Backtracking**: depth-first search, one denomination per level
//! - **Dynamic programming**: table of combination sets for every amount up to the target
//!
//! ```rust
//! use atm_denominations::enumerator::{enumerate, Algorithm};
//! use atm_denominations::presentation::{render_combinations, RenderOptions};
//!
//! let combinations = enumerate(&[10, 50, 100], 60, Algorithm::DynamicProgramming).unwrap();
//! assert_eq!(
//!     render_combinations(&combinations, &RenderOptions::default()),
//!     "1. 1 x 50 EUR + 1 x 10 EUR\n2. 6 x 10 EUR"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod enumerator;
pub mod error;
pub mod presentation;
pub mod runner;
pub mod telemetry;

pub use domain::{Combination, Denominations};
pub use enumerator::{enumerate, Algorithm};
pub use error::{EnumerationError, Result};
