use anyhow::{Context, Result};
use atm_denominations::cli::{prompt_algorithm, Args};
use atm_denominations::config::{Config, OutputFormat};
use atm_denominations::enumerator::Algorithm;
use atm_denominations::{runner, telemetry};
use clap::Parser;
use std::io;
use strum::IntoEnumIterator;
use tracing::info;
use validator::Validate;

const BANNER: &str = "===========================\n\
                      ATM Denomination Calculator\n\
                      ===========================";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if args.list_algorithms {
        for algorithm in Algorithm::iter() {
            println!("{:<20} {}", algorithm.to_string(), algorithm.complexity_note());
        }
        return Ok(());
    }

    let mut cfg = match &args.config {
        Some(path) => Config::load_explicit(path)?,
        None => Config::load()?,
    };
    args.apply(&mut cfg);
    cfg.validate().context("invalid command line overrides")?;

    telemetry::init_tracing(&cfg.logging);

    if cfg.output.format == OutputFormat::Text {
        println!("{}", BANNER);
    }

    if args.interactive {
        // Menu on stderr keeps stdout for the report
        cfg.enumeration.algorithm = prompt_algorithm(io::stdin().lock(), io::stderr())?;
    }

    info!(
        algorithm = %cfg.enumeration.algorithm,
        dedup = %cfg.enumeration.dp_dedup,
        format = %cfg.output.format,
        "configuration loaded"
    );

    let reports = runner::run(&cfg.enumeration)?;

    match cfg.output.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("\n{}", report.render_text(&cfg.output));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}
