use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumString};
use validator::Validate;

use crate::enumerator::{Algorithm, DedupStrategy};
use crate::presentation::RenderOptions;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "ATM__";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub enumeration: EnumerationConfig,
    #[validate(nested)]
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnumerationConfig {
    /// Positivity is checked by the enumerators themselves
    pub denominations: Vec<i64>,
    #[validate(length(min = 1, message = "at least one amount is required"))]
    pub amounts: Vec<i64>,
    pub algorithm: Algorithm,
    pub dp_dedup: DedupStrategy,
    /// Also run the other algorithm and require the same set
    pub cross_check: bool,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            denominations: vec![10, 50, 100],
            amounts: vec![30, 50, 60, 80, 140, 230, 370, 610, 980],
            algorithm: Algorithm::Backtracking,
            dp_dedup: DedupStrategy::Scan,
            cross_check: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[validate(length(max = 16))]
    pub currency: String,
    #[validate(length(min = 1, message = "separator must not be empty"))]
    pub separator: String,
    pub show_timing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            currency: "EUR".to_string(),
            separator: " + ".to_string(),
            show_timing: true,
        }
    }
}

impl OutputConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            currency: self.currency.clone(),
            separator: self.separator.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, `RUST_LOG` takes precedence
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Load defaults, then `config/default.toml`, then `ATM__` environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Same as [`Config::load`] with an explicit TOML file; a missing file is skipped
    pub fn load_from(path: &Path) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        let cfg: Config = figment
            .extract()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
        cfg.validate().context("invalid configuration")?;
        Ok(cfg)
    }

    /// Load with a TOML file the user named; unlike [`Config::load_from`] the file must exist
    pub fn load_explicit(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("config file {} does not exist", path.display());
        }
        Self::load_from(path)
    }
}
