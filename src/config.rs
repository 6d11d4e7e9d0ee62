//! Runtime configuration.
//!
//! The command line carries only `<version> <channel>`; everything else the
//! generator needs comes from environment variables with sensible defaults.

use std::path::PathBuf;
use reqwest::Url;
use crate::error::{GenerateError, Result};

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/bedrock-docs/bds-docs/main/docs";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const BASE_URL_VAR: &str = "BLOCK_DOCS_BASE_URL";
pub const TIMEOUT_VAR: &str = "BLOCK_DOCS_TIMEOUT_SECS";
pub const OUT_DIR_VAR: &str = "TYPED_BLOCKS_OUT_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the docs tree; `/{channel}/{version}/...` is appended.
    pub base_url: String,
    /// Directory the generated module is written into.
    pub output_dir: PathBuf,
    /// Transport timeout for the document fetch.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `BLOCK_DOCS_BASE_URL` (default: the bds-docs GitHub raw tree)
    /// - `BLOCK_DOCS_TIMEOUT_SECS` (default: 30)
    /// - `TYPED_BLOCKS_OUT_DIR` (default: current directory)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(BASE_URL_VAR).filter(|s| !s.trim().is_empty()) {
            Url::parse(&raw).map_err(|e| GenerateError::Config {
                var: BASE_URL_VAR.to_string(),
                message: e.to_string(),
            })?;
            config.base_url = raw;
        }
        if let Some(secs) = lookup(TIMEOUT_VAR).and_then(|s| s.trim().parse().ok()) {
            config.timeout_secs = secs;
        }
        if let Some(dir) = lookup(OUT_DIR_VAR).filter(|s| !s.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}
