//! Remote document transport.
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;
use crate::error::{GenerateError, Result};

pub const DOCUMENT_PATH: &str = "block_modules/mojang-blocks.json";

const USER_AGENT: &str = concat!("typed-block-permutation/", env!("CARGO_PKG_VERSION"));

/// Release track of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stable,
    Preview,
}

/// Which document to generate from. `version` is substituted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub version: String,
    pub channel: Channel,
}

/// Anything that can hand back the raw document bytes for a URL.
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Preview => "preview",
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Channel::Stable),
            "preview" => Ok(Channel::Preview),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn document_url(base_url: &str, target: &Target) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/{}/{}/{DOCUMENT_PATH}", target.channel, target.version)
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GenerateError::Transport { url: config.base_url.clone(), source: e })?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| GenerateError::Transport { url: url.to_string(), source: e })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(GenerateError::Fetch { url: url.to_string(), status: status.as_u16() });
        }

        let bytes = resp
            .bytes()
            .map_err(|e| GenerateError::Transport { url: url.to_string(), source: e })?;
        tracing::debug!(url, bytes = bytes.len(), "fetched block document");
        Ok(bytes.to_vec())
    }
}
