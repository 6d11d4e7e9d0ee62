use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a generation run after arguments are parsed.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The document server answered, but not with 200.
    #[error("Failed download doc file: {url} returned HTTP {status}")]
    Fetch { url: String, status: u16 },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("Failed download doc file: {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The payload is not JSON, or not the shape the generator reads.
    #[error("Malformed block schema {0}")]
    Decode(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid value for {var}: {message}")]
    Config { var: String, message: String },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
