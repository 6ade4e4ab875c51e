//! Error types for keyspell.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`KeyspellError`] enum. Ranking itself never fails; errors come from
//! loading dictionaries, snapshots and configuration at startup.
//!
//! # Examples
//!
//! ```
//! use keyspell::error::{KeyspellError, Result};
//!
//! fn load_something() -> Result<()> {
//!     Err(KeyspellError::dictionary("vocabulary and counts disagree"))
//! }
//!
//! match load_something() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for keyspell operations.
#[derive(Error, Debug)]
pub enum KeyspellError {
    /// I/O errors (reading dictionaries, writing snapshots, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary loading or consistency errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Snapshot encoding/decoding errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KeyspellError.
pub type Result<T> = std::result::Result<T, KeyspellError>;

impl KeyspellError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        KeyspellError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        KeyspellError::Config(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        KeyspellError::Serialization(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KeyspellError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KeyspellError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        KeyspellError::Other(format!("Internal error: {}", msg.into()))
    }
}

impl From<bincode::Error> for KeyspellError {
    fn from(err: bincode::Error) -> Self {
        KeyspellError::Serialization(err.to_string())
    }
}
