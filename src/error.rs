//! All error types for the intlgen crate.
//!
//! These are returned from all fallible operations (model loading, locale parsing, emission).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("no string table for default locale `{0}`")]
    MissingDefaultTable(String),

    #[error("keys `{first}` and `{second}` both escape to accessor `{escaped_key}`")]
    DuplicateAccessor {
        escaped_key: String,
        first: String,
        second: String,
    },

    #[error("key `{key}` escapes to `{escaped_key}`, which is a reserved class member")]
    ReservedAccessor { escaped_key: String, key: String },

    #[error("key `{key}` declares `{name}`, which is not a valid placeholder name")]
    InvalidPlaceholder { key: String, name: String },

    #[error("key `{key}` declares placeholder parameter `{name}` more than once")]
    DuplicatePlaceholder { key: String, name: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
