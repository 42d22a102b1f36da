//! Errors raised by the Pokémon API client.
//!
//! The lookup layer only ever sees the message (see
//! [`LookupError`](crate::lookup::LookupError)); the variants exist so the
//! client can log and test each failure mode separately.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered but has no Pokémon by that name.
    #[error("No pokemon with the name \"{name}\"")]
    NotFound { name: String },

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Failed to reach the API at all.
    #[error("Could not reach the Pokémon API: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("Malformed response from the Pokémon API: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured deadline.
    #[error("Lookup timed out after {duration}s")]
    Timeout { duration: u64 },
}

impl FetchError {
    /// Short tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => "not_found",
            FetchError::Api { .. } => "api_error",
            FetchError::Connection { .. } => "connection_error",
            FetchError::Decode { .. } => "decode_error",
            FetchError::Timeout { .. } => "timeout",
        }
    }
}
