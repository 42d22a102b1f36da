use thiserror::Error;

use crate::pokemon::FetchError;

/// The one way a lookup can fail.
///
/// Carries the rejection message from the fetch collaborator. Whether it
/// was a network problem, an unknown name or a bad response is the
/// collaborator's business; here it is just "lookup failed".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        Self::new(err.to_string())
    }
}
