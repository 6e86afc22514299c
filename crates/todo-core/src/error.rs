//! Store Errors

use thiserror::Error;

/// Failure reported by the tabular store or the transport to it.
///
/// `Display` yields the message shown in the UI error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store answered with an error body
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),
    /// The response body did not have the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl StoreError {
    /// HTTP status attached to the error, 0 when there was no response
    pub fn status(&self) -> u16 {
        match self {
            StoreError::Api { status, .. } => *status,
            StoreError::Transport(_) | StoreError::Decode(_) => 0,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}
