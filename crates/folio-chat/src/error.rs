//! Error types for the chat relay

use thiserror::Error;

/// Ways a chat exchange can fail.
///
/// The widget collapses every variant into the same fallback bubble; the
/// variant only matters for the diagnostic log line.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Chat request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Chat endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Malformed chat reply: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ChatError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
