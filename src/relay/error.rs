//! Relay-specific error types.

/// Errors that can occur while delivering a contact message.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Transport failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Relay answered with a non-success status
    #[error("Relay rejected message (status {status})")]
    Rejected { status: u16 },

    /// Message could not be handed to the network layer
    #[error("Failed to dispatch message: {0}")]
    Dispatch(String),
}
