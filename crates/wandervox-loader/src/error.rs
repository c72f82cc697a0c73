//! Load failure taxonomy.

use thiserror::Error;

/// The three terminal ways a world load can fail.
///
/// None of these are retried; each aborts its load and surfaces as a textual
/// message on the user-facing error channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Fetch ended with a non-success status, or the transport itself failed.
    /// For status failures the payload is the status code text.
    #[error("network error: {0}")]
    Network(String),

    /// The compressed stream could not be inflated.
    #[error("corrupt world stream: {0}")]
    Decompression(String),

    /// The inflated payload was rejected by the world import.
    #[error("world import failed: {0}")]
    Import(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_carries_status_text() {
        let message = LoadError::Network("404".into()).to_string();
        assert!(message.contains("404"));
    }
}
