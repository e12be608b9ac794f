//! TVMaze API error types.

use thiserror::Error;

/// Errors surfaced by the TVMaze client.
///
/// The client never recovers from any of these internally. Each failure is
/// logged for diagnostics and re-signaled to the caller, which decides how
/// to present it. A "not found" result is not an error; the affected
/// operations return `None` instead.
#[derive(Debug, Error)]
pub enum TvMazeError {
    /// The API responded with a non-success HTTP status.
    #[error("API request failed: {status}")]
    Request {
        /// Status line of the response (e.g. "404 Not Found").
        status: String,
    },

    /// The response body does not match the expected shape.
    #[error("Invalid API response: {0}")]
    Validation(String),

    /// The request failed at the transport level.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
