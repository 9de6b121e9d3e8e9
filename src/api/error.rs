//! API Errors
//!
//! Every failure the gateway can report. Handlers log the detail and show the
//! user one generic notification regardless of the variant.

/// Errors returned by the API gateway
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a status the operation does not accept
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body did not match the expected shape
    #[error("malformed response: {0}")]
    Parse(String),

    /// The request payload could not be encoded
    #[error("could not encode request: {0}")]
    Serialize(String),
}
