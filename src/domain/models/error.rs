use thiserror::Error;

/// Failures surfaced by the gateway. Nothing is recovered silently;
/// every variant reaches the caller, which decides whether to retry.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad credentials, or a missing/expired token rejected by the backend.
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The backend refused the payload.
    #[error("request rejected: {0}")]
    Validation(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but did not match the expected shape.
    #[error("unexpected response from backend: {0}")]
    Malformed(String),

    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },
}
