//! Client-side error taxonomy.

/// Errors surfaced by catalog API calls.
///
/// Transport failures (no HTTP response) are distinct from rejected
/// responses, and only [`ClientError::Unauthenticated`] tears the
/// session down; every other failure leaves the session intact.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the request with a non-401 status. `detail`
    /// is the server-provided message when present, else a
    /// per-operation fallback.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The credential is missing, invalid, or expired. The caller must
    /// re-authenticate; retrying the same request cannot succeed.
    #[error("Authentication required")]
    Unauthenticated,
}

pub type ClientResult<T> = Result<T, ClientError>;
