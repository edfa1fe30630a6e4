use thiserror::Error;

/// Failures raised by document store adapters.
///
/// `QueryRejected` is the recoverable case: the store is reachable but cannot
/// serve the requested query shape (missing composite index, unsupported
/// filter combination). Search falls back to an in-memory scan on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Query rejected by store: {reason}")]
    QueryRejected { reason: String },

    #[error("Rate limit exceeded, retry after {retry_after} seconds")]
    RateLimit { retry_after: u64 },

    #[error("Document not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid store response: {message}")]
    InvalidResponse { message: String },

    #[error("Document encoding failed: {message}")]
    Encoding { message: String },

    #[error("Store authentication failed")]
    AuthenticationFailed,

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn is_query_rejection(&self) -> bool {
        matches!(self, StoreError::QueryRejected { .. })
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::InvalidResponse {
                message: err.to_string(),
            }
        } else {
            StoreError::Unavailable {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encoding {
            message: err.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
