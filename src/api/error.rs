use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure modes of the API access layer. Every call is attempted exactly
/// once; there is no retry, backoff, or circuit breaker anywhere, so each
/// error is terminal for its call and surfaced by the page that made it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("token retrieval failed: {0}")]
    Token(String),
}

impl ApiError {
    /// HTTP status for gate logic (404 -> registration, 403 -> inactive);
    /// `None` for transport-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_for_http_errors_only() {
        let err = ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Network("offline".to_string()).status(), None);
        assert_eq!(ApiError::Token("no session".to_string()).status(), None);
    }
}
