use crate::domain::errors::LookupError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ProviderError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {status} {reason}")]
    Http { status: u16, reason: String },

    #[error("first result is a JSON {kind}, expected an object")]
    UnexpectedRecord { kind: &'static str },

    #[error("upstream response contained no result record")]
    EmptyResult,
}

/// Errors raised while setting up a provider, before any lookup runs
#[derive(ThisError, Debug)]
pub enum ProviderInitError {
    #[error("Invalid provider endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Convert provider errors to domain lookup errors
impl From<ProviderError> for LookupError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Http { status: 429, .. } => LookupError::RateLimited,
            ProviderError::Http { status, reason } => LookupError::UpstreamStatus { status, reason },
            ProviderError::Client(e) if e.is_timeout() => LookupError::Transport {
                message: "upstream request timed out".to_string(),
            },
            ProviderError::Client(e) => LookupError::Transport {
                message: describe_client_error(e),
            },
            ProviderError::Serialization(e) => LookupError::MalformedResponse {
                message: format!("invalid upstream response: {}", e),
            },
            ProviderError::UnexpectedRecord { .. } => LookupError::MalformedResponse {
                message: err.to_string(),
            },
            ProviderError::EmptyResult => LookupError::MissingRecord,
        }
    }
}

/// Error message with its causes, minus the request URL (it carries the access key)
fn describe_client_error(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

/// Convert domain LookupError to HTTP status codes for API responses
impl From<&LookupError> for http::StatusCode {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::InvalidMobile(_) => http::StatusCode::BAD_REQUEST,
            LookupError::RateLimited => http::StatusCode::TOO_MANY_REQUESTS,
            LookupError::UpstreamStatus { .. }
            | LookupError::Transport { .. }
            | LookupError::MalformedResponse { .. }
            | LookupError::MissingRecord => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    #[test]
    fn test_rate_limit_status_maps_to_rate_limited() {
        let err = LookupError::from(ProviderError::Http {
            status: 429,
            reason: "Too Many Requests".to_string(),
        });
        assert_eq!(err, LookupError::RateLimited);
        assert_eq!(
            http::StatusCode::from(&err),
            http::StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_other_statuses_map_to_internal_error() {
        let err = LookupError::from(ProviderError::Http {
            status: 503,
            reason: "Service Unavailable".to_string(),
        });
        assert_eq!(err.to_string(), "HTTP error: 503 Service Unavailable");
        assert_eq!(
            http::StatusCode::from(&err),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_shape_errors_map_to_server_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = LookupError::from(ProviderError::Serialization(serde_err));
        assert!(matches!(err, LookupError::MalformedResponse { .. }));
        assert!(err.to_string().starts_with("Server error: "));

        let err = LookupError::from(ProviderError::EmptyResult);
        assert_eq!(err, LookupError::MissingRecord);
        assert_eq!(
            http::StatusCode::from(&err),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_mobile_is_bad_request() {
        let err = LookupError::InvalidMobile(ValidationError::EmptyMobileNumber);
        assert_eq!(http::StatusCode::from(&err), http::StatusCode::BAD_REQUEST);
    }
}
