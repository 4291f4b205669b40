use super::ValidationError;

/// Errors that can occur while looking up a mobile number
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The caller supplied something that is not a usable mobile number
    InvalidMobile(ValidationError),

    /// The upstream provider answered 429
    RateLimited,

    /// The upstream provider answered with any other error status
    UpstreamStatus { status: u16, reason: String },

    /// The request never produced a response (connect failure, timeout, ...)
    Transport { message: String },

    /// The response body was not JSON of the expected envelope shape
    MalformedResponse { message: String },

    /// The envelope was well formed but held no usable result record
    MissingRecord,
}

impl LookupError {
    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, LookupError::InvalidMobile(_))
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::InvalidMobile(_) => write!(f, "Invalid mobile number"),
            LookupError::RateLimited => write!(f, "Too many requests, try later"),
            LookupError::UpstreamStatus { status, reason } => {
                write!(f, "HTTP error: {} {}", status, reason)
            }
            LookupError::Transport { message } => write!(f, "Server error: {}", message),
            LookupError::MalformedResponse { message } => {
                write!(f, "Server error: {}", message)
            }
            LookupError::MissingRecord => {
                write!(f, "Server error: upstream response contained no result record")
            }
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::InvalidMobile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for LookupError {
    fn from(err: ValidationError) -> Self {
        LookupError::InvalidMobile(err)
    }
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mobile_message_hides_detail() {
        let err = LookupError::from(ValidationError::InvalidMobileCharacter('x'));
        assert_eq!(err.to_string(), "Invalid mobile number");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_upstream_messages() {
        assert_eq!(
            LookupError::RateLimited.to_string(),
            "Too many requests, try later"
        );
        assert_eq!(
            LookupError::UpstreamStatus {
                status: 503,
                reason: "Service Unavailable".to_string(),
            }
            .to_string(),
            "HTTP error: 503 Service Unavailable"
        );
        assert!(LookupError::Transport {
            message: "connection refused".to_string(),
        }
        .to_string()
        .starts_with("Server error: "));
        assert!(!LookupError::MissingRecord.is_client_error());
    }
}
