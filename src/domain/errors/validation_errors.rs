/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // MobileNumber validation errors
    EmptyMobileNumber,
    MobileNumberTooShort { actual: usize, min: usize },
    InvalidMobileCharacter(char),

    // Request-level validation errors
    MalformedQuery(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyMobileNumber => write!(f, "Mobile number cannot be empty"),
            ValidationError::MobileNumberTooShort { actual, min } => {
                write!(
                    f,
                    "Mobile number too short: {} digits (min: {})",
                    actual, min
                )
            }
            ValidationError::InvalidMobileCharacter(c) => {
                write!(f, "Invalid character in mobile number: '{}'", c)
            }
            ValidationError::MalformedQuery(detail) => {
                write!(f, "Malformed query string: {}", detail)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
