use crate::domain::errors::ValidationError;

/// Minimum number of digits accepted for a lookup
pub const MIN_MOBILE_DIGITS: usize = 10;

/// A validated mobile number: ASCII decimal digits only, at least
/// [`MIN_MOBILE_DIGITS`] long
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Create a new MobileNumber with validation.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a digit
    /// is rejected.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::EmptyMobileNumber);
        }

        if let Some(c) = value.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ValidationError::InvalidMobileCharacter(c));
        }

        if value.len() < MIN_MOBILE_DIGITS {
            return Err(ValidationError::MobileNumberTooShort {
                actual: value.len(),
                min: MIN_MOBILE_DIGITS,
            });
        }

        Ok(Self(value.to_string()))
    }

    /// Get the number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number with all but the last four digits masked, for logs
    pub fn masked(&self) -> String {
        let visible = &self.0[self.0.len() - 4..];
        format!("{}{}", "*".repeat(self.0.len() - 4), visible)
    }
}

impl std::fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
