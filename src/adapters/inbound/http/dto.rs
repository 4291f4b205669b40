use serde::{Deserialize, Serialize};

use crate::domain::{errors::LookupError, models::LookupRecord};

/// Query string accepted by `/track`, kept as raw pairs so repeated keys
/// decode instead of failing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TrackQueryDto(Vec<(String, String)>);

impl TrackQueryDto {
    /// First `mobile` value, if any; later repeats are ignored
    pub fn mobile(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "mobile")
            .map(|(_, value)| value.as_str())
    }
}

/// Normalized response returned by `/track`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackResponseDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LookupRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TrackResponseDto {
    pub fn found(record: LookupRecord) -> Self {
        TrackResponseDto {
            success: true,
            data: Some(record),
            error: None,
        }
    }

    pub fn failed(message: &str) -> Self {
        TrackResponseDto {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }

    pub fn from_lookup_error(error: &LookupError) -> Self {
        Self::failed(&error.to_string())
    }
}
