use serde::{Deserialize, Serialize};

/// Body of every failed request
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new<T: Into<String>>(error: T) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details<T: Into<String>, D: Into<String>>(error: T, details: D) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
