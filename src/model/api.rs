use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every successful API response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// HTTP status code of the response
    pub code: u16,
    /// Human readable summary of the result
    pub message: String,
    /// Response payload, omitted when there is nothing to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error description, omitted on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Total number of items available for paginated payloads, omitted when zero
    #[serde(default, skip_serializing_if = "is_zero")]
    pub count: u64,
}

impl<T> ApiResponse<T> {
    pub fn new(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
            error: None,
            count: 0,
        }
    }

    /// Attach the total item count of a paginated result
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }
}

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code of the response
    pub code: u16,
    /// Short description of the failure class
    pub message: String,
    /// The error message
    pub error: String,
}

/// Liveness check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

fn is_zero(count: &u64) -> bool {
    *count == 0
}
