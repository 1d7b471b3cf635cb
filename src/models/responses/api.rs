//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Success acknowledgment for session endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Session issued")]
    pub message: String,
}

impl StatusResponse {
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
