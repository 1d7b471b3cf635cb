//! Session request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Identity claims submitted to obtain a session cookie
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SessionRequest {
    /// Email address to bind the session to
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}
