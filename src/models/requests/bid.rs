//! Bid request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Partial update applied to a bid by the job owner
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBidStatusRequest {
    /// New status value, e.g. "In Progress", "Rejected", "Complete"
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "In Progress")]
    pub status: String,
}
