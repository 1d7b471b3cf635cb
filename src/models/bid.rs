use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Buyer;

/// Bid document stored in MongoDB.
///
/// One bid per (email, jobId) pair; `jobId` references a Job by hex id but is
/// not a foreign key, so deleting the job leaves its bids in place.
#[derive(Debug, Serialize, Deserialize, Clone, Validate, ToSchema)]
pub struct Bid {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "665f1f77bcf86cd799439012")]
    pub id: Option<ObjectId>,
    /// Bidder's email address
    #[validate(email(message = "Invalid bidder email"))]
    #[schema(example = "bidder@example.com")]
    pub email: String,
    /// Hex id of the job being bid on
    #[serde(rename = "jobId")]
    #[validate(length(min = 1, message = "Job reference is required"))]
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub job_id: String,
    /// Owner of the referenced job, denormalized for bid-request listings
    #[validate(nested)]
    pub buyer: Buyer,
    /// Free-form status, set by the job owner via partial update
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Pending")]
    pub status: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_reference_uses_wire_name() {
        let bid: Bid = serde_json::from_value(json!({
            "email": "bidder@example.com",
            "jobId": "665f1f77bcf86cd799439011",
            "buyer": { "email": "owner@example.com" },
            "status": "Pending",
            "price": 180
        }))
        .unwrap();

        assert_eq!(bid.job_id, "665f1f77bcf86cd799439011");
        assert_eq!(bid.extra.get_i32("price").ok(), None); // JSON ints land as i64
        assert_eq!(bid.extra.get_i64("price").unwrap(), 180);

        let back = serde_json::to_value(&bid).unwrap();
        assert_eq!(back["jobId"], "665f1f77bcf86cd799439011");
        assert!(back.get("job_id").is_none());
    }

    #[test]
    fn test_missing_status_stays_absent() {
        let bid: Bid = serde_json::from_value(json!({
            "email": "bidder@example.com",
            "jobId": "665f1f77bcf86cd799439011",
            "buyer": { "email": "owner@example.com" }
        }))
        .unwrap();

        assert!(bid.status.is_none());
        let back = serde_json::to_value(&bid).unwrap();
        assert!(back.get("status").is_none());
    }
}
