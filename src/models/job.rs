use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Owning buyer sub-record embedded in jobs and bids.
///
/// Clients attach display fields (name, photo, ...) alongside the email;
/// those are carried through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Validate, ToSchema)]
pub struct Buyer {
    /// Buyer's email address, the owning identity for scoped listings
    #[validate(email(message = "Invalid buyer email"))]
    #[schema(example = "buyer@example.com")]
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

/// Job document stored in MongoDB.
///
/// Documents are client-shaped: beyond the typed fields the client may send
/// arbitrary extras (description, price range, ...) which are persisted and
/// returned unmodified.
#[derive(Debug, Serialize, Deserialize, Clone, Validate, ToSchema)]
pub struct Job {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "665f1f77bcf86cd799439011")]
    pub id: Option<ObjectId>,
    /// Job title, target of the case-insensitive listing search
    #[validate(length(min = 1, message = "Job title is required"))]
    #[schema(example = "Landing page redesign")]
    pub job_title: String,
    /// Category tag, matched exactly by the listing filter
    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Web Development")]
    pub category: String,
    /// ISO-8601 date string; lexicographic order equals chronological order
    #[validate(length(min = 1, message = "Deadline is required"))]
    #[schema(example = "2026-09-30")]
    pub deadline: String,
    #[validate(nested)]
    pub buyer: Buyer,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_extra_fields() {
        let payload = json!({
            "job_title": "Logo design",
            "category": "Graphics Design",
            "deadline": "2026-10-01",
            "buyer": { "email": "owner@example.com", "name": "Owner" },
            "description": "Vector logo with brand guide",
            "min_price": 100,
            "max_price": 250
        });

        let job: Job = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(job.job_title, "Logo design");
        assert_eq!(job.extra.get_str("description").unwrap(), "Vector logo with brand guide");

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["min_price"], payload["min_price"]);
        assert_eq!(back["max_price"], payload["max_price"]);
        assert_eq!(back["buyer"]["name"], payload["buyer"]["name"]);
    }

    #[test]
    fn test_unset_id_is_not_serialized() {
        let job: Job = serde_json::from_value(json!({
            "job_title": "T",
            "category": "C",
            "deadline": "2026-01-01",
            "buyer": { "email": "o@example.com" }
        }))
        .unwrap();

        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_validation_rejects_empty_title() {
        let job: Job = serde_json::from_value(json!({
            "job_title": "",
            "category": "C",
            "deadline": "2026-01-01",
            "buyer": { "email": "o@example.com" }
        }))
        .unwrap();

        assert!(job.validate().is_err());
    }
}
