//! Typed acknowledgments derived from driver write results.

use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment returned after inserting a document
#[derive(Debug, Serialize, ToSchema)]
pub struct InsertAck {
    pub acknowledged: bool,
    /// Hex id assigned by the store
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_hex())
                .unwrap_or_else(|| result.inserted_id.to_string()),
        }
    }
}

/// Acknowledgment returned after an update or upsert
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    /// Hex id of the document created by an upsert, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result
                .upserted_id
                .and_then(|id| id.as_object_id().map(|oid| oid.to_hex())),
        }
    }
}

/// Acknowledgment returned after a delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

/// Total job count for pager computation
#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 42)]
    pub result: u64,
}
