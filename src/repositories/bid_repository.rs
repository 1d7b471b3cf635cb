//! Bid repository for all MongoDB operations on the bids collection.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_BIDS;
use crate::errors::ApiError;
use crate::models::Bid;

/// Repository for bid-related database operations.
pub struct BidRepository {
    collection: Collection<Bid>,
}

impl BidRepository {
    /// Create a new BidRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_BIDS),
        }
    }

    /// Create database indexes for the bids collection.
    ///
    /// Called once during application startup. The unique compound index on
    /// `(email, jobId)` backs the one-bid-per-job invariant under concurrent
    /// submissions, where the pre-insert existence check alone can race.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for bids collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "email": 1, "jobId": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }

    /// Fetch all bids placed by the given bidder.
    pub async fn find_by_bidder(&self, email: &str) -> Result<Vec<Bid>, ApiError> {
        let cursor = self.collection.find(doc! { "email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch all bids against jobs owned by the given buyer.
    pub async fn find_by_buyer(&self, email: &str) -> Result<Vec<Bid>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "buyer.email": email })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Look up an existing bid for the (bidder, job) pair.
    pub async fn find_by_bidder_and_job(
        &self,
        email: &str,
        job_id: &str,
    ) -> Result<Option<Bid>, ApiError> {
        debug!("Repository: Checking existing bid for job: {}", job_id);
        Ok(self
            .collection
            .find_one(doc! { "email": email, "jobId": job_id })
            .await?)
    }

    /// Insert a new bid.
    pub async fn insert(&self, bid: &Bid) -> Result<mongodb::results::InsertOneResult, ApiError> {
        Ok(self.collection.insert_one(bid).await?)
    }

    /// Set the status field on a bid.
    pub async fn update_status(
        &self,
        id: ObjectId,
        status: &str,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await?)
    }
}
