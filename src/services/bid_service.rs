//! Bid service: submission guard and status updates.

use std::sync::Arc;

use log::{debug, warn};
use mongodb::Database;

use crate::constants::{ERR_DUPLICATE_BID, ERR_INVALID_BID_ID};
use crate::errors::ApiError;
use crate::models::{Bid, InsertAck, UpdateAck};
use crate::repositories::BidRepository;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::parse_object_id;

pub struct BidService {
    repository: Arc<BidRepository>,
}

impl BidService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(BidRepository::new(db)),
        }
    }

    /// Create the bids indexes; called once at startup.
    pub async fn ensure_indexes(&self) -> Result<(), ApiError> {
        self.repository.create_indexes().await
    }

    pub async fn get_bids_by_bidder(&self, email: &str) -> Result<Vec<Bid>, ApiError> {
        debug!("Fetching bids placed by {}", mask_email(email));
        self.repository.find_by_bidder(email).await
    }

    pub async fn get_bid_requests(&self, email: &str) -> Result<Vec<Bid>, ApiError> {
        debug!("Fetching bid requests for buyer {}", mask_email(email));
        self.repository.find_by_buyer(email).await
    }

    /// Insert a bid unless the bidder already has one for this job.
    ///
    /// The existence check gives the friendly client error; the unique
    /// (email, jobId) index catches the check-then-insert race.
    pub async fn place_bid(&self, bid: Bid) -> Result<InsertAck, ApiError> {
        let already_exists = self
            .repository
            .find_by_bidder_and_job(&bid.email, &bid.job_id)
            .await?
            .is_some();

        if already_exists {
            warn!(
                "Rejected duplicate bid from {} on job {}",
                mask_email(&bid.email),
                bid.job_id
            );
            return Err(ApiError::DuplicateBid(ERR_DUPLICATE_BID.to_string()));
        }

        Ok(self.repository.insert(&bid).await?.into())
    }

    pub async fn update_status(&self, id: &str, status: &str) -> Result<UpdateAck, ApiError> {
        debug!("Updating bid {} status to {}", id, status);
        let object_id = parse_object_id(id, ERR_INVALID_BID_ID)?;
        Ok(self.repository.update_status(object_id, status).await?.into())
    }
}
