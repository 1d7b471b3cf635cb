//! MongoDB collection names.

pub const COLLECTION_JOBS: &str = "jobs";
pub const COLLECTION_BIDS: &str = "bids";
