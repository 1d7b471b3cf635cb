//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Unauthorized access";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";

// Authorization errors
pub const ERR_FORBIDDEN_OWNER: &str = "Forbidden access";

// Job errors
pub const ERR_INVALID_JOB_ID: &str = "Invalid job ID format";

// Bid errors
pub const ERR_INVALID_BID_ID: &str = "Invalid bid ID format";
pub const ERR_DUPLICATE_BID: &str = "You have already placed a bid for this job";
