//! Pagination constants for the job listing endpoint.

/// Page number used when the client omits or garbles `cpage`.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;
