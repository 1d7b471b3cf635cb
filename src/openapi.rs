use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::ErrorResponse;
use crate::models::{
    Bid, Buyer, CountResponse, DeleteAck, HealthResponse, InsertAck, Job, SessionRequest,
    StatusResponse, UpdateAck, UpdateBidStatusRequest,
};

/// OpenAPI documentation for the bidboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bidboard API",
        version = "0.1.0",
        description = "REST API for a freelance job-bidding marketplace: clients post jobs, users place bids, and job owners manage bid status.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Session", description = "Session cookie issuance and teardown"),
        (name = "Jobs", description = "Job CRUD and public listing endpoints"),
        (name = "Bids", description = "Bid submission and management endpoints")
    ),
    paths(
        crate::handlers::issue_session,
        crate::handlers::logout,
        crate::handlers::get_jobs,
        crate::handlers::get_job,
        crate::handlers::get_jobs_by_owner,
        crate::handlers::create_job,
        crate::handlers::replace_job,
        crate::handlers::delete_job,
        crate::handlers::list_jobs,
        crate::handlers::count_jobs,
        crate::handlers::get_my_bids,
        crate::handlers::get_bid_requests,
        crate::handlers::place_bid,
        crate::handlers::update_bid_status,
        crate::routes::health_check
    ),
    components(
        schemas(
            Job,
            Buyer,
            Bid,
            SessionRequest,
            UpdateBidStatusRequest,
            InsertAck,
            UpdateAck,
            DeleteAck,
            CountResponse,
            StatusResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for the session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "token",
                    "Signed session token set by POST /jwt",
                ))),
            );
        }
    }
}
