use actix_web::web;
use utoipa::OpenApi;

use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/", web::get().to(health_check))
        // Session routes (public)
        .route("/jwt", web::post().to(handlers::issue_session))
        .route("/logout", web::get().to(handlers::logout))
        // Job routes
        .route("/jobs", web::get().to(handlers::get_jobs))
        .route("/job", web::post().to(handlers::create_job))
        .route("/job/{id}", web::get().to(handlers::get_job))
        .route("/job/{id}", web::put().to(handlers::replace_job))
        .route("/job/{id}", web::delete().to(handlers::delete_job))
        .route("/jobs-all", web::get().to(handlers::list_jobs))
        .route("/jobs-count", web::get().to(handlers::count_jobs))
        // Owner-scoped listing (protected)
        .service(
            web::resource("/jobs/{email}")
                .wrap(AuthMiddleware)
                .route(web::get().to(handlers::get_jobs_by_owner)),
        )
        // Bid routes
        .route("/my-bids/{email}", web::get().to(handlers::get_my_bids))
        .route(
            "/bid-request/{email}",
            web::get().to(handlers::get_bid_requests),
        )
        .route("/bid", web::post().to(handlers::place_bid))
        .route("/bid/{id}", web::patch().to(handlers::update_bid_status))
        // API documentation
        .route("/api-docs/openapi.json", web::get().to(openapi_json));
}

/// Server health check
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = crate::models::HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "bidboard server is running"
    }))
}

async fn openapi_json() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}
