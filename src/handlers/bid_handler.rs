//! Bid handlers for placing bids and managing bid status.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{Bid, UpdateBidStatusRequest};
use crate::services::BidService;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validation_errors_to_api_error;

/// Get all bids placed by a bidder
#[utoipa::path(
    get,
    path = "/my-bids/{email}",
    tag = "Bids",
    params(
        ("email" = String, Path, description = "Bidder email")
    ),
    responses(
        (status = 200, description = "Bids placed by the email", body = Vec<Bid>)
    )
)]
pub async fn get_my_bids(
    bid_service: web::Data<BidService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    let bids = bid_service.get_bids_by_bidder(&email).await?;
    Ok(HttpResponse::Ok().json(bids))
}

/// Get all bids against jobs owned by a buyer
#[utoipa::path(
    get,
    path = "/bid-request/{email}",
    tag = "Bids",
    params(
        ("email" = String, Path, description = "Buyer email")
    ),
    responses(
        (status = 200, description = "Bids on the buyer's jobs", body = Vec<Bid>)
    )
)]
pub async fn get_bid_requests(
    bid_service: web::Data<BidService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    let bids = bid_service.get_bid_requests(&email).await?;
    Ok(HttpResponse::Ok().json(bids))
}

/// Place a bid on a job
///
/// A bidder can bid at most once per job; a repeat submission fails with a
/// plain-text 400 and stores nothing.
#[utoipa::path(
    post,
    path = "/bid",
    tag = "Bids",
    request_body = Bid,
    responses(
        (status = 200, description = "Insertion acknowledgment", body = crate::models::InsertAck),
        (status = 400, description = "Duplicate bid or validation error")
    )
)]
pub async fn place_bid(
    bid_service: web::Data<BidService>,
    body: web::Json<Bid>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    info!(
        "Bid from {} on job {}",
        mask_email(&body.email),
        body.job_id
    );
    let ack = bid_service.place_bid(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Update the status of a bid
#[utoipa::path(
    patch,
    path = "/bid/{id}",
    tag = "Bids",
    params(
        ("id" = String, Path, description = "Bid ID")
    ),
    request_body = UpdateBidStatusRequest,
    responses(
        (status = 200, description = "Update acknowledgment", body = crate::models::UpdateAck),
        (status = 400, description = "Malformed bid ID or validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_bid_status(
    bid_service: web::Data<BidService>,
    path: web::Path<String>,
    body: web::Json<UpdateBidStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    let bid_id = path.into_inner();
    body.validate().map_err(validation_errors_to_api_error)?;

    let ack = bid_service.update_status(&bid_id, &body.status).await?;
    Ok(HttpResponse::Ok().json(ack))
}
