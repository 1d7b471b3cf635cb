//! Session handlers for issuing and clearing the signed cookie.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::constants::{MSG_LOGOUT_SUCCESS, MSG_SESSION_ISSUED};
use crate::errors::ApiError;
use crate::models::{SessionRequest, StatusResponse};
use crate::services::auth_service;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validation_errors_to_api_error;

/// Issue a session cookie for the submitted identity
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Session",
    request_body = SessionRequest,
    responses(
        (status = 200, description = "Session cookie set", body = StatusResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn issue_session(body: web::Json<SessionRequest>) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let token = auth_service::issue_token(&body.email)?;
    info!("Session issued for {}", mask_email(&body.email));

    Ok(HttpResponse::Ok()
        .cookie(auth_service::session_cookie(token))
        .json(StatusResponse::message(MSG_SESSION_ISSUED)))
}

/// Clear the session cookie
#[utoipa::path(
    get,
    path = "/logout",
    tag = "Session",
    responses(
        (status = 200, description = "Session cookie cleared", body = StatusResponse)
    )
)]
pub async fn logout() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok()
        .cookie(auth_service::expired_session_cookie())
        .json(StatusResponse::message(MSG_LOGOUT_SUCCESS)))
}
