//! Job handlers for CRUD operations and the public listing.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{ERR_AUTH_REQUIRED, ERR_FORBIDDEN_OWNER};
use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{CountResponse, Job};
use crate::services::JobService;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::{lenient_u64, validation_errors_to_api_error};

/// Get every job in the store
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "Jobs",
    responses(
        (status = 200, description = "All jobs", body = Vec<Job>)
    )
)]
pub async fn get_jobs(job_service: web::Data<JobService>) -> Result<HttpResponse, ApiError> {
    let jobs = job_service.get_all_jobs().await?;
    Ok(HttpResponse::Ok().json(jobs))
}

/// Get a single job by id
#[utoipa::path(
    get,
    path = "/job/{id}",
    tag = "Jobs",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "The job, or null when absent", body = Option<Job>),
        (status = 400, description = "Malformed job ID", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_job(
    job_service: web::Data<JobService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let job_id = path.into_inner();
    debug!("Fetching job with id: {}", job_id);

    // An absent job is an empty result here, not a 404
    let job = job_service.get_job_by_id(&job_id).await?;
    Ok(HttpResponse::Ok().json(job))
}

/// Get all jobs posted by a buyer
///
/// Requires a session; the path email must match the verified identity.
#[utoipa::path(
    get,
    path = "/jobs/{email}",
    tag = "Jobs",
    params(
        ("email" = String, Path, description = "Owner email")
    ),
    responses(
        (status = 200, description = "Jobs owned by the email", body = Vec<Job>),
        (status = 401, description = "Missing or invalid session", body = crate::errors::ErrorResponse),
        (status = 403, description = "Identity does not match the owner", body = crate::errors::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn get_jobs_by_owner(
    job_service: web::Data<JobService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();

    let claims = req.get_claims().ok_or_else(|| {
        warn!("Failed to get claims from request");
        ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
    })?;

    if !claims.matches_owner(&email) {
        warn!(
            "Session for {} requested jobs owned by {}",
            mask_email(&claims.email),
            mask_email(&email)
        );
        return Err(ApiError::Forbidden(ERR_FORBIDDEN_OWNER.to_string()));
    }

    let jobs = job_service.get_jobs_by_owner(&email).await?;
    Ok(HttpResponse::Ok().json(jobs))
}

/// Post a new job
#[utoipa::path(
    post,
    path = "/job",
    tag = "Jobs",
    request_body = Job,
    responses(
        (status = 200, description = "Insertion acknowledgment", body = crate::models::InsertAck),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_job(
    job_service: web::Data<JobService>,
    body: web::Json<Job>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    info!("Creating job: {}", body.job_title);
    let ack = job_service.create_job(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Replace-or-insert a job under the given id
#[utoipa::path(
    put,
    path = "/job/{id}",
    tag = "Jobs",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    request_body = Job,
    responses(
        (status = 200, description = "Upsert acknowledgment", body = crate::models::UpdateAck),
        (status = 400, description = "Malformed job ID or validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn replace_job(
    job_service: web::Data<JobService>,
    path: web::Path<String>,
    body: web::Json<Job>,
) -> Result<HttpResponse, ApiError> {
    let job_id = path.into_inner();
    body.validate().map_err(validation_errors_to_api_error)?;

    info!("Replacing job: {}", job_id);
    let ack = job_service.replace_job(&job_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Delete a job by id
#[utoipa::path(
    delete,
    path = "/job/{id}",
    tag = "Jobs",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = crate::models::DeleteAck),
        (status = 400, description = "Malformed job ID", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_job(
    job_service: web::Data<JobService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let job_id = path.into_inner();
    info!("Deleting job: {}", job_id);

    let ack = job_service.delete_job(&job_id).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// List jobs with pagination, filter, sort, and search
#[utoipa::path(
    get,
    path = "/jobs-all",
    tag = "Jobs",
    params(
        ("limit" = Option<u64>, Query, description = "Page size; omitted or invalid returns all matches"),
        ("cpage" = Option<u64>, Query, description = "1-based page number; omitted or invalid means page 1"),
        ("filter" = Option<String>, Query, description = "Exact category match"),
        ("sort" = Option<String>, Query, description = "Order by deadline: 'asc' ascending, anything else descending"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring match on the job title")
    ),
    responses(
        (status = 200, description = "One page of jobs", body = Vec<Job>)
    )
)]
pub async fn list_jobs(
    job_service: web::Data<JobService>,
    query: web::Query<JobListQuery>,
) -> Result<HttpResponse, ApiError> {
    let jobs = job_service
        .list_jobs_paged(
            query.limit,
            query.cpage,
            query.filter.as_deref(),
            query.sort.as_deref(),
            query.search.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(jobs))
}

/// Count jobs under the same filter and search predicates as the listing
#[utoipa::path(
    get,
    path = "/jobs-count",
    tag = "Jobs",
    params(
        ("filter" = Option<String>, Query, description = "Exact category match"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring match on the job title")
    ),
    responses(
        (status = 200, description = "Matching job count", body = CountResponse)
    )
)]
pub async fn count_jobs(
    job_service: web::Data<JobService>,
    query: web::Query<JobsCountQuery>,
) -> Result<HttpResponse, ApiError> {
    let result = job_service
        .count_jobs(query.filter.as_deref(), query.search.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(CountResponse { result }))
}

/// Query parameters for the paginated job listing.
///
/// Numbers are parsed leniently: the listing treats bad input as defaults
/// instead of rejecting the request.
#[derive(Debug, serde::Deserialize)]
pub struct JobListQuery {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub cpage: Option<u64>,
    /// Exact category match
    pub filter: Option<String>,
    /// "asc" or anything else for descending
    pub sort: Option<String>,
    /// Substring match on the job title
    pub search: Option<String>,
}

/// Query parameters for the job count.
#[derive(Debug, serde::Deserialize)]
pub struct JobsCountQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
}
