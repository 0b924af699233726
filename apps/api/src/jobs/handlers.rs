use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::auth::Claims;
use crate::errors::AppError;
use crate::jobs::store::{create_job, find_jobs, get_job, remove_job, update_job};
use crate::models::job::{Job, JobUpdate, NewJob};
use crate::routes::query::{parse_filter_query, Deleted};
use crate::state::AppState;

/// `hasEquity` is deliberately absent: it stays the raw query string.
const NUMERIC_FILTERS: &[&str] = &["minSalary"];

#[derive(Serialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

/// POST /jobs (admin)
pub async fn handle_create_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<NewJob>, JsonRejection>,
) -> Result<(StatusCode, Json<JobResponse>), AppError> {
    let Json(new) = body?;
    new.validate()?;
    let job = create_job(&state.db, &new).await?;
    info!(admin = %claims.username, job_id = job.id, company = %job.company_handle, "job created");
    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// GET /jobs?title=&minSalary=&hasEquity=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<JobListResponse>, AppError> {
    let Query(pairs) = query?;
    let filter = parse_filter_query(pairs, NUMERIC_FILTERS)?;
    let jobs = find_jobs(&state.db, filter).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// GET /jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<JobResponse>, AppError> {
    let job = get_job(&state.db, id).await?;
    Ok(Json(JobResponse { job }))
}

/// PATCH /jobs/:id (admin)
pub async fn handle_update_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    body: Result<Json<JobUpdate>, JsonRejection>,
) -> Result<Json<JobResponse>, AppError> {
    let Json(data) = body?;
    data.validate()?;
    let job = update_job(&state.db, id, data).await?;
    info!(admin = %claims.username, job_id = id, "job updated");
    Ok(Json(JobResponse { job }))
}

/// DELETE /jobs/:id (admin)
pub async fn handle_remove_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<Deleted<i32>>, AppError> {
    remove_job(&state.db, id).await?;
    info!(admin = %claims.username, job_id = id, "job removed");
    Ok(Json(Deleted { deleted: id }))
}
