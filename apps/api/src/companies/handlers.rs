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

use crate::companies::store::{
    create_company, find_companies, get_company, remove_company, update_company,
};
use crate::auth::Claims;
use crate::errors::AppError;
use crate::models::company::{Company, CompanyDetail, CompanyUpdate, NewCompany};
use crate::routes::query::{parse_filter_query, Deleted};
use crate::state::AppState;

/// Filter keys parsed as integers before reaching the clause builder.
const NUMERIC_FILTERS: &[&str] = &["minEmployees", "maxEmployees"];

#[derive(Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
}

/// POST /companies (admin)
pub async fn handle_create_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<NewCompany>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError> {
    let Json(new) = body?;
    new.validate()?;
    let company = create_company(&state.db, &new).await?;
    info!(admin = %claims.username, handle = %company.handle, "company created");
    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// GET /companies?name=&minEmployees=&maxEmployees=
pub async fn handle_list_companies(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CompanyListResponse>, AppError> {
    let Query(pairs) = query?;
    let filter = parse_filter_query(pairs, NUMERIC_FILTERS)?;
    let companies = find_companies(&state.db, filter).await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// GET /companies/:handle
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<CompanyDetailResponse>, AppError> {
    let company = get_company(&state.db, &handle).await?;
    Ok(Json(CompanyDetailResponse { company }))
}

/// PATCH /companies/:handle (admin)
pub async fn handle_update_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(handle): Path<String>,
    body: Result<Json<CompanyUpdate>, JsonRejection>,
) -> Result<Json<CompanyResponse>, AppError> {
    let Json(data) = body?;
    data.validate()?;
    let company = update_company(&state.db, &handle, data).await?;
    info!(admin = %claims.username, handle = %handle, "company updated");
    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/:handle (admin)
pub async fn handle_remove_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(handle): Path<String>,
) -> Result<Json<Deleted<String>>, AppError> {
    remove_company(&state.db, &handle).await?;
    info!(admin = %claims.username, handle = %handle, "company removed");
    Ok(Json(Deleted { deleted: handle }))
}
