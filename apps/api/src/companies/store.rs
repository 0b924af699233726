use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::company::{
    Company, CompanyDetail, CompanyUpdate, NewCompany, COMPANY_COLUMNS, COMPANY_JS_TO_SQL,
};
use crate::models::job::{Job, JOB_COLUMNS};
use crate::sql::{bind_values, sql_for_company_filter, sql_for_partial_update, SqlValue};

/// Inserts a new company. Fails with `Duplicate` if the handle is taken.
pub async fn create_company(pool: &PgPool, new: &NewCompany) -> Result<Company, AppError> {
    let existing: Option<String> =
        sqlx::query_scalar("SELECT handle FROM companies WHERE handle = $1")
            .bind(&new.handle)
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        return Err(AppError::Duplicate(format!("Duplicate company: {}", new.handle)));
    }

    let company = sqlx::query_as::<_, Company>(&format!(
        r#"
        INSERT INTO companies (handle, name, description, num_employees, logo_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {COMPANY_COLUMNS}
        "#
    ))
    .bind(&new.handle)
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.num_employees)
    .bind(&new.logo_url)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::from_insert(e, format!("Duplicate company: {}", new.handle), None))?;

    debug!("Created company {}", company.handle);
    Ok(company)
}

/// Lists companies ordered by name, narrowed by any of `name`, `minEmployees`, `maxEmployees`.
/// An empty filter lists everything.
pub async fn find_companies(
    pool: &PgPool,
    filter: Vec<(String, SqlValue)>,
) -> Result<Vec<Company>, AppError> {
    let filter = sql_for_company_filter(filter)?;
    let where_sql = if filter.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", filter.where_clause)
    };
    let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies {where_sql} ORDER BY name");
    debug!(%sql, params = filter.values.len(), "company search");

    let companies = bind_values(sqlx::query_as::<_, Company>(&sql), &filter.values)
        .fetch_all(pool)
        .await?;
    Ok(companies)
}

/// Returns one company with its jobs, or `NotFound`.
pub async fn get_company(pool: &PgPool, handle: &str) -> Result<CompanyDetail, AppError> {
    let company = sqlx::query_as::<_, Company>(&format!(
        "SELECT {COMPANY_COLUMNS} FROM companies WHERE handle = $1"
    ))
    .bind(handle)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No company: {handle}")))?;

    let jobs = sqlx::query_as::<_, Job>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE company_handle = $1 ORDER BY id"
    ))
    .bind(handle)
    .fetch_all(pool)
    .await?;

    Ok(CompanyDetail { company, jobs })
}

/// Partial update: only the supplied fields change. `NotFound` if the handle is unknown.
pub async fn update_company(
    pool: &PgPool,
    handle: &str,
    data: CompanyUpdate,
) -> Result<Company, AppError> {
    let update = sql_for_partial_update(data.into_fields(), COMPANY_JS_TO_SQL)?;
    let sql = format!(
        "UPDATE companies SET {} WHERE handle = {} RETURNING {COMPANY_COLUMNS}",
        update.set_cols,
        update.next_placeholder()
    );

    let company = bind_values(sqlx::query_as::<_, Company>(&sql), &update.values)
        .bind(handle)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No company: {handle}")))?;

    debug!("Updated company {handle}");
    Ok(company)
}

/// Deletes a company (and, by cascade, its jobs).
pub async fn remove_company(pool: &PgPool, handle: &str) -> Result<(), AppError> {
    let deleted: Option<String> =
        sqlx::query_scalar("DELETE FROM companies WHERE handle = $1 RETURNING handle")
            .bind(handle)
            .fetch_optional(pool)
            .await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(format!("No company: {handle}")));
    }

    debug!("Removed company {handle}");
    Ok(())
}
