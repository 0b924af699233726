use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::{Job, JobUpdate, NewJob, JOB_COLUMNS};
use crate::sql::{bind_values, sql_for_job_filter, sql_for_partial_update, SqlValue};

/// Inserts a new job. An identical job at the same company is a `Duplicate`;
/// an unknown `company_handle` is `NotFound`.
pub async fn create_job(pool: &PgPool, new: &NewJob) -> Result<Job, AppError> {
    let duplicate = format!("Duplicate job: {}, {}", new.title, new.company_handle);

    let existing: Option<i32> = sqlx::query_scalar(
        r#"
        SELECT id FROM jobs
        WHERE title = $1
          AND salary IS NOT DISTINCT FROM $2
          AND equity IS NOT DISTINCT FROM $3::NUMERIC
          AND company_handle = $4
        "#,
    )
    .bind(&new.title)
    .bind(new.salary)
    .bind(new.equity)
    .bind(&new.company_handle)
    .fetch_optional(pool)
    .await?;
    if existing.is_some() {
        return Err(AppError::Duplicate(duplicate));
    }

    let job = sqlx::query_as::<_, Job>(&format!(
        r#"
        INSERT INTO jobs (title, salary, equity, company_handle)
        VALUES ($1, $2, $3, $4)
        RETURNING {JOB_COLUMNS}
        "#
    ))
    .bind(&new.title)
    .bind(new.salary)
    .bind(new.equity)
    .bind(&new.company_handle)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        AppError::from_insert(
            e,
            duplicate.clone(),
            Some(format!("No company: {}", new.company_handle)),
        )
    })?;

    debug!("Created job {} at {}", job.id, job.company_handle);
    Ok(job)
}

/// Lists jobs ordered by title, narrowed by any of `title`, `minSalary`, `hasEquity`.
pub async fn find_jobs(pool: &PgPool, filter: Vec<(String, SqlValue)>) -> Result<Vec<Job>, AppError> {
    let filter = sql_for_job_filter(filter)?;
    let where_sql = if filter.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", filter.where_clause)
    };
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs {where_sql} ORDER BY title, id");
    debug!(%sql, params = filter.values.len(), "job search");

    let jobs = bind_values(sqlx::query_as::<_, Job>(&sql), &filter.values)
        .fetch_all(pool)
        .await?;
    Ok(jobs)
}

pub async fn get_job(pool: &PgPool, id: i32) -> Result<Job, AppError> {
    sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No job: {id}")))
}

/// Partial update of title, salary and equity.
pub async fn update_job(pool: &PgPool, id: i32, data: JobUpdate) -> Result<Job, AppError> {
    let update = sql_for_partial_update(data.into_fields(), &[])?;
    let sql = format!(
        "UPDATE jobs SET {} WHERE id = {} RETURNING {JOB_COLUMNS}",
        update.set_cols,
        update.next_placeholder()
    );

    let job = bind_values(sqlx::query_as::<_, Job>(&sql), &update.values)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No job: {id}")))?;

    debug!("Updated job {id}");
    Ok(job)
}

pub async fn remove_job(pool: &PgPool, id: i32) -> Result<(), AppError> {
    let deleted: Option<i32> = sqlx::query_scalar("DELETE FROM jobs WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(format!("No job: {id}")));
    }

    debug!("Removed job {id}");
    Ok(())
}
