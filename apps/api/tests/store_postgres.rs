//! Runs the stores against a live PostgreSQL when `TEST_DATABASE_URL` is set.
//! Tables are created as TEMP tables on a single-connection pool, so nothing
//! outlives the test and tests do not see each other's rows.

use jobly_api::companies::store::{
    create_company, find_companies, get_company, remove_company, update_company,
};
use jobly_api::errors::AppError;
use jobly_api::jobs::store::{create_job, find_jobs, get_job, update_job};
use jobly_api::models::company::{CompanyUpdate, NewCompany};
use jobly_api::models::job::{JobUpdate, NewJob};
use jobly_api::sql::SqlValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

async fn test_pool() -> Option<PgPool> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return None;
    };
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("connect test database");

    for statement in [
        r#"CREATE TEMP TABLE companies (
               handle VARCHAR(25) PRIMARY KEY CHECK (handle = lower(handle)),
               name TEXT UNIQUE NOT NULL,
               num_employees INTEGER CHECK (num_employees >= 0),
               description TEXT NOT NULL,
               logo_url TEXT)"#,
        r#"CREATE TEMP TABLE jobs (
               id SERIAL PRIMARY KEY,
               title TEXT NOT NULL,
               salary INTEGER CHECK (salary >= 0),
               equity NUMERIC CHECK (equity <= 1.0),
               company_handle VARCHAR(25) NOT NULL
                   REFERENCES companies ON DELETE CASCADE)"#,
        r#"INSERT INTO companies (handle, name, num_employees, description, logo_url)
           VALUES ('c1', 'C1', 1, 'Desc1', 'http://c1.img'),
                  ('c2', 'C2', 2, 'Desc2', 'http://c2.img'),
                  ('c3', 'C3', 3, 'Desc3', 'http://c3.img')"#,
        r#"INSERT INTO jobs (title, salary, equity, company_handle)
           VALUES ('j1', 1, '0.01', 'c1'),
                  ('j2', 2, '0.02', 'c2'),
                  ('j3', 3, '0', 'c3')"#,
    ] {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("prepare fixtures");
    }

    Some(pool)
}

fn filter(pairs: &[(&str, SqlValue)]) -> Vec<(String, SqlValue)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[tokio::test]
async fn has_equity_true_keeps_only_positive_equity() {
    let Some(pool) = test_pool().await else { return };

    let jobs = find_jobs(
        &pool,
        filter(&[("hasEquity", "true".into()), ("minSalary", 2.into())]),
    )
    .await
    .expect("find jobs");

    let titles: Vec<_> = jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["j2"]);
}

// `hasEquity=false` compares equity >= 0, which every job satisfies.
#[tokio::test]
async fn has_equity_false_matches_every_job() {
    let Some(pool) = test_pool().await else { return };

    let jobs = find_jobs(
        &pool,
        filter(&[("hasEquity", "false".into()), ("minSalary", 1.into())]),
    )
    .await
    .expect("find jobs");

    assert_eq!(jobs.len(), 3);
}

#[tokio::test]
async fn company_filters_by_name_and_size() {
    let Some(pool) = test_pool().await else { return };

    let all = find_companies(&pool, vec![]).await.expect("find all");
    assert_eq!(all.len(), 3);

    let companies = find_companies(
        &pool,
        filter(&[("name", "c".into()), ("minEmployees", 2.into()), ("maxEmployees", 3.into())]),
    )
    .await
    .expect("find companies");
    let handles: Vec<_> = companies.iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(handles, vec!["c2", "c3"]);

    let err = find_companies(&pool, filter(&[("minEmployees", 3.into()), ("maxEmployees", 1.into())]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn company_crud() {
    let Some(pool) = test_pool().await else { return };

    let new = NewCompany {
        handle: "new".into(),
        name: "New".into(),
        description: "New Description".into(),
        num_employees: Some(50),
        logo_url: Some("http://new.img".into()),
    };
    let company = create_company(&pool, &new).await.expect("create");
    assert_eq!(company.num_employees, Some(50));

    let dupe = create_company(&pool, &new).await.unwrap_err();
    assert!(matches!(dupe, AppError::Duplicate(msg) if msg == "Duplicate company: new"));

    let updated = update_company(
        &pool,
        "new",
        CompanyUpdate {
            num_employees: Some(None),
            logo_url: Some(None),
            ..Default::default()
        },
    )
    .await
    .expect("update");
    assert_eq!(updated.num_employees, None);
    assert_eq!(updated.logo_url, None);
    assert_eq!(updated.name, "New");

    let detail = get_company(&pool, "c1").await.expect("get");
    assert_eq!(detail.jobs.len(), 1);

    remove_company(&pool, "new").await.expect("remove");
    assert!(matches!(
        remove_company(&pool, "new").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn job_create_and_update() {
    let Some(pool) = test_pool().await else { return };

    let new = NewJob {
        title: "new".into(),
        salary: Some(100_000),
        equity: Some(0.025),
        company_handle: "c1".into(),
    };
    let job = create_job(&pool, &new).await.expect("create");
    assert_eq!(job.equity, Some(0.025));

    assert!(matches!(create_job(&pool, &new).await, Err(AppError::Duplicate(_))));

    let orphan = NewJob {
        company_handle: "nope".into(),
        ..new.clone()
    };
    assert!(matches!(
        create_job(&pool, &orphan).await,
        Err(AppError::NotFound(msg)) if msg == "No company: nope"
    ));

    let updated = update_job(
        &pool,
        job.id,
        JobUpdate {
            title: Some("updated".into()),
            salary: Some(None),
            equity: Some(None),
        },
    )
    .await
    .expect("update");
    assert_eq!(updated.title, "updated");
    assert_eq!(updated.salary, None);
    assert_eq!(updated.equity, None);
    assert_eq!(updated.company_handle, "c1");

    assert!(matches!(get_job(&pool, 0).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        update_job(&pool, 0, JobUpdate { title: Some("x".into()), ..Default::default() }).await,
        Err(AppError::NotFound(_))
    ));
}
