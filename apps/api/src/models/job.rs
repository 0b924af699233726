use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models::{nullable, validate_non_empty};
use crate::sql::SqlValue;

/// Columns selected for every job read. `equity` is NUMERIC in storage and read back as f64.
pub const JOB_COLUMNS: &str = "id, title, salary, equity::FLOAT8 AS equity, company_handle";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<f64>,
    pub company_handle: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<f64>,
    pub company_handle: String,
}

impl NewJob {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_non_empty("title", &self.title)?;
        validate_non_empty("companyHandle", &self.company_handle)?;
        validate_salary(self.salary)?;
        validate_equity(self.equity)
    }
}

/// Partial update body. `id` and `companyHandle` are immutable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub equity: Option<Option<f64>>,
}

impl JobUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            validate_non_empty("title", title)?;
        }
        if let Some(salary) = self.salary {
            validate_salary(salary)?;
        }
        if let Some(equity) = self.equity {
            validate_equity(equity)?;
        }
        Ok(())
    }

    /// Supplied fields in declaration order. Logical names equal column names.
    pub fn into_fields(self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::new();
        if let Some(title) = self.title {
            fields.push(("title", SqlValue::from(title)));
        }
        if let Some(salary) = self.salary {
            fields.push(("salary", SqlValue::from(salary)));
        }
        if let Some(equity) = self.equity {
            fields.push(("equity", SqlValue::from(equity)));
        }
        fields
    }
}

fn validate_salary(salary: Option<i32>) -> Result<(), AppError> {
    match salary {
        Some(s) if s < 0 => Err(AppError::Validation(
            "salary must be greater than or equal to 0".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_equity(equity: Option<f64>) -> Result<(), AppError> {
    match equity {
        Some(e) if !(0.0..=1.0).contains(&e) => Err(AppError::Validation(
            "equity must be between 0 and 1".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_null_fields() {
        let update: JobUpdate =
            serde_json::from_str(r#"{"title": "updated", "salary": null, "equity": null}"#).unwrap();
        assert!(update.validate().is_ok());
        assert_eq!(
            update.into_fields(),
            vec![
                ("title", SqlValue::from("updated")),
                ("salary", SqlValue::Int(None)),
                ("equity", SqlValue::Float(None)),
            ]
        );
    }

    #[test]
    fn test_update_rejects_company_handle() {
        assert!(serde_json::from_str::<JobUpdate>(r#"{"companyHandle": "c2"}"#).is_err());
    }

    #[test]
    fn test_new_job_requires_title_and_company() {
        assert!(serde_json::from_str::<NewJob>(r#"{"equity": 0.001}"#).is_err());

        let job: NewJob = serde_json::from_str(
            r#"{"title": "new", "salary": 100000, "equity": 0.025, "companyHandle": "c1"}"#,
        )
        .unwrap();
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_equity_bounds() {
        assert!(validate_equity(Some(1.0)).is_ok());
        assert!(validate_equity(Some(0.0)).is_ok());
        assert!(validate_equity(None).is_ok());
        assert!(validate_equity(Some(1.5)).is_err());
        assert!(validate_equity(Some(-0.1)).is_err());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let update = JobUpdate {
            salary: Some(Some(-5)),
            ..Default::default()
        };
        assert!(matches!(update.validate(), Err(AppError::Validation(_))));
    }
}
