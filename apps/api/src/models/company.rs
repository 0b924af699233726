use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::{nullable, validate_non_empty, validate_url};
use crate::sql::SqlValue;

/// Columns selected for every company read; field names line up with `Company`.
pub const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// Logical update keys whose column names differ.
pub const COMPANY_JS_TO_SQL: &[(&str, &str)] = &[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// A company together with its open jobs.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_non_empty("handle", &self.handle)?;
        validate_non_empty("name", &self.name)?;
        validate_num_employees(self.num_employees)?;
        if let Some(url) = &self.logo_url {
            validate_url("logoUrl", url)?;
        }
        Ok(())
    }
}

/// Partial update body. `handle` is immutable; nullable columns accept an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub num_employees: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub logo_url: Option<Option<String>>,
}

impl CompanyUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_non_empty("name", name)?;
        }
        if let Some(num_employees) = self.num_employees {
            validate_num_employees(num_employees)?;
        }
        if let Some(Some(url)) = &self.logo_url {
            validate_url("logoUrl", url)?;
        }
        Ok(())
    }

    /// Supplied fields in declaration order, keyed by their JSON names.
    pub fn into_fields(self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::new();
        if let Some(name) = self.name {
            fields.push(("name", SqlValue::from(name)));
        }
        if let Some(description) = self.description {
            fields.push(("description", SqlValue::from(description)));
        }
        if let Some(num_employees) = self.num_employees {
            fields.push(("numEmployees", SqlValue::from(num_employees)));
        }
        if let Some(logo_url) = self.logo_url {
            fields.push(("logoUrl", SqlValue::from(logo_url)));
        }
        fields
    }
}

fn validate_num_employees(num_employees: Option<i32>) -> Result<(), AppError> {
    match num_employees {
        Some(n) if n < 0 => Err(AppError::Validation(
            "numEmployees must be greater than or equal to 0".to_string(),
        )),
        _ => Ok(()),
    }
}
