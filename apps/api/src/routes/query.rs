use serde::Serialize;

use crate::errors::AppError;
use crate::sql::SqlValue;

/// Body returned by DELETE routes.
#[derive(Debug, Serialize)]
pub struct Deleted<T> {
    pub deleted: T,
}

/// Turns raw query-string pairs into an ordered filter.
///
/// Keys listed in `numeric_keys` must parse as integers; every other value stays
/// text. Unknown keys pass through untouched so the clause builder can name them.
pub fn parse_filter_query(
    pairs: Vec<(String, String)>,
    numeric_keys: &[&str],
) -> Result<Vec<(String, SqlValue)>, AppError> {
    pairs
        .into_iter()
        .map(|(key, raw)| {
            if numeric_keys.contains(&key.as_str()) {
                let n = raw
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| AppError::Validation(format!("{key} must be an integer")))?;
                Ok((key, SqlValue::from(n)))
            } else {
                Ok((key, SqlValue::from(raw)))
            }
        })
        .collect()
}
