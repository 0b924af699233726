pub mod company;
pub mod job;

use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// Keeps an explicit JSON `null` apart from an absent field:
/// absent -> `None`, `null` -> `Some(None)`, value -> `Some(Some(v))`.
/// Pair with `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn validate_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub(crate) fn validate_url(field: &str, value: &str) -> Result<(), AppError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(()),
        _ => Err(AppError::Validation(format!("{field} must be an http(s) URL"))),
    }
}
