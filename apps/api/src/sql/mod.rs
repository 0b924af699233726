// Dynamic SQL fragments: partial UPDATE `SET` lists and search `WHERE` predicates.
// Everything here is pure. Callers splice the fragments into full statements
// and bind `values` in order, so placeholder `$n` always matches `values[n - 1]`.

pub mod filter;
pub mod update;
pub mod value;

pub use filter::{sql_for_company_filter, sql_for_job_filter, FilterClause};
pub use update::{sql_for_partial_update, PartialUpdate};
pub use value::{bind_values, SqlValue};

use thiserror::Error;

/// Validation failures raised while building a fragment.
/// All of them are client errors; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlBuildError {
    #[error("No data")]
    EmptyUpdate,

    #[error("minEmployees cannot be greater than maxEmployees.")]
    InvalidRange,

    #[error("{0} is not a valid query.")]
    UnknownFilterKey(String),

    #[error("{0} can only be given once.")]
    DuplicateKey(String),
}

/// Rejects input naming the same key twice; each key maps to one clause.
fn ensure_unique_keys<K: AsRef<str>, V>(entries: &[(K, V)]) -> Result<(), SqlBuildError> {
    for (idx, (key, _)) in entries.iter().enumerate() {
        let key = key.as_ref();
        if entries[..idx].iter().any(|(seen, _)| seen.as_ref() == key) {
            return Err(SqlBuildError::DuplicateKey(key.to_string()));
        }
    }
    Ok(())
}
