use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// A single positional parameter.
///
/// Every variant carries its own `Option` so a SQL `NULL` still binds with the
/// column's parameter type (`NULL::int4` for `salary`, `NULL::text` for
/// `logo_url`, ...). Postgres rejects untyped-text nulls assigned to numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Int(Option<i32>),
    Float(Option<f64>),
    Bool(Option<bool>),
}

impl SqlValue {
    #[cfg(test)]
    pub(crate) fn is_null(&self) -> bool {
        matches!(
            self,
            SqlValue::Text(None) | SqlValue::Int(None) | SqlValue::Float(None) | SqlValue::Bool(None)
        )
    }

    /// Numeric view used for range checks. Numeric-looking text is accepted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SqlValue::Int(v) => v.map(f64::from),
            SqlValue::Float(v) => *v,
            SqlValue::Text(v) => v.as_deref().and_then(|s| s.trim().parse().ok()),
            SqlValue::Bool(_) => None,
        }
    }

    /// Textual view used when a value is rewritten into a LIKE pattern.
    pub fn as_text(&self) -> Option<String> {
        match self {
            SqlValue::Text(v) => v.clone(),
            SqlValue::Int(v) => v.map(|n| n.to_string()),
            SqlValue::Float(v) => v.map(|n| n.to_string()),
            SqlValue::Bool(v) => v.map(|b| b.to_string()),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(Some(value))
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(Some(value))
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(value: Option<i32>) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(Some(value))
    }
}

impl From<Option<f64>> for SqlValue {
    fn from(value: Option<f64>) -> Self {
        SqlValue::Float(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(Some(value))
    }
}

/// Binds `values` onto `query` in order, one per placeholder.
pub fn bind_values<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    values: &[SqlValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    values
        .iter()
        .cloned()
        .fold(query, |query, value| match value {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Int(v) => query.bind(v),
            SqlValue::Float(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
        })
}
