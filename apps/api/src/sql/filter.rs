use super::{ensure_unique_keys, SqlBuildError, SqlValue};

/// `WHERE` predicate (without the keyword) plus the values for its placeholders.
/// An empty query yields an empty predicate; callers then omit the `WHERE`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterClause {
    pub where_clause: String,
    pub values: Vec<SqlValue>,
}

impl FilterClause {
    pub fn is_empty(&self) -> bool {
        self.where_clause.is_empty()
    }
}

/// How a recognized filter key turns into a comparison.
#[derive(Debug, Clone, Copy)]
enum Predicate {
    /// `<column> ILIKE $n` with the value wrapped as `%value%`.
    Contains(&'static str),
    /// `<column> >= $n`
    AtLeast(&'static str),
    /// `<column> <= $n`
    AtMost(&'static str),
    /// `<column> > 0` when the value is the string `"true"`, `<column> >= 0` otherwise.
    Positive(&'static str),
}

impl Predicate {
    fn render(self, value: SqlValue, placeholder: usize) -> (String, SqlValue) {
        match self {
            Predicate::Contains(column) => (
                format!("{column} ILIKE ${placeholder}"),
                SqlValue::Text(value.as_text().map(|text| format!("%{text}%"))),
            ),
            Predicate::AtLeast(column) => (format!("{column} >= ${placeholder}"), value),
            Predicate::AtMost(column) => (format!("{column} <= ${placeholder}"), value),
            Predicate::Positive(column) => {
                // Only the literal string "true" narrows the result; "false" and
                // anything else compare with >= 0, which every row satisfies.
                let op = match &value {
                    SqlValue::Text(Some(text)) if text == "true" => ">",
                    _ => ">=",
                };
                (format!("{column} {op} ${placeholder}"), SqlValue::Int(Some(0)))
            }
        }
    }
}

struct FilterRule {
    key: &'static str,
    predicate: Predicate,
}

const COMPANY_FILTERS: &[FilterRule] = &[
    FilterRule {
        key: "name",
        predicate: Predicate::Contains("name"),
    },
    FilterRule {
        key: "minEmployees",
        predicate: Predicate::AtLeast("num_employees"),
    },
    FilterRule {
        key: "maxEmployees",
        predicate: Predicate::AtMost("num_employees"),
    },
];

const JOB_FILTERS: &[FilterRule] = &[
    FilterRule {
        key: "title",
        predicate: Predicate::Contains("title"),
    },
    FilterRule {
        key: "minSalary",
        predicate: Predicate::AtLeast("salary"),
    },
    FilterRule {
        key: "hasEquity",
        predicate: Predicate::Positive("equity"),
    },
];

fn build_filter<K: AsRef<str>>(
    query: Vec<(K, SqlValue)>,
    rules: &[FilterRule],
) -> Result<FilterClause, SqlBuildError> {
    let mut clauses = Vec::with_capacity(query.len());
    let mut values = Vec::with_capacity(query.len());

    for (idx, (key, value)) in query.into_iter().enumerate() {
        let key = key.as_ref();
        let rule = rules
            .iter()
            .find(|rule| rule.key == key)
            .ok_or_else(|| SqlBuildError::UnknownFilterKey(key.to_string()))?;
        let (clause, value) = rule.predicate.render(value, idx + 1);
        clauses.push(clause);
        values.push(value);
    }

    Ok(FilterClause {
        where_clause: clauses.join(" AND "),
        values,
    })
}

fn lookup<'a, K: AsRef<str>>(query: &'a [(K, SqlValue)], key: &str) -> Option<&'a SqlValue> {
    query
        .iter()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, value)| value)
}

/// Builds the company search predicate from `name`, `minEmployees` and `maxEmployees`.
///
/// ```text
/// [("name", "Apple"), ("minEmployees", 4), ("maxEmployees", 100)]
///
/// where_clause = name ILIKE $1 AND num_employees >= $2 AND num_employees <= $3
/// values       = ["%Apple%", 4, 100]
/// ```
///
/// Fails with `DuplicateKey` when a key repeats and with `InvalidRange` when both
/// bounds are present and inverted, both before anything is built. Any other key
/// fails with `UnknownFilterKey`.
pub fn sql_for_company_filter<K: AsRef<str>>(
    query: Vec<(K, SqlValue)>,
) -> Result<FilterClause, SqlBuildError> {
    ensure_unique_keys(&query)?;
    let min = lookup(&query, "minEmployees").and_then(SqlValue::as_number);
    let max = lookup(&query, "maxEmployees").and_then(SqlValue::as_number);
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(SqlBuildError::InvalidRange);
        }
    }

    build_filter(query, COMPANY_FILTERS)
}

/// Builds the job search predicate from `title`, `minSalary` and `hasEquity`.
pub fn sql_for_job_filter<K: AsRef<str>>(
    query: Vec<(K, SqlValue)>,
) -> Result<FilterClause, SqlBuildError> {
    ensure_unique_keys(&query)?;
    build_filter(query, JOB_FILTERS)
}
