use super::{ensure_unique_keys, SqlBuildError, SqlValue};

/// `SET` list of a partial UPDATE plus the values for its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    pub set_cols: String,
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Placeholder for the first parameter after the SET values (usually the row key).
    pub fn next_placeholder(&self) -> String {
        format!("${}", self.values.len() + 1)
    }
}

/// Builds the `SET` list for an UPDATE touching only the supplied fields.
///
/// `fields` is ordered: entry `i` becomes `"<column>"=$<i + 1>`. Columns come from
/// `js_to_sql` when the logical name differs from the column name, e.g.
///
/// ```text
/// fields    = [("firstName", "Aliya"), ("age", 32)]
/// js_to_sql = [("firstName", "first_name")]
///
/// set_cols  = "first_name"=$1, "age"=$2
/// values    = ["Aliya", 32]
/// ```
pub fn sql_for_partial_update<K: AsRef<str>>(
    fields: Vec<(K, SqlValue)>,
    js_to_sql: &[(&str, &str)],
) -> Result<PartialUpdate, SqlBuildError> {
    if fields.is_empty() {
        return Err(SqlBuildError::EmptyUpdate);
    }
    ensure_unique_keys(&fields)?;

    let mut cols = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());

    for (idx, (key, value)) in fields.into_iter().enumerate() {
        let key = key.as_ref();
        let column = js_to_sql
            .iter()
            .find(|(logical, _)| *logical == key)
            .map_or(key, |(_, column)| *column);
        cols.push(format!("\"{column}\"=${}", idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate {
        set_cols: cols.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_COLUMNS: &[(&str, &str)] = &[
        ("firstName", "first_name"),
        ("lastName", "last_name"),
        ("isAdmin", "is_admin"),
    ];

    #[test]
    fn test_empty_update_is_rejected() {
        let fields: Vec<(&str, SqlValue)> = vec![];
        assert_eq!(
            sql_for_partial_update(fields, USER_COLUMNS),
            Err(SqlBuildError::EmptyUpdate)
        );
    }

    #[test]
    fn test_translates_mapped_columns_and_keeps_others() {
        let fields = vec![("firstName", SqlValue::from("Aliya")), ("age", SqlValue::from(32))];
        let update = sql_for_partial_update(fields, USER_COLUMNS).unwrap();
        assert_eq!(update.set_cols, r#""first_name"=$1, "age"=$2"#);
        assert_eq!(update.values, vec![SqlValue::from("Aliya"), SqlValue::from(32)]);
    }

    #[test]
    fn test_placeholders_follow_input_order() {
        let fields = vec![
            ("isAdmin", SqlValue::from(true)),
            ("email", SqlValue::from("a@b.com")),
            ("lastName", SqlValue::Text(None)),
            ("firstName", SqlValue::from("Test")),
        ];
        let update = sql_for_partial_update(fields, USER_COLUMNS).unwrap();
        assert_eq!(
            update.set_cols,
            r#""is_admin"=$1, "email"=$2, "last_name"=$3, "first_name"=$4"#
        );
        assert_eq!(update.values.len(), 4);
        assert!(update.values[2].is_null());
        assert_eq!(update.next_placeholder(), "$5");
    }

    #[test]
    fn test_repeated_field_rejected() {
        let fields = vec![("age", SqlValue::from(1)), ("age", SqlValue::from(2))];
        assert_eq!(
            sql_for_partial_update(fields, USER_COLUMNS),
            Err(SqlBuildError::DuplicateKey("age".to_string()))
        );
    }

    #[test]
    fn test_empty_name_map_uses_keys_verbatim() {
        let update = sql_for_partial_update(vec![("title", SqlValue::from("x"))], &[]).unwrap();
        assert_eq!(update.set_cols, r#""title"=$1"#);
        assert_eq!(update.next_placeholder(), "$2");
    }

    #[test]
    fn test_same_input_same_output() {
        let build = || {
            sql_for_partial_update(
                vec![("firstName", SqlValue::from("Test")), ("age", SqlValue::from(18))],
                USER_COLUMNS,
            )
        };
        assert_eq!(build(), build());
    }
}
