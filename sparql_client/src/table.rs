//! Conversion of SPARQL JSON results into a [`Table`] of strings.
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// An error raised when SPARQL JSON results can not be converted into a [`Table`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TableError {
    /// A key expected in the SPARQL JSON results is absent
    #[error("missing key {0:?} in SPARQL results")]
    MissingKey(String),
    /// A member of the SPARQL JSON results has the wrong JSON type
    #[error("expected {expected} at {path:?} in SPARQL results")]
    UnexpectedType {
        /// Path of the offending member
        path: String,
        /// What was expected there
        expected: &'static str,
    },
    /// A row does not have as many values as there are columns
    #[error("row {row} has {found} values, but {expected} columns were declared")]
    ShapeMismatch {
        /// Index of the offending row
        row: usize,
        /// Number of declared columns
        expected: usize,
        /// Number of values in the row
        found: usize,
    },
}

/// Rows of string values under a header of column labels.
///
/// Every row has exactly as many values as there are columns.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking that every row has one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != columns.len())
        {
            return Err(TableError::ShapeMismatch {
                row,
                expected: columns.len(),
                found: values.len(),
            });
        }
        Ok(Table { columns, rows })
    }

    /// The column labels.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows, in result order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this table has no row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// The value at `row` in the column labelled `column`.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|values| values[col].as_str())
    }

    /// All values of the column labelled `column`.
    pub fn column(&self, column: &str) -> Option<Vec<&str>> {
        let col = self.column_index(column)?;
        Some(self.rows.iter().map(|values| values[col].as_str()).collect())
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Consume this table, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}

/// Tab-separated values, header first.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join("\t"))?;
        for values in &self.rows {
            writeln!(f, "{}", values.join("\t"))?;
        }
        Ok(())
    }
}

/// Convert SPARQL JSON results into a [`Table`] labelled with `columns`.
///
/// Each binding of `results.bindings` produces one row,
/// made of the `value` of each of its variables, in the binding's own key order.
///
/// # Errors
///
/// - [`TableError::MissingKey`] if `results`, `bindings` or a `value` is absent,
/// - [`TableError::UnexpectedType`] if one of them has the wrong JSON type,
/// - [`TableError::ShapeMismatch`] if a binding does not have exactly `columns.len()` variables
///   (which happens in particular with variables left unbound by `OPTIONAL`).
pub fn tabularize<S: AsRef<str>>(results: &Value, columns: &[S]) -> Result<Table, TableError> {
    let bindings = results
        .get("results")
        .ok_or_else(|| TableError::MissingKey("results".into()))?
        .get("bindings")
        .ok_or_else(|| TableError::MissingKey("results.bindings".into()))?
        .as_array()
        .ok_or_else(|| TableError::UnexpectedType {
            path: "results.bindings".into(),
            expected: "an array",
        })?;
    let columns: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();

    let mut rows = Vec::with_capacity(bindings.len());
    for (i, binding) in bindings.iter().enumerate() {
        let binding = binding
            .as_object()
            .ok_or_else(|| TableError::UnexpectedType {
                path: format!("results.bindings[{i}]"),
                expected: "an object",
            })?;
        let row = binding
            .iter()
            .map(|(var, descriptor)| {
                let path = || format!("results.bindings[{i}].{var}.value");
                match descriptor.get("value") {
                    Some(Value::String(value)) => Ok(value.clone()),
                    Some(_) => Err(TableError::UnexpectedType {
                        path: path(),
                        expected: "a string",
                    }),
                    None => Err(TableError::MissingKey(path())),
                }
            })
            .collect::<Result<Vec<String>, TableError>>()?;
        if row.len() != columns.len() {
            return Err(TableError::ShapeMismatch {
                row: i,
                expected: columns.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }
    Ok(Table { columns, rows })
}
