use super::Value;
use crate::{Error, Result};

use jiff::civil;
use std::{fmt, sync::Arc};

/// Result set column metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,

    /// True when the engine generates this column's values.
    pub auto_increment: bool,
}

/// The rows returned by a query, pulled one at a time.
///
/// Column metadata is available up front, even when the query returns no
/// rows.
pub struct Rows {
    columns: Arc<[ColumnInfo]>,
    values: Box<dyn Iterator<Item = Result<Vec<Value>>> + Send>,
}

/// One result row. Values are looked up by column name, ignoring ASCII case.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[ColumnInfo]>,
    values: Vec<Value>,
}

impl Rows {
    pub fn new(
        columns: Vec<ColumnInfo>,
        values: impl Iterator<Item = Result<Vec<Value>>> + Send + 'static,
    ) -> Self {
        Self {
            columns: columns.into(),
            values: Box::new(values),
        }
    }

    /// A result set whose rows are already in memory.
    pub fn from_values(columns: Vec<ColumnInfo>, values: Vec<Vec<Value>>) -> Self {
        Self::new(columns, values.into_iter().map(Ok))
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// Drains the remaining rows, failing on the first bad one.
    pub fn collect_rows(self) -> Result<Vec<Row>> {
        self.collect()
    }
}

impl Iterator for Rows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let values = match self.values.next()? {
            Ok(values) => values,
            Err(err) => return Some(Err(err)),
        };

        if values.len() != self.columns.len() {
            return Some(Err(Error::invalid_result(format!(
                "row has {} values but the result set has {} columns",
                values.len(),
                self.columns.len()
            ))));
        }

        Some(Ok(Row {
            columns: self.columns.clone(),
            values,
        }))
    }
}

impl fmt::Debug for Rows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl Row {
    /// Returns the value of column `name`.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.columns
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(name))
            .map(|index| &self.values[index])
            .ok_or_else(|| Error::invalid_result(format!("column `{name}` not found")))
    }

    /// Reads a string column; `NULL` is `None`.
    pub fn get_opt_str(&self, name: &str) -> Result<Option<&str>> {
        match self.get(name)? {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value)),
            value => Err(mismatch(name, "string", value)),
        }
    }

    /// Reads a string column that must not be `NULL`.
    pub fn get_str(&self, name: &str) -> Result<&str> {
        self.get_opt_str(name)?
            .ok_or_else(|| Error::invalid_result(format!("column `{name}` is NULL")))
    }

    /// Reads an integer column; `NULL` reads as zero.
    pub fn get_i64(&self, name: &str) -> Result<i64> {
        match self.get(name)? {
            Value::Null => Ok(0),
            Value::I64(value) => Ok(*value),
            Value::String(value) => Ok(value.trim().parse()?),
            value => Err(mismatch(name, "integer", value)),
        }
    }

    /// Reads a boolean column; `NULL` reads as false.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        match self.get(name)? {
            Value::Null => Ok(false),
            Value::Bool(value) => Ok(*value),
            Value::I64(value) => Ok(*value != 0),
            Value::String(value) => Ok(value.eq_ignore_ascii_case("true") || value == "1"),
            value => Err(mismatch(name, "boolean", value)),
        }
    }

    /// Reads a date-time column. Textual values are parsed as
    /// `YYYY-MM-DD HH:MM:SS[.fff]`.
    pub fn get_datetime(&self, name: &str) -> Result<civil::DateTime> {
        match self.get(name)? {
            Value::DateTime(value) => Ok(*value),
            Value::String(value) => Ok(value.trim().parse::<civil::DateTime>()?),
            value => Err(mismatch(name, "date-time", value)),
        }
    }

    /// Reads the value at position `index`.
    pub fn get_at(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            Error::invalid_result(format!(
                "column index {index} out of range; width={}",
                self.values.len()
            ))
        })
    }
}

fn mismatch(name: &str, expected: &str, actual: &Value) -> Error {
    Error::invalid_result(format!(
        "column `{name}` is not a {expected}; value={actual:?}"
    ))
}
