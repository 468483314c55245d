use super::{Column, Index};
use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Identity of a catalog table or view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableInfo {
    pub kind: TableKind,

    /// Owning schema, when the catalog reports one.
    pub schema: Option<String>,

    /// Name of the table
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TableKind {
    Table,
    View,
}

/// A database table, as declared by a client or as read back from a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub info: TableInfo,

    /// The table's columns, in declaration order.
    pub columns: Vec<Column>,

    pub indices: Vec<Index>,

    pub row_count: RowCount,
}

/// Number of rows in a table, when it was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowCount {
    #[default]
    Unknown,
    Known(u64),
}

impl TableInfo {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            kind: TableKind::Table,
            schema: None,
            name: name.into(),
        }
    }

    pub fn view(name: impl Into<String>) -> Self {
        Self {
            kind: TableKind::View,
            schema: None,
            name: name.into(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn is_table(&self) -> bool {
        matches!(self.kind, TableKind::Table)
    }
}

/// Tables sort by schema, then name, then kind.
impl Ord for TableInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.schema
            .cmp(&other.schema)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for TableInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TableKind {
    /// The `TABLE_TYPE` spelling used by catalogs.
    pub const fn as_str(self) -> &'static str {
        match self {
            TableKind::Table => "TABLE",
            TableKind::View => "VIEW",
        }
    }
}

impl Table {
    pub fn new(info: TableInfo) -> Self {
        Self {
            info,
            columns: vec![],
            indices: vec![],
            row_count: RowCount::Unknown,
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key(&self) -> Option<&Index> {
        self.indices.iter().find(|index| index.is_primary_key())
    }

    /// Checks the invariants DDL synthesis relies on: every primary-key
    /// column exists and is not nullable.
    pub fn verify(&self) -> Result<()> {
        for index in self.indices.iter().filter(|index| index.is_primary_key()) {
            for name in &index.columns {
                match self.column(name) {
                    None => {
                        return Err(Error::invalid_schema(format!(
                            "primary key `{}` of table `{}` references unknown column `{}`",
                            index.name,
                            self.name(),
                            name
                        )))
                    }
                    Some(column) if column.nullable => {
                        return Err(Error::invalid_schema(format!(
                            "primary key column `{}` of table `{}` is nullable",
                            name,
                            self.name()
                        )))
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}

impl RowCount {
    pub fn is_unknown(self) -> bool {
        matches!(self, RowCount::Unknown)
    }

    pub fn known(self) -> Option<u64> {
        match self {
            RowCount::Known(count) => Some(count),
            RowCount::Unknown => None,
        }
    }
}
