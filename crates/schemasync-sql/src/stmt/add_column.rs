use super::{ColumnDef, Name, Statement};

use schemasync_core::{
    driver::Capability,
    schema::{Column, Table},
    Result,
};

/// A statement to add a column to a table.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Name of the table to add the column to.
    pub table: Name,

    /// Column definition.
    pub column: ColumnDef,

    /// When set, the new column is placed before this existing column.
    pub before: Option<String>,
}

impl Statement {
    /// Adds a column to a table.
    ///
    /// The column is positioned before `before` only when `after` is also
    /// given, i.e. when the caller is inserting between two columns. Otherwise
    /// it is appended.
    pub fn add_column(
        table: &Table,
        column: &Column,
        before: Option<&Column>,
        after: Option<&Column>,
        capability: &Capability,
    ) -> Result<Self> {
        let before = match (before, after) {
            (Some(before), Some(_)) => Some(before.name.clone()),
            _ => None,
        };

        Ok(AddColumn {
            table: Name::from(&table.info),
            column: ColumnDef::from_schema(column, capability)?,
            before,
        }
        .into())
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
