use super::{ColumnDef, Name, Statement};

use schemasync_core::{
    driver::Capability,
    schema::{Column, Table},
    Result,
};

/// A statement to redefine an existing column.
#[derive(Debug, Clone)]
pub struct AlterColumn {
    pub table: Name,

    /// Name of the column being altered, as it exists today.
    pub existing: String,

    /// The new definition. Its name is not written.
    pub column: ColumnDef,
}

impl Statement {
    pub fn alter_column(
        table: &Table,
        column: &Column,
        existing: &Column,
        capability: &Capability,
    ) -> Result<Self> {
        Ok(AlterColumn {
            table: Name::from(&table.info),
            existing: existing.name.clone(),
            column: ColumnDef::from_schema(column, capability)?,
        }
        .into())
    }
}

impl From<AlterColumn> for Statement {
    fn from(value: AlterColumn) -> Self {
        Self::AlterColumn(value)
    }
}
