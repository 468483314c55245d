use super::{ColumnDef, IndexDef, Name, Statement};

use schemasync_core::{driver::Capability, schema::Table, Result};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Inline primary key and unique constraints
    pub constraints: Vec<IndexDef>,
}

impl Statement {
    /// Creates a table with its columns and every index that can be written
    /// as a constraint. Normal indices are left out.
    pub fn create_table(table: &Table, capability: &Capability) -> Result<Self> {
        table.verify()?;

        Ok(CreateTable {
            name: Name::from(&table.info),
            columns: table
                .columns
                .iter()
                .map(|column| ColumnDef::from_schema(column, capability))
                .collect::<Result<_>>()?,
            constraints: table
                .indices
                .iter()
                .filter(|index| IndexDef::is_supported(index))
                .map(IndexDef::from_schema)
                .collect::<Result<_>>()?,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
