use super::{Name, Statement};

use schemasync_core::schema::{Column, Table};

#[derive(Debug, Clone)]
pub struct DropColumn {
    pub table: Name,
    pub column: String,
}

impl Statement {
    pub fn drop_column(table: &Table, column: &Column) -> Self {
        DropColumn {
            table: Name::from(&table.info),
            column: column.name.clone(),
        }
        .into()
    }
}

impl From<DropColumn> for Statement {
    fn from(value: DropColumn) -> Self {
        Self::DropColumn(value)
    }
}
