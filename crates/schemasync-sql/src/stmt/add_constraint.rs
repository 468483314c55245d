use super::{IndexDef, Name, Statement};

use schemasync_core::{
    schema::{Index, Table},
    Result,
};

/// `ALTER TABLE ... ADD PRIMARY KEY|UNIQUE (...)`.
#[derive(Debug, Clone)]
pub struct AddConstraint {
    pub table: Name,
    pub constraint: IndexDef,
}

impl Statement {
    /// Adds `index` to `table` as a constraint.
    ///
    /// Fails with an unsupported feature error for normal indices, which
    /// have no constraint form. Check [`IndexDef::is_supported`] first to
    /// skip them instead.
    pub fn add_constraint(table: &Table, index: &Index) -> Result<Self> {
        Ok(AddConstraint {
            table: Name::from(&table.info),
            constraint: IndexDef::from_schema(index)?,
        }
        .into())
    }
}

impl From<AddConstraint> for Statement {
    fn from(value: AddConstraint) -> Self {
        Self::AddConstraint(value)
    }
}
