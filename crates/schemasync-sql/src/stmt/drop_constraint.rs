use super::{Name, Statement};

use schemasync_core::{
    driver::Capability,
    schema::{Index, Table},
};

/// A statement to drop a named table constraint.
#[derive(Debug, Clone)]
pub struct DropConstraint {
    pub table: Name,

    /// Name of the constraint.
    pub name: String,
}

impl Statement {
    /// Drops the constraint backing `index`.
    ///
    /// The catalog reports unnamed primary keys as
    /// [`Index::PRIMARY_KEY_NAME`]; the engine knows them under
    /// [`Capability::primary_key_constraint_name`].
    pub fn drop_constraint(table: &Table, index: &Index, capability: &Capability) -> Self {
        let name = if index.name == Index::PRIMARY_KEY_NAME {
            capability.primary_key_constraint_name.to_string()
        } else {
            index.name.clone()
        };

        DropConstraint {
            table: Name::from(&table.info),
            name,
        }
        .into()
    }
}

impl From<DropConstraint> for Statement {
    fn from(value: DropConstraint) -> Self {
        Self::DropConstraint(value)
    }
}
