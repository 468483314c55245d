use serde::{Deserialize, Serialize};

/// A one-to-many relationship inferred from a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The referenced side; cardinality is always [`Cardinality::One`].
    pub principal: Entity,

    /// The referencing side; cardinality is always [`Cardinality::Many`].
    pub dependent: Entity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub table: String,
    pub columns: Vec<String>,
    pub cardinality: Cardinality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cardinality {
    One,
    Many,
}

impl Relationship {
    pub fn one_to_many(
        principal_table: impl Into<String>,
        principal_columns: Vec<String>,
        dependent_table: impl Into<String>,
        dependent_columns: Vec<String>,
    ) -> Self {
        Self {
            principal: Entity {
                table: principal_table.into(),
                columns: principal_columns,
                cardinality: Cardinality::One,
            },
            dependent: Entity {
                table: dependent_table.into(),
                columns: dependent_columns,
                cardinality: Cardinality::Many,
            },
        }
    }
}
