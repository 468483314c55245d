use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index (or constraint) name.
    pub name: String,

    /// What kind of index this is.
    pub kind: IndexKind,

    /// Indexed column names, in key order.
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexKind {
    PrimaryKey,
    Unique,
    Normal,
}

impl Index {
    /// Pseudo-name given to a primary key whose constraint name the catalog
    /// does not report.
    pub const PRIMARY_KEY_NAME: &'static str = "PRIMARY_KEY";

    pub fn new(
        name: impl Into<String>,
        kind: IndexKind,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn primary_key(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(Self::PRIMARY_KEY_NAME, IndexKind::PrimaryKey, columns)
    }

    pub fn is_primary_key(&self) -> bool {
        self.kind.is_primary_key()
    }
}

impl IndexKind {
    pub fn is_primary_key(self) -> bool {
        matches!(self, Self::PrimaryKey)
    }

    pub fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }
}
