use schemasync_core::{
    schema::{Index, IndexKind},
    Error, Result,
};

/// An inline `PRIMARY KEY (...)` or `UNIQUE (...)` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub kind: ConstraintKind,

    /// Constrained columns, in key order.
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
}

impl IndexDef {
    /// Returns `true` if `index` can be written as a table constraint.
    pub fn is_supported(index: &Index) -> bool {
        !index.kind.is_normal()
    }

    pub(crate) fn from_schema(index: &Index) -> Result<IndexDef> {
        let kind = match index.kind {
            IndexKind::PrimaryKey => ConstraintKind::PrimaryKey,
            IndexKind::Unique => ConstraintKind::Unique,
            IndexKind::Normal => {
                return Err(Error::unsupported_feature(
                    "only primary keys and unique indices are supported",
                ))
            }
        };

        Ok(IndexDef {
            kind,
            columns: index.columns.clone(),
        })
    }
}
