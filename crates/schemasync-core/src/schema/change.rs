use super::{Column, Index, Table, TableInfo};

/// A single schema modification, as requested by a schema diff driver.
///
/// Engines turn each change into at most one DDL statement; see
/// [`Dbms::generate_ddl`](crate::Dbms::generate_ddl).
#[derive(Debug, Clone, Copy)]
pub enum SchemaChange<'a> {
    CreateTable(&'a Table),

    DropTable(&'a TableInfo),

    /// Adds `column`. When `after` is given the column is inserted
    /// positionally, before the existing column `before`.
    AddColumn {
        table: &'a Table,
        column: &'a Column,
        before: Option<&'a Column>,
        after: Option<&'a Column>,
    },

    /// Redefines the existing column `existing` as `column`.
    AlterColumn {
        table: &'a Table,
        column: &'a Column,
        existing: &'a Column,
    },

    DropColumn {
        table: &'a Table,
        column: &'a Column,
    },

    CreateIndex {
        table: &'a Table,
        index: &'a Index,
    },

    DropIndex {
        table: &'a Table,
        index: &'a Index,
    },
}
