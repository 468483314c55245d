mod add_column;
pub use add_column::AddColumn;

mod add_constraint;
pub use add_constraint::AddConstraint;

mod alter_column;
pub use alter_column::AlterColumn;

mod column_def;
pub use column_def::{ColumnDef, Literal};

mod create_table;
pub use create_table::CreateTable;

mod drop_column;
pub use drop_column::DropColumn;

mod drop_constraint;
pub use drop_constraint::DropConstraint;

mod drop_table;
pub use drop_table::DropTable;

mod index_def;
pub use index_def::{ConstraintKind, IndexDef};

mod name;
pub use name::Name;

/// A DDL statement, ready to be serialized.
#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    AddConstraint(AddConstraint),
    AlterColumn(AlterColumn),
    CreateTable(CreateTable),
    DropColumn(DropColumn),
    DropConstraint(DropConstraint),
    DropTable(DropTable),
}
