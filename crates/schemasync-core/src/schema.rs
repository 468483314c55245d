mod change;
pub use change::SchemaChange;

mod column;
pub use column::{Column, DefaultValue};

mod index;
pub use index::{Index, IndexKind};

mod procedure;
pub use procedure::{Param, ParamDirection, Returns, StoredProcedure};

mod relationship;
pub use relationship::{Cardinality, Entity, Relationship};

mod table;
pub use table::{RowCount, Table, TableInfo, TableKind};

mod ty;
pub use ty::LogicalType;
