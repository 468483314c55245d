use crate::schema::{Column, LogicalType};

#[derive(Debug)]
pub struct Capability {
    /// Engine name, used in error messages and logs.
    pub name: &'static str,

    /// Character wrapped around every identifier in emitted SQL.
    pub identifier_delimiter: char,

    /// Largest length a CHAR or VARCHAR column may declare.
    pub max_varchar_length: u64,

    /// Statement returning the server's current time as a single value.
    pub server_time_query: &'static str,

    /// Constraint name the engine gives primary keys. A primary key dropped
    /// under [`Index::PRIMARY_KEY_NAME`](crate::schema::Index::PRIMARY_KEY_NAME)
    /// is dropped under this name instead.
    pub primary_key_constraint_name: &'static str,

    /// Column storage types supported by the database
    pub storage_types: StorageTypes,

    /// Cross-type pairs considered equivalent by
    /// [`Column::equals_type`].
    pub type_equivalences: &'static [TypeEquivalence],
}

#[derive(Debug)]
pub struct StorageTypes {
    /// Native type used for logical `CLOB` columns.
    pub clob: LogicalType,

    /// Native type used for logical `BLOB` columns.
    pub blob: LogicalType,
}

/// One entry of an engine's cross-type compatibility table.
///
/// A column of type `left` is equivalent to a column of type `right`; when
/// `right_length` is set, only if the `right` column has exactly that
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEquivalence {
    pub left: LogicalType,
    pub right: LogicalType,
    pub right_length: Option<i64>,
}

impl Capability {
    /// HSQLDB capabilities.
    pub const HSQLDB: Self = Self {
        name: "HSQLDB",
        identifier_delimiter: '"',
        max_varchar_length: i32::MAX as u64,
        server_time_query: "CALL current_timestamp",
        primary_key_constraint_name: "PK",
        storage_types: StorageTypes::HSQLDB,
        type_equivalences: TypeEquivalence::HSQLDB,
    };

    /// The type a column of logical type `ty` is stored as.
    pub fn storage_type(&self, ty: LogicalType) -> LogicalType {
        match ty {
            LogicalType::Clob => self.storage_types.clob,
            LogicalType::Blob => self.storage_types.blob,
            ty => ty,
        }
    }
}

impl StorageTypes {
    /// HSQLDB has no native large-object types; both are aliased.
    pub const HSQLDB: StorageTypes = StorageTypes {
        clob: LogicalType::LongVarChar,
        blob: LogicalType::Binary,
    };
}

impl TypeEquivalence {
    pub const HSQLDB: &'static [TypeEquivalence] = &[
        TypeEquivalence::new(LogicalType::Clob, LogicalType::LongVarChar),
        TypeEquivalence::new(LogicalType::Blob, LogicalType::Binary),
        TypeEquivalence::new(LogicalType::Boolean, LogicalType::TinyInt).with_right_length(1),
    ];

    pub const fn new(left: LogicalType, right: LogicalType) -> Self {
        Self {
            left,
            right,
            right_length: None,
        }
    }

    pub const fn with_right_length(mut self, length: i64) -> Self {
        self.right_length = Some(length);
        self
    }

    /// Returns `true` if this entry relates `left` to `right`, in that
    /// direction.
    pub fn matches(&self, left: &Column, right: &Column) -> bool {
        left.ty == self.left
            && right.ty == self.right
            && self
                .right_length
                .map_or(true, |length| right.length == length)
    }
}
