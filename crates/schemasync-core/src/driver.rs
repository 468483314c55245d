mod capability;
pub use capability::{Capability, StorageTypes, TypeEquivalence};

mod progress;
pub use progress::{NoProgress, ProgressMonitor};

mod rows;
pub use rows::{ColumnInfo, Row, Rows};

mod value;
pub use value::Value;

use crate::{
    async_trait,
    schema::{
        Column, Relationship, SchemaChange, StoredProcedure, Table, TableInfo, TableKind,
    },
    Error, Result,
};

use jiff::civil;
use std::fmt::Debug;

/// A borrowed connection to a live database.
///
/// Implemented by whatever executes SQL on behalf of the caller. Engines
/// issue catalog queries and DDL through it and never hold on to it past the
/// call that borrowed it.
#[async_trait]
pub trait Connection: Send {
    /// Runs a query, binding `params` to its `?` placeholders in order.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Executes a statement that returns no rows, returning the number of
    /// rows affected.
    async fn execute(&mut self, sql: &str) -> Result<u64>;
}

/// Which optional parts of a table's metadata to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableMetaOptions {
    /// Read primary key, unique and normal indices.
    pub indices: bool,

    /// Count the table's rows.
    pub row_count: bool,
}

impl TableMetaOptions {
    pub const ALL: Self = Self {
        indices: true,
        row_count: true,
    };
}

/// Everything a schema synchronizer needs from one database engine.
#[async_trait]
pub trait Dbms: Debug + Send + Sync {
    /// Describes the engine's capability, including its type mapping rules.
    fn capability(&self) -> &'static Capability;

    /// Returns `true` if the client-declared column `client` and the
    /// database-reported column `db` have equivalent types.
    fn equals_type(&self, client: &Column, db: &Column) -> bool {
        client.equals_type(db, self.capability())
    }

    /// Generates the DDL statement for `change`. Returns `None` when the
    /// change has no representation on this engine and should be skipped.
    fn generate_ddl(&self, change: SchemaChange<'_>) -> Result<Option<String>>;

    /// Generates and executes the DDL for `change`, returning whether a
    /// statement ran.
    async fn apply(&self, conn: &mut dyn Connection, change: SchemaChange<'_>) -> Result<bool> {
        let Some(sql) = self.generate_ddl(change)? else {
            return Ok(false);
        };

        conn.execute(&sql).await?;
        Ok(true)
    }

    /// Lists catalog tables whose kind is in `kinds`, sorted.
    async fn table_infos(
        &self,
        conn: &mut dyn Connection,
        kinds: &[TableKind],
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<TableInfo>>;

    /// Reads one table's columns and, depending on `options`, its indices
    /// and row count.
    async fn table_metadata(
        &self,
        conn: &mut dyn Connection,
        info: &TableInfo,
        options: TableMetaOptions,
    ) -> Result<Table>;

    /// Reads many tables' metadata, one after the other.
    async fn tables_metadata(
        &self,
        conn: &mut dyn Connection,
        infos: &[TableInfo],
        options: TableMetaOptions,
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<Table>>;

    async fn stored_procedures(
        &self,
        conn: &mut dyn Connection,
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<StoredProcedure>>;

    /// Infers one-to-many relationships between the tables in `infos` from
    /// the catalog's foreign keys.
    async fn entity_relationships(
        &self,
        conn: &mut dyn Connection,
        infos: &[TableInfo],
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<Relationship>>;

    /// The database server's current time.
    async fn server_time(&self, conn: &mut dyn Connection) -> Result<civil::DateTime>;

    /// SQL reading column metadata from the standard information schema.
    fn information_schema_columns_query(&self) -> Result<String> {
        Err(retrospection_unsupported(self.capability()))
    }

    /// SQL reading index metadata from the standard information schema.
    fn information_schema_indices_query(&self) -> Result<String> {
        Err(retrospection_unsupported(self.capability()))
    }

    /// Loads `table`'s indices through the information schema.
    async fn load_indices(&self, _conn: &mut dyn Connection, _table: &mut Table) -> Result<()> {
        Err(retrospection_unsupported(self.capability()))
    }
}

fn retrospection_unsupported(capability: &Capability) -> Error {
    Error::unsupported_feature(format!(
        "{} retrospection is not implemented",
        capability.name
    ))
}
