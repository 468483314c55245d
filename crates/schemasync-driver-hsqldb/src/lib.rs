mod catalog;
mod procedure;

mod relationship;
pub use relationship::{infer_relationships, ExportedKey};

use schemasync_core::{
    async_trait,
    driver::{Capability, Connection, Dbms, ProgressMonitor, TableMetaOptions, Value},
    schema::{
        Relationship, SchemaChange, StoredProcedure, Table, TableInfo, TableKind,
    },
    Error, Result,
};
use schemasync_sql::{self as sql, stmt::IndexDef, Statement};

use jiff::civil;
use tracing::debug;
use url::Url;

/// The HSQLDB engine.
#[derive(Debug, Clone)]
pub struct Hsqldb {
    /// Connection URL, without any `jdbc:` prefix.
    url: String,

    /// Schema whose stored procedures are listed.
    schema: String,
}

impl Hsqldb {
    pub const DEFAULT_SCHEMA: &'static str = "PUBLIC";

    /// Create a new HSQLDB engine from a connection URL such as
    /// `hsqldb:mem:test` or `jdbc:hsqldb:hsql://localhost/db`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let stripped = url_str.strip_prefix("jdbc:").unwrap_or(&url_str);

        let url = Url::parse(stripped).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "hsqldb" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `hsqldb` scheme; url={url_str}"
            )));
        }

        Ok(Self {
            url: url.into(),
            schema: Self::DEFAULT_SCHEMA.to_string(),
        })
    }

    /// Sets the schema stored procedures are read from.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
}

#[async_trait]
impl Dbms for Hsqldb {
    fn capability(&self) -> &'static Capability {
        &Capability::HSQLDB
    }

    fn generate_ddl(&self, change: SchemaChange<'_>) -> Result<Option<String>> {
        let capability = self.capability();

        let stmt = match change {
            SchemaChange::CreateTable(table) => Statement::create_table(table, capability)?,
            SchemaChange::DropTable(info) => Statement::drop_table(info),
            SchemaChange::AddColumn {
                table,
                column,
                before,
                after,
            } => Statement::add_column(table, column, before, after, capability)?,
            SchemaChange::AlterColumn {
                table,
                column,
                existing,
            } => Statement::alter_column(table, column, existing, capability)?,
            SchemaChange::DropColumn { table, column } => Statement::drop_column(table, column),
            SchemaChange::CreateIndex { table, index } => {
                if !IndexDef::is_supported(index) {
                    debug!(
                        table = table.name(),
                        index = %index.name,
                        "skipping index without a constraint form"
                    );
                    return Ok(None);
                }

                Statement::add_constraint(table, index)?
            }
            SchemaChange::DropIndex { table, index } => {
                Statement::drop_constraint(table, index, capability)
            }
        };

        Ok(Some(sql::Serializer::hsqldb().serialize(&stmt)))
    }

    async fn table_infos(
        &self,
        conn: &mut dyn Connection,
        kinds: &[TableKind],
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<TableInfo>> {
        catalog::table_infos(conn, kinds, progress).await
    }

    async fn table_metadata(
        &self,
        conn: &mut dyn Connection,
        info: &TableInfo,
        options: TableMetaOptions,
    ) -> Result<Table> {
        catalog::table_metadata(conn, info, options).await
    }

    async fn tables_metadata(
        &self,
        conn: &mut dyn Connection,
        infos: &[TableInfo],
        options: TableMetaOptions,
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<Table>> {
        catalog::tables_metadata(conn, infos, options, progress).await
    }

    async fn stored_procedures(
        &self,
        conn: &mut dyn Connection,
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<StoredProcedure>> {
        procedure::stored_procedures(conn, &self.schema, progress).await
    }

    async fn entity_relationships(
        &self,
        conn: &mut dyn Connection,
        infos: &[TableInfo],
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<Relationship>> {
        relationship::entity_relationships(conn, infos, progress).await
    }

    async fn server_time(&self, conn: &mut dyn Connection) -> Result<civil::DateTime> {
        let sql = self.capability().server_time_query;
        let rows = catalog::fetch(conn, sql, &[]).await?;

        let Some(row) = rows.first() else {
            return Err(Error::invalid_result("server time probe returned no rows"));
        };

        match row.get_at(0)? {
            Value::DateTime(value) => Ok(*value),
            Value::String(value) => Ok(value.trim().parse::<civil::DateTime>()?),
            value => Err(Error::invalid_result(format!(
                "server time probe returned a non date-time value; value={value:?}"
            ))),
        }
    }
}
