use crate::{Error, Result};

use schemasync_core::{
    async_trait,
    driver::{Capability, Connection, Dbms, ProgressMonitor, TableMetaOptions},
    schema::{
        Column, Relationship, SchemaChange, StoredProcedure, Table, TableInfo, TableKind,
    },
};

use jiff::civil;
use url::Url;

/// The engine adapter selected for a connection URL.
#[derive(Debug)]
pub enum Adapter {
    #[cfg(feature = "hsqldb")]
    Hsqldb(schemasync_driver_hsqldb::Hsqldb),
}

impl Adapter {
    /// Picks the adapter for `url` by its scheme. A leading `jdbc:` is
    /// ignored.
    pub fn from_url(url: &str) -> Result<Self> {
        let stripped = url.strip_prefix("jdbc:").unwrap_or(url);
        let parsed = Url::parse(stripped)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match parsed.scheme() {
            "hsqldb" => Self::hsqldb(url),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }

    #[cfg(feature = "hsqldb")]
    fn hsqldb(url: &str) -> Result<Self> {
        let driver = schemasync_driver_hsqldb::Hsqldb::new(url)?;
        Ok(Self::Hsqldb(driver))
    }

    #[cfg(not(feature = "hsqldb"))]
    fn hsqldb(_url: &str) -> Result<Self> {
        Err(Error::unsupported_feature("`hsqldb` feature not enabled"))
    }
}

macro_rules! match_db {
    ($self:expr, $driver:pat => $e:expr) => {
        match *$self {
            #[cfg(feature = "hsqldb")]
            Adapter::Hsqldb($driver) => $e,
        }
    };
}

#[async_trait]
impl Dbms for Adapter {
    fn capability(&self) -> &'static Capability {
        match_db!(self, ref driver => driver.capability())
    }

    fn equals_type(&self, client: &Column, db: &Column) -> bool {
        #[allow(unused_variables)]
        let (client, db) = (client, db);
        match_db!(self, ref driver => driver.equals_type(client, db))
    }

    fn generate_ddl(&self, change: SchemaChange<'_>) -> Result<Option<String>> {
        #[allow(unused_variables)]
        let change = change;
        match_db!(self, ref driver => driver.generate_ddl(change))
    }

    async fn apply(&self, conn: &mut dyn Connection, change: SchemaChange<'_>) -> Result<bool> {
        #[allow(unused_variables)]
        let (conn, change) = (conn, change);
        match_db!(self, ref driver => driver.apply(conn, change).await)
    }

    async fn table_infos(
        &self,
        conn: &mut dyn Connection,
        kinds: &[TableKind],
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<TableInfo>> {
        #[allow(unused_variables)]
        let (conn, kinds, progress) = (conn, kinds, progress);
        match_db!(self, ref driver => driver.table_infos(conn, kinds, progress).await)
    }

    async fn table_metadata(
        &self,
        conn: &mut dyn Connection,
        info: &TableInfo,
        options: TableMetaOptions,
    ) -> Result<Table> {
        #[allow(unused_variables)]
        let (conn, info, options) = (conn, info, options);
        match_db!(self, ref driver => driver.table_metadata(conn, info, options).await)
    }

    async fn tables_metadata(
        &self,
        conn: &mut dyn Connection,
        infos: &[TableInfo],
        options: TableMetaOptions,
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<Table>> {
        #[allow(unused_variables)]
        let (conn, infos, options, progress) = (conn, infos, options, progress);
        match_db!(self, ref driver => driver.tables_metadata(conn, infos, options, progress).await)
    }

    async fn stored_procedures(
        &self,
        conn: &mut dyn Connection,
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<StoredProcedure>> {
        #[allow(unused_variables)]
        let (conn, progress) = (conn, progress);
        match_db!(self, ref driver => driver.stored_procedures(conn, progress).await)
    }

    async fn entity_relationships(
        &self,
        conn: &mut dyn Connection,
        infos: &[TableInfo],
        progress: &mut dyn ProgressMonitor,
    ) -> Result<Vec<Relationship>> {
        #[allow(unused_variables)]
        let (conn, infos, progress) = (conn, infos, progress);
        match_db!(self, ref driver => driver.entity_relationships(conn, infos, progress).await)
    }

    async fn server_time(&self, conn: &mut dyn Connection) -> Result<civil::DateTime> {
        #[allow(unused_variables)]
        let conn = conn;
        match_db!(self, ref driver => driver.server_time(conn).await)
    }

    fn information_schema_columns_query(&self) -> Result<String> {
        match_db!(self, ref driver => driver.information_schema_columns_query())
    }

    fn information_schema_indices_query(&self) -> Result<String> {
        match_db!(self, ref driver => driver.information_schema_indices_query())
    }

    async fn load_indices(&self, conn: &mut dyn Connection, table: &mut Table) -> Result<()> {
        #[allow(unused_variables)]
        let (conn, table) = (conn, table);
        match_db!(self, ref driver => driver.load_indices(conn, table).await)
    }
}
