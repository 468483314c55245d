use super::Error;

/// Error when a catalog query fails during introspection.
///
/// This is attached as context to the underlying driver error so the engine
/// and the SQL text that failed are reported alongside the root cause. Catalog
/// queries are never retried.
#[derive(Debug)]
pub(super) struct CatalogQueryFailed {
    engine: &'static str,
    sql: Box<str>,
}

impl std::error::Error for CatalogQueryFailed {}

impl core::fmt::Display for CatalogQueryFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "catalog query failed on {}: {}", self.engine, self.sql)
    }
}

impl Error {
    /// Creates a catalog query failure, usually passed to [`Error::context`].
    pub fn catalog_query_failed(engine: &'static str, sql: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CatalogQueryFailed(CatalogQueryFailed {
            engine,
            sql: sql.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a catalog query failure.
    pub fn is_catalog_query_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::CatalogQueryFailed(_)))
    }
}
