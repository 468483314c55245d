mod adapter;
pub use adapter::Adapter;

pub use schemasync_core::{
    driver::{self, Capability, Connection, Dbms, ProgressMonitor, TableMetaOptions},
    schema, Error, Result,
};

pub use schemasync_core::async_trait;

#[cfg(feature = "hsqldb")]
pub use schemasync_driver_hsqldb as hsqldb;
