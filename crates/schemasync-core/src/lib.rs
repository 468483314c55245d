pub mod driver;
pub use driver::{Capability, Connection, Dbms, ProgressMonitor, TableMetaOptions};

mod error;
pub use error::Error;

pub mod schema;

/// A Result type alias that uses Schemasync's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
