use crate::catalog::fetch;

use schemasync_core::{
    driver::{Connection, ProgressMonitor, Row, Value},
    schema::{Relationship, TableInfo},
    Result,
};

use std::collections::BTreeSet;
use tracing::{debug, info};

const EXPORTED_KEYS: &str =
    "SELECT PKTABLE_NAME, PKCOLUMN_NAME, FKTABLE_NAME, FKCOLUMN_NAME, KEY_SEQ \
     FROM INFORMATION_SCHEMA.SYSTEM_CROSSREFERENCE \
     WHERE PKTABLE_NAME = ? \
     ORDER BY FKTABLE_NAME, FK_NAME, KEY_SEQ";

/// One column pair of a foreign key, seen from the referenced table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedKey {
    pub pk_table: String,
    pub pk_column: String,
    pub fk_table: String,
    pub fk_column: String,

    /// Position of this column pair within its key, starting at 1.
    pub key_seq: i64,
}

impl ExportedKey {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            pk_table: row.get_str("PKTABLE_NAME")?.to_string(),
            pk_column: row.get_str("PKCOLUMN_NAME")?.to_string(),
            fk_table: row.get_str("FKTABLE_NAME")?.to_string(),
            fk_column: row.get_str("FKCOLUMN_NAME")?.to_string(),
            key_seq: row.get_i64("KEY_SEQ")?,
        })
    }
}

/// Groups exported keys, in catalog order, into one-to-many relationships.
///
/// A key ends when the next row starts over at sequence 1 or names a
/// different pair of tables, and at the end of `keys`. Keys whose tables are
/// not both in `tables` are dropped.
pub fn infer_relationships<'a>(
    tables: &BTreeSet<&str>,
    keys: impl IntoIterator<Item = &'a ExportedKey>,
) -> Vec<Relationship> {
    let mut relationships = vec![];
    let mut pending: Option<Pending<'a>> = None;

    for key in keys {
        let starts_new_key = pending.as_ref().is_some_and(|current| {
            key.key_seq == 1
                || current.pk_table != key.pk_table
                || current.fk_table != key.fk_table
        });

        if starts_new_key {
            if let Some(done) = pending.take() {
                done.flush(tables, &mut relationships);
            }
        }

        let current = pending.get_or_insert_with(|| Pending {
            pk_table: &key.pk_table,
            fk_table: &key.fk_table,
            pk_columns: vec![],
            fk_columns: vec![],
        });
        current.pk_columns.push(key.pk_column.clone());
        current.fk_columns.push(key.fk_column.clone());
    }

    if let Some(done) = pending {
        done.flush(tables, &mut relationships);
    }

    relationships
}

/// Column pairs collected for the key being read.
struct Pending<'a> {
    pk_table: &'a str,
    fk_table: &'a str,
    pk_columns: Vec<String>,
    fk_columns: Vec<String>,
}

impl Pending<'_> {
    fn flush(self, tables: &BTreeSet<&str>, relationships: &mut Vec<Relationship>) {
        if !tables.contains(self.pk_table) || !tables.contains(self.fk_table) {
            debug!(
                pk_table = self.pk_table,
                fk_table = self.fk_table,
                "dropping relationship outside the table set"
            );
            return;
        }

        relationships.push(Relationship::one_to_many(
            self.pk_table,
            self.pk_columns,
            self.fk_table,
            self.fk_columns,
        ));
    }
}

pub(crate) async fn entity_relationships(
    conn: &mut dyn Connection,
    infos: &[TableInfo],
    progress: &mut dyn ProgressMonitor,
) -> Result<Vec<Relationship>> {
    // Views carry no keys.
    let tables = infos
        .iter()
        .filter(|info| info.is_table())
        .map(|info| &info.name[..])
        .collect::<BTreeSet<_>>();

    progress.begin_task("Reading relationships", Some(tables.len()));

    let mut relationships = vec![];

    for &table in &tables {
        if progress.is_canceled() {
            break;
        }

        progress.set_task_name(table);

        let keys = fetch(conn, EXPORTED_KEYS, &[Value::from(table)])
            .await?
            .iter()
            .map(ExportedKey::from_row)
            .collect::<Result<Vec<_>>>()?;

        relationships.extend(infer_relationships(&tables, &keys));
        progress.worked(1);
    }

    progress.done();

    info!(
        tables = tables.len(),
        relationships = relationships.len(),
        "inferred relationships"
    );
    Ok(relationships)
}
