use schemasync_core::{
    driver::{Capability, Connection, ProgressMonitor, Row, Rows, TableMetaOptions, Value},
    schema::{
        Column, DefaultValue, Index, IndexKind, LogicalType, RowCount, Table, TableInfo,
        TableKind,
    },
    Error, Result,
};
use schemasync_sql::{stmt::Name, Serializer};

use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, info};

const COLUMNS: &str = "SELECT COLUMN_NAME, COLUMN_DEF, DATA_TYPE, COLUMN_SIZE, DECIMAL_DIGITS, IS_NULLABLE \
     FROM INFORMATION_SCHEMA.SYSTEM_COLUMNS";

const PRIMARY_KEYS: &str =
    "SELECT COLUMN_NAME, PK_NAME FROM INFORMATION_SCHEMA.SYSTEM_PRIMARYKEYS";

const INDICES: &str =
    "SELECT INDEX_NAME, COLUMN_NAME, NON_UNIQUE FROM INFORMATION_SCHEMA.SYSTEM_INDEXINFO";

/// Runs a catalog query and drains its rows.
///
/// Failures carry the engine name and SQL text as context.
pub(crate) async fn fetch(
    conn: &mut dyn Connection,
    sql: &str,
    params: &[Value],
) -> Result<Vec<Row>> {
    debug!(sql, params = params.len(), "catalog query");

    let rows = conn.query(sql, params).await.and_then(Rows::collect_rows);
    rows.map_err(|err| err.context(Error::catalog_query_failed(Capability::HSQLDB.name, sql)))
}

pub(crate) async fn table_infos(
    conn: &mut dyn Connection,
    kinds: &[TableKind],
    progress: &mut dyn ProgressMonitor,
) -> Result<Vec<TableInfo>> {
    progress.begin_task("Reading tables", None);

    let mut kinds = kinds.to_vec();
    kinds.sort();
    kinds.dedup();

    if kinds.is_empty() {
        progress.done();
        return Ok(vec![]);
    }

    let placeholders = vec!["?"; kinds.len()].join(", ");
    let sql = format!(
        "SELECT TABLE_SCHEM, TABLE_NAME, TABLE_TYPE FROM INFORMATION_SCHEMA.SYSTEM_TABLES \
         WHERE TABLE_TYPE IN ({placeholders})"
    );
    let params = kinds
        .iter()
        .map(|kind| Value::from(kind.as_str()))
        .collect::<Vec<_>>();

    let mut infos = vec![];

    for row in fetch(conn, &sql, &params).await? {
        if progress.is_canceled() {
            break;
        }

        let kind = match row.get_str("TABLE_TYPE")? {
            "TABLE" => TableKind::Table,
            "VIEW" => TableKind::View,
            _ => continue,
        };

        if !kinds.contains(&kind) {
            continue;
        }

        infos.push(TableInfo {
            kind,
            schema: row.get_opt_str("TABLE_SCHEM")?.map(str::to_string),
            name: row.get_str("TABLE_NAME")?.to_string(),
        });
    }

    progress.done();

    infos.sort();
    info!(tables = infos.len(), "read table list");
    Ok(infos)
}

pub(crate) async fn tables_metadata(
    conn: &mut dyn Connection,
    infos: &[TableInfo],
    options: TableMetaOptions,
    progress: &mut dyn ProgressMonitor,
) -> Result<Vec<Table>> {
    progress.begin_task("Reading table metadata", Some(infos.len()));

    let mut tables = Vec::with_capacity(infos.len());

    for info in infos {
        if progress.is_canceled() {
            break;
        }

        progress.set_task_name(&info.name);
        tables.push(table_metadata(conn, info, options).await?);
        progress.worked(1);
    }

    progress.done();

    info!(tables = tables.len(), "read table metadata");
    Ok(tables)
}

/// Assembles one table's metadata with a fixed sequence of catalog queries.
pub(crate) async fn table_metadata(
    conn: &mut dyn Connection,
    info: &TableInfo,
    options: TableMetaOptions,
) -> Result<Table> {
    let filter = TableFilter::new(info);
    let mut table = Table::new(info.clone());

    let auto_increment = load_auto_increment(conn, info).await?;
    table.columns = load_columns(conn, &filter, info, &auto_increment).await?;

    let (primary_key_name, primary_key) = load_primary_key(conn, &filter).await?;

    if options.indices {
        if !primary_key.is_empty() {
            table
                .indices
                .push(Index::new(primary_key_name, IndexKind::PrimaryKey, &primary_key));
        }

        table
            .indices
            .extend(load_indices(conn, &filter, &primary_key).await?);
    }

    if options.row_count {
        table.row_count = load_row_count(conn, info).await?;
    }

    debug!(
        table = %info.name,
        columns = table.columns.len(),
        indices = table.indices.len(),
        row_count = ?table.row_count.known(),
        "assembled table metadata"
    );

    Ok(table)
}

/// `WHERE` clause selecting one table's rows from a catalog view.
struct TableFilter {
    sql: &'static str,
    params: Vec<Value>,
}

impl TableFilter {
    fn new(info: &TableInfo) -> Self {
        match &info.schema {
            Some(schema) => Self {
                sql: " WHERE TABLE_NAME = ? AND TABLE_SCHEM = ?",
                params: vec![Value::from(&info.name[..]), Value::from(&schema[..])],
            },
            None => Self {
                sql: " WHERE TABLE_NAME = ?",
                params: vec![Value::from(&info.name[..])],
            },
        }
    }

    fn query(&self, select: &str, order_by: &str) -> String {
        format!("{select}{} ORDER BY {order_by}", self.sql)
    }
}

/// Engines report identity columns through result set metadata only, so a
/// zero-row projection of the table is read for its column flags.
async fn load_auto_increment(
    conn: &mut dyn Connection,
    info: &TableInfo,
) -> Result<HashMap<String, bool>> {
    let sql = format!("SELECT * FROM {} WHERE 1 = 0", quoted_table(info));

    debug!(sql = %sql, "catalog query");
    let rows = conn
        .query(&sql, &[])
        .await
        .map_err(|err| err.context(Error::catalog_query_failed(Capability::HSQLDB.name, &sql)))?;

    Ok(rows
        .columns()
        .iter()
        .map(|column| (column.name.clone(), column.auto_increment))
        .collect())
}

async fn load_columns(
    conn: &mut dyn Connection,
    filter: &TableFilter,
    info: &TableInfo,
    auto_increment: &HashMap<String, bool>,
) -> Result<Vec<Column>> {
    let sql = filter.query(COLUMNS, "ORDINAL_POSITION");

    fetch(conn, &sql, &filter.params)
        .await?
        .iter()
        .map(|row| -> Result<Column> {
            let name = row.get_str("COLUMN_NAME")?;
            let code = i32::try_from(row.get_i64("DATA_TYPE")?).map_err(|_| {
                Error::invalid_result(format!("column `{name}` has an out of range type code"))
            })?;

            Ok(Column {
                table: info.name.clone(),
                name: name.to_string(),
                caption: String::new(),
                ty: LogicalType::from_code(code)?,
                length: row.get_i64("COLUMN_SIZE")?,
                scale: row.get_i64("DECIMAL_DIGITS")?,
                default: row.get_opt_str("COLUMN_DEF")?.and_then(decode_default),
                nullable: row.get_opt_str("IS_NULLABLE")? == Some("YES"),
                auto_increment: auto_increment.get(name).copied().unwrap_or(false),
            })
        })
        .collect()
}

/// Returns the primary key's constraint name and its columns in key order.
async fn load_primary_key(
    conn: &mut dyn Connection,
    filter: &TableFilter,
) -> Result<(String, Vec<String>)> {
    let sql = filter.query(PRIMARY_KEYS, "KEY_SEQ");

    let mut name = Index::PRIMARY_KEY_NAME.to_string();
    let mut columns = vec![];

    for row in fetch(conn, &sql, &filter.params).await? {
        columns.push(row.get_str("COLUMN_NAME")?.to_string());

        if let Some(pk_name) = row.get_opt_str("PK_NAME")? {
            name = pk_name.to_string();
        }
    }

    Ok((name, columns))
}

/// Reads unique and normal indices, leaving out columns that belong to the
/// primary key.
async fn load_indices(
    conn: &mut dyn Connection,
    filter: &TableFilter,
    primary_key: &[String],
) -> Result<Vec<Index>> {
    let sql = filter.query(INDICES, "INDEX_NAME, ORDINAL_POSITION");

    let mut groups: IndexMap<(String, IndexKind), Vec<String>> = IndexMap::new();

    for row in fetch(conn, &sql, &filter.params).await? {
        let (Some(index_name), Some(column_name)) =
            (row.get_opt_str("INDEX_NAME")?, row.get_opt_str("COLUMN_NAME")?)
        else {
            continue;
        };

        if primary_key.iter().any(|column| column == column_name) {
            continue;
        }

        let kind = if row.get_bool("NON_UNIQUE")? {
            IndexKind::Normal
        } else {
            IndexKind::Unique
        };

        let columns = groups
            .entry((index_name.to_string(), kind))
            .or_default();

        if !columns.iter().any(|column| column == column_name) {
            columns.push(column_name.to_string());
        }
    }

    Ok(groups
        .into_iter()
        .map(|((name, kind), columns)| Index::new(name, kind, columns))
        .collect())
}

async fn load_row_count(conn: &mut dyn Connection, info: &TableInfo) -> Result<RowCount> {
    let sql = format!("SELECT COUNT(*) FROM {}", quoted_table(info));

    let Some(row) = fetch(conn, &sql, &[]).await?.into_iter().next() else {
        return Ok(RowCount::Unknown);
    };

    match row.get_at(0)? {
        Value::I64(count) => u64::try_from(*count).map(RowCount::Known).map_err(|_| {
            Error::invalid_result(format!(
                "row count of `{}` is negative; value={count}",
                info.name
            ))
        }),
        Value::Null => Ok(RowCount::Unknown),
        value => Err(Error::invalid_result(format!(
            "row count of `{}` is not an integer; value={value:?}",
            info.name
        ))),
    }
}

/// Schema-qualified when the catalog reported a schema, so the lookup does
/// not depend on the session's current schema.
fn quoted_table(info: &TableInfo) -> String {
    Serializer::hsqldb().name(&Name::qualified(info))
}

/// Decodes catalog `COLUMN_DEF` text. The `NULL` keyword means no default; a
/// quoted literal is a string default.
pub(crate) fn decode_default(text: &str) -> Option<DefaultValue> {
    let text = text.trim();

    if text.eq_ignore_ascii_case("NULL") {
        return None;
    }

    if let Some(inner) = text
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        return Some(DefaultValue::Text(inner.replace("''", "'")));
    }

    Some(DefaultValue::Literal(text.to_string()))
}
