use crate::catalog::fetch;

use schemasync_core::{
    driver::{Connection, ProgressMonitor, Row, Value},
    schema::{LogicalType, Param, ParamDirection, Returns, StoredProcedure},
    Error, Result,
};

use tracing::{info, warn};

const PROCEDURES: &str = "SELECT P.PROCEDURE_NAME, P.SPECIFIC_NAME, P.REMARKS, R.DATA_TYPE, P.PROCEDURE_TYPE \
     FROM INFORMATION_SCHEMA.SYSTEM_PROCEDURES P \
     JOIN INFORMATION_SCHEMA.ROUTINES R \
     ON P.SPECIFIC_NAME = R.SPECIFIC_NAME AND P.PROCEDURE_SCHEM = R.ROUTINE_SCHEMA \
     WHERE P.PROCEDURE_SCHEM = ? \
     ORDER BY P.PROCEDURE_NAME, P.SPECIFIC_NAME";

const PROCEDURE_COLUMNS: &str = "SELECT COLUMN_NAME, COLUMN_TYPE, DATA_TYPE \
     FROM INFORMATION_SCHEMA.SYSTEM_PROCEDURECOLUMNS \
     WHERE PROCEDURE_SCHEM = ? AND SPECIFIC_NAME = ? \
     ORDER BY ORDINAL_POSITION";

// `PROCEDURE_TYPE` codes
const PROCEDURE_NO_RESULT: i64 = 1;
const PROCEDURE_RETURNS_RESULT: i64 = 2;

// `COLUMN_TYPE` codes
const COLUMN_IN: i64 = 1;
const COLUMN_IN_OUT: i64 = 2;
const COLUMN_RESULT: i64 = 3;
const COLUMN_OUT: i64 = 4;
const COLUMN_RETURN: i64 = 5;

pub(crate) async fn stored_procedures(
    conn: &mut dyn Connection,
    schema: &str,
    progress: &mut dyn ProgressMonitor,
) -> Result<Vec<StoredProcedure>> {
    let rows = fetch(conn, PROCEDURES, &[Value::from(schema)]).await?;

    progress.begin_task("Reading stored procedures", Some(rows.len()));

    let mut procedures = vec![];

    for row in &rows {
        if progress.is_canceled() {
            break;
        }

        let name = row.get_str("PROCEDURE_NAME")?;
        progress.set_task_name(name);

        let mut procedure = StoredProcedure {
            name: name.to_string(),
            description: row.get_opt_str("REMARKS")?.map(str::to_string),
            returns: decode_returns(
                name,
                row.get_i64("PROCEDURE_TYPE")?,
                row.get_opt_str("DATA_TYPE")?,
            ),
            params: vec![],
        };

        let specific_name = row.get_opt_str("SPECIFIC_NAME")?.unwrap_or(name);
        let columns = fetch(
            conn,
            PROCEDURE_COLUMNS,
            &[Value::from(schema), Value::from(specific_name)],
        )
        .await?;

        for column in &columns {
            apply_column(&mut procedure, column)?;
        }

        procedures.push(procedure);
        progress.worked(1);
    }

    progress.done();

    info!(schema, procedures = procedures.len(), "read stored procedures");
    Ok(procedures)
}

/// Classifies a procedure's result from its catalog procedure type and
/// routine data type.
pub(crate) fn decode_returns(name: &str, procedure_type: i64, data_type: Option<&str>) -> Returns {
    match procedure_type {
        PROCEDURE_NO_RESULT => Returns::Void,
        PROCEDURE_RETURNS_RESULT => {
            let Some(data_type) = data_type else {
                warn!(procedure = name, "procedure returns a result of no data type");
                return Returns::Unknown;
            };

            let data_type = strip_precision(data_type);

            // Row types list one data type per column.
            if data_type.split(',').count() > 1 {
                return Returns::ResultSet;
            }

            match normalize_type_name(&data_type).parse::<LogicalType>() {
                Ok(ty) => Returns::Type(ty),
                Err(_) => {
                    warn!(
                        procedure = name,
                        data_type = %data_type,
                        "procedure return type has no logical type"
                    );
                    Returns::Unknown
                }
            }
        }
        _ => Returns::Unknown,
    }
}

/// Removes parenthesised precisions, as in `DECIMAL(10,2)`.
fn strip_precision(data_type: &str) -> String {
    let mut depth = 0usize;

    data_type
        .chars()
        .filter(|&ch| match ch {
            '(' => {
                depth += 1;
                false
            }
            ')' => {
                depth = depth.saturating_sub(1);
                false
            }
            _ => depth == 0,
        })
        .collect()
}

/// Maps catalog type spellings onto logical type names.
fn normalize_type_name(data_type: &str) -> &str {
    const SPELLINGS: [(&str, &str); 5] = [
        ("character", "CHAR"),
        ("bit", "BOOLEAN"),
        ("other", "OBJECT"),
        ("datetime", "TIMESTAMP"),
        ("int", "INTEGER"),
    ];

    let name = data_type.trim();

    SPELLINGS
        .iter()
        .find(|(spelling, _)| spelling.eq_ignore_ascii_case(name))
        .map_or(name, |&(_, canonical)| canonical)
}

/// Folds one procedure column into `procedure`. Return and result columns
/// refine the return flavor; parameter columns are appended in order.
fn apply_column(procedure: &mut StoredProcedure, row: &Row) -> Result<()> {
    let direction = match row.get_i64("COLUMN_TYPE")? {
        COLUMN_RETURN => {
            procedure.returns = Returns::Type(column_type(row)?);
            return Ok(());
        }
        COLUMN_RESULT => {
            procedure.returns = Returns::ResultSet;
            return Ok(());
        }
        COLUMN_IN => ParamDirection::In,
        COLUMN_OUT => ParamDirection::Out,
        COLUMN_IN_OUT => ParamDirection::InOut,
        _ => return Ok(()),
    };

    procedure.params.push(Param {
        direction,
        name: row.get_opt_str("COLUMN_NAME")?.unwrap_or_default().to_string(),
        ty: column_type(row)?,
    });

    Ok(())
}

fn column_type(row: &Row) -> Result<LogicalType> {
    let code = row.get_i64("DATA_TYPE")?;
    let code = i32::try_from(code)
        .map_err(|_| Error::invalid_result(format!("type code {code} is out of range")))?;

    LogicalType::from_code(code)
}
