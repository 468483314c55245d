use jiff::civil;
use pretty_assertions::assert_eq;
use schemasync_core::{
    driver::Capability,
    schema::{Column, DefaultValue, LogicalType, Table, TableInfo},
};
use schemasync_sql::{Serializer, Statement};

fn orders() -> Table {
    let mut table = Table::new(TableInfo::table("ORDERS"));
    table.columns = vec![
        Column::new("ORDERS", "ID", LogicalType::Integer).not_null(),
        Column::new("ORDERS", "TOTAL", LogicalType::Double),
    ];
    table
}

fn add_column(column: &Column) -> String {
    let stmt = Statement::add_column(&orders(), column, None, None, &Capability::HSQLDB).unwrap();
    Serializer::hsqldb().serialize(&stmt)
}

#[test]
fn add_column_appends() {
    let column = Column::new("ORDERS", "NOTE", LogicalType::VarChar).length(200);

    assert_eq!(
        add_column(&column),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"NOTE\" VARCHAR(200) DEFAULT NULL NULL"
    );
}

#[test]
fn add_column_before_existing_column() {
    let table = orders();
    let column = Column::new("ORDERS", "CODE", LogicalType::Char).length(3).not_null();
    let stmt = Statement::add_column(
        &table,
        &column,
        Some(&table.columns[1]),
        Some(&table.columns[0]),
        &Capability::HSQLDB,
    )
    .unwrap();

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"CODE\" CHAR(3) NOT NULL BEFORE \"TOTAL\""
    );
}

#[test]
fn add_column_without_after_ignores_before() {
    let table = orders();
    let column = Column::new("ORDERS", "CODE", LogicalType::Char).length(3).not_null();
    let stmt = Statement::add_column(
        &table,
        &column,
        Some(&table.columns[1]),
        None,
        &Capability::HSQLDB,
    )
    .unwrap();

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"CODE\" CHAR(3) NOT NULL"
    );
}

#[test]
fn alter_column_writes_definition_under_existing_name() {
    let table = orders();
    let column = Column::new("ORDERS", "AMOUNT", LogicalType::Numeric)
        .length(12)
        .scale(4)
        .default_value(DefaultValue::from(0i64))
        .not_null();
    let stmt =
        Statement::alter_column(&table, &column, &table.columns[1], &Capability::HSQLDB).unwrap();

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" ALTER COLUMN \"TOTAL\" NUMERIC(12,4) DEFAULT 0 NOT NULL"
    );
}

#[test]
fn drop_column() {
    let table = orders();
    let stmt = Statement::drop_column(&table, &table.columns[1]);

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" DROP COLUMN \"TOTAL\""
    );
}

// ---------------------------------------------------------------------------
// DEFAULT clause
// ---------------------------------------------------------------------------

#[test]
fn no_default_and_not_null_omits_default() {
    let column = Column::new("ORDERS", "C", LogicalType::Integer).not_null();
    assert_eq!(
        add_column(&column),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"C\" INTEGER NOT NULL"
    );
}

#[test]
fn no_default_and_nullable_emits_default_null() {
    let column = Column::new("ORDERS", "C", LogicalType::Integer);
    assert_eq!(
        add_column(&column),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"C\" INTEGER DEFAULT NULL NULL"
    );
}

#[test]
fn string_default_doubles_quotes() {
    let column = Column::new("ORDERS", "C", LogicalType::VarChar)
        .length(10)
        .default_value(DefaultValue::from("it's"));
    assert_eq!(
        add_column(&column),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"C\" VARCHAR(10) DEFAULT 'it''s' NULL"
    );
}

#[test]
fn temporal_defaults_use_canonical_patterns() {
    let at = civil::date(2023, 7, 4).at(9, 5, 30, 123_000_000);

    let cases = [
        (LogicalType::Date, "DATE DEFAULT '2023-07-04'"),
        (LogicalType::Time, "TIME DEFAULT '09:05:30'"),
        (LogicalType::Timestamp, "TIMESTAMP DEFAULT '2023-07-04 09:05:30'"),
    ];

    for (ty, expected) in cases {
        let column = Column::new("ORDERS", "C", ty)
            .default_value(DefaultValue::from(at))
            .not_null();
        assert_eq!(
            add_column(&column),
            format!("ALTER TABLE \"ORDERS\" ADD COLUMN \"C\" {expected} NOT NULL")
        );
    }
}

#[test]
fn literal_defaults_are_written_verbatim() {
    let column = Column::new("ORDERS", "C", LogicalType::Boolean)
        .default_value(DefaultValue::from(true))
        .not_null();
    assert_eq!(
        add_column(&column),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"C\" BOOLEAN DEFAULT TRUE NOT NULL"
    );

    let column = Column::new("ORDERS", "C", LogicalType::Timestamp)
        .default_value(DefaultValue::Literal("CURRENT_TIMESTAMP".into()));
    assert_eq!(
        add_column(&column),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"C\" TIMESTAMP DEFAULT CURRENT_TIMESTAMP NULL"
    );
}

#[test]
fn identity_columns_never_carry_a_default() {
    let column = Column::new("ORDERS", "C", LogicalType::BigInt)
        .default_value(DefaultValue::from(5i64))
        .auto_increment();
    assert_eq!(
        add_column(&column),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"C\" BIGINT GENERATED BY DEFAULT AS IDENTITY NULL"
    );
}

#[test]
fn character_length_must_fit_the_engine() {
    let widest = Column::new("ORDERS", "NOTE", LogicalType::VarChar).length(i32::MAX as i64);
    assert_eq!(
        add_column(&widest),
        "ALTER TABLE \"ORDERS\" ADD COLUMN \"NOTE\" VARCHAR(2147483647) DEFAULT NULL NULL"
    );

    for length in [i32::MAX as i64 + 1, -1] {
        let column = Column::new("ORDERS", "CODE", LogicalType::Char).length(length);
        let err = Statement::add_column(&orders(), &column, None, None, &Capability::HSQLDB)
            .unwrap_err();

        assert!(err.is_invalid_schema(), "length={length}");
        assert_eq!(
            err.to_string(),
            format!(
                "invalid schema: column `CODE` of table `ORDERS` has length {length}; \
                 HSQLDB allows 0 to 2147483647"
            )
        );
    }
}
