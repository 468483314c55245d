use pretty_assertions::assert_eq;
use schemasync_core::{
    driver::Capability,
    schema::{Column, Index, IndexKind, LogicalType, Table, TableInfo},
};
use schemasync_sql::{stmt::IndexDef, Serializer, Statement};

fn orders() -> Table {
    let mut table = Table::new(TableInfo::table("ORDERS"));
    table.columns = vec![
        Column::new("ORDERS", "ID", LogicalType::Integer).not_null(),
        Column::new("ORDERS", "CODE", LogicalType::VarChar).length(20),
    ];
    table
}

#[test]
fn add_primary_key() {
    let index = Index::primary_key(["ID"]);
    let stmt = Statement::add_constraint(&orders(), &index).unwrap();

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" ADD PRIMARY KEY (\"ID\")"
    );
}

#[test]
fn add_unique() {
    let index = Index::new("U_CODE", IndexKind::Unique, ["CODE", "ID"]);
    let stmt = Statement::add_constraint(&orders(), &index).unwrap();

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" ADD UNIQUE (\"CODE\", \"ID\")"
    );
}

#[test]
fn normal_index_has_no_constraint_form() {
    let index = Index::new("IDX_CODE", IndexKind::Normal, ["CODE"]);
    assert!(!IndexDef::is_supported(&index));

    let err = Statement::add_constraint(&orders(), &index).unwrap_err();
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: only primary keys and unique indices are supported"
    );
}

#[test]
fn drop_primary_key_uses_engine_constraint_name() {
    let index = Index::primary_key(["ID"]);
    let stmt = Statement::drop_constraint(&orders(), &index, &Capability::HSQLDB);

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" DROP CONSTRAINT \"PK\""
    );
}

#[test]
fn drop_named_constraint() {
    let index = Index::new("SYS_IDX_46", IndexKind::Unique, ["CODE"]);
    let stmt = Statement::drop_constraint(&orders(), &index, &Capability::HSQLDB);

    assert_eq!(
        Serializer::hsqldb().serialize(&stmt),
        "ALTER TABLE \"ORDERS\" DROP CONSTRAINT \"SYS_IDX_46\""
    );
}
