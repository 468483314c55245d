mod common;

use common::{RecordingProgress, ScriptedConnection};
use pretty_assertions::assert_eq;
use schemasync_core::{
    driver::{Dbms, NoProgress, Value},
    schema::{Relationship, TableInfo},
};
use schemasync_driver_hsqldb::{infer_relationships, ExportedKey, Hsqldb};
use std::collections::BTreeSet;

const KEY_NAMES: &[&str] = &[
    "PKTABLE_NAME",
    "PKCOLUMN_NAME",
    "FKTABLE_NAME",
    "FKCOLUMN_NAME",
    "KEY_SEQ",
];

fn key(pk_table: &str, pk_column: &str, fk_table: &str, fk_column: &str, seq: i64) -> ExportedKey {
    ExportedKey {
        pk_table: pk_table.into(),
        pk_column: pk_column.into(),
        fk_table: fk_table.into(),
        fk_column: fk_column.into(),
        key_seq: seq,
    }
}

fn key_row(pk_table: &str, pk_column: &str, fk_table: &str, fk_column: &str, seq: i64) -> Vec<Value> {
    vec![
        pk_table.into(),
        pk_column.into(),
        fk_table.into(),
        fk_column.into(),
        seq.into(),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn groups_composite_keys() {
    let tables = BTreeSet::from(["T1", "T2", "T3", "T4"]);
    let keys = [
        key("T1", "A", "T2", "X", 1),
        key("T1", "B", "T2", "Y", 2),
        key("T3", "C", "T4", "Z", 1),
    ];

    assert_eq!(
        infer_relationships(&tables, &keys),
        vec![
            Relationship::one_to_many("T1", strings(&["A", "B"]), "T2", strings(&["X", "Y"])),
            Relationship::one_to_many("T3", strings(&["C"]), "T4", strings(&["Z"])),
        ]
    );
}

#[test]
fn sequence_restart_splits_keys_between_the_same_tables() {
    let tables = BTreeSet::from(["CUSTOMER", "ORDERS"]);
    let keys = [
        key("CUSTOMER", "ID", "ORDERS", "BILL_TO", 1),
        key("CUSTOMER", "ID", "ORDERS", "SHIP_TO", 1),
    ];

    assert_eq!(
        infer_relationships(&tables, &keys),
        vec![
            Relationship::one_to_many("CUSTOMER", strings(&["ID"]), "ORDERS", strings(&["BILL_TO"])),
            Relationship::one_to_many("CUSTOMER", strings(&["ID"]), "ORDERS", strings(&["SHIP_TO"])),
        ]
    );
}

#[test]
fn keys_outside_the_table_set_are_dropped() {
    let tables = BTreeSet::from(["T1", "T2"]);
    let keys = [
        key("T1", "A", "AUDIT", "X", 1),
        key("T1", "B", "AUDIT", "Y", 2),
        key("T1", "A", "T2", "X", 1),
    ];

    assert_eq!(
        infer_relationships(&tables, &keys),
        vec![Relationship::one_to_many(
            "T1",
            strings(&["A"]),
            "T2",
            strings(&["X"])
        )]
    );
}

#[test]
fn no_keys_no_relationships() {
    let tables = BTreeSet::from(["T1"]);
    assert!(infer_relationships(&tables, Vec::<ExportedKey>::new().iter()).is_empty());
}

#[tokio::test]
async fn queries_exported_keys_per_table() {
    let mut conn = ScriptedConnection::new();
    conn.answer_for(
        "SYSTEM_CROSSREFERENCE",
        vec!["T1".into()],
        KEY_NAMES,
        vec![
            key_row("T1", "A", "T2", "X", 1),
            key_row("T1", "B", "T2", "Y", 2),
        ],
    )
    .answer_for(
        "SYSTEM_CROSSREFERENCE",
        vec!["T3".into()],
        KEY_NAMES,
        vec![
            key_row("T3", "C", "T4", "Z", 1),
            key_row("T3", "C", "V_T4", "Z", 1),
        ],
    );

    let infos = [
        TableInfo::table("T4"),
        TableInfo::table("T3"),
        TableInfo::view("V_T4"),
        TableInfo::table("T2"),
        TableInfo::table("T1"),
    ];
    let relationships = Hsqldb::new("hsqldb:mem:test")
        .unwrap()
        .entity_relationships(&mut conn, &infos, &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(
        relationships,
        vec![
            Relationship::one_to_many("T1", strings(&["A", "B"]), "T2", strings(&["X", "Y"])),
            Relationship::one_to_many("T3", strings(&["C"]), "T4", strings(&["Z"])),
        ]
    );

    // Tables only, in name order; views are never asked for keys.
    let asked = conn
        .queries
        .iter()
        .map(|(_, params)| params.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        asked,
        vec![
            vec![Value::from("T1")],
            vec![Value::from("T2")],
            vec![Value::from("T3")],
            vec![Value::from("T4")],
        ]
    );
}

#[tokio::test]
async fn cancel_stops_before_the_next_table() {
    let mut conn = ScriptedConnection::new();
    conn.answer_for(
        "SYSTEM_CROSSREFERENCE",
        vec!["T1".into()],
        KEY_NAMES,
        vec![key_row("T1", "A", "T2", "X", 1)],
    );
    let mut progress = RecordingProgress::cancel_after(1);

    let relationships = Hsqldb::new("hsqldb:mem:test")
        .unwrap()
        .entity_relationships(
            &mut conn,
            &[TableInfo::table("T1"), TableInfo::table("T2")],
            &mut progress,
        )
        .await
        .unwrap();

    assert_eq!(relationships.len(), 1);
    assert_eq!(conn.queries.len(), 1);
    assert_eq!(
        progress.events,
        ["begin Reading relationships Some(2)", "task T1", "done"]
    );
}

#[tokio::test]
async fn failed_key_query_is_reported() {
    let mut conn = ScriptedConnection::new();
    conn.fail("SYSTEM_CROSSREFERENCE", "connection closed");

    let err = Hsqldb::new("hsqldb:mem:test")
        .unwrap()
        .entity_relationships(&mut conn, &[TableInfo::table("T1")], &mut NoProgress)
        .await
        .unwrap_err();

    assert!(err.is_catalog_query_failed());
    assert!(err.is_driver_operation_failed());
}
