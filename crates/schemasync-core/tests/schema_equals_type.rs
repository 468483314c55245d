use schemasync_core::{
    driver::Capability,
    schema::{Column, LogicalType},
};

fn col(ty: LogicalType, length: i64, scale: i64) -> Column {
    Column::new("T", "C", ty).length(length).scale(scale)
}

fn equals(a: &Column, b: &Column) -> bool {
    a.equals_type(b, &Capability::HSQLDB)
}

// ---------------------------------------------------------------------------
// Same type
// ---------------------------------------------------------------------------

#[test]
fn numeric_requires_length_and_scale() {
    assert!(equals(
        &col(LogicalType::Numeric, 10, 2),
        &col(LogicalType::Numeric, 10, 2)
    ));
    assert!(!equals(
        &col(LogicalType::Numeric, 10, 2),
        &col(LogicalType::Numeric, 10, 3)
    ));
    assert!(!equals(
        &col(LogicalType::Decimal, 12, 2),
        &col(LogicalType::Decimal, 10, 2)
    ));
}

#[test]
fn char_requires_length_only() {
    assert!(equals(
        &col(LogicalType::VarChar, 40, 0),
        &col(LogicalType::VarChar, 40, 7)
    ));
    assert!(!equals(
        &col(LogicalType::Char, 1, 0),
        &col(LogicalType::Char, 2, 0)
    ));
}

#[test]
fn other_types_ignore_length_and_scale() {
    for ty in [
        LogicalType::Integer,
        LogicalType::Timestamp,
        LogicalType::Boolean,
        LogicalType::LongVarChar,
        LogicalType::Binary,
    ] {
        assert!(equals(&col(ty, 1, 0), &col(ty, 99, 5)), "ty={ty}");
    }
}

// ---------------------------------------------------------------------------
// Cross type
// ---------------------------------------------------------------------------

#[test]
fn clob_and_longvarchar() {
    assert!(equals(
        &col(LogicalType::Clob, 0, 0),
        &col(LogicalType::LongVarChar, 16, 0)
    ));
}

#[test]
fn blob_and_binary() {
    assert!(equals(
        &col(LogicalType::Binary, 0, 0),
        &col(LogicalType::Blob, 0, 0)
    ));
}

#[test]
fn boolean_and_tinyint_of_length_one() {
    assert!(equals(
        &col(LogicalType::Boolean, 0, 0),
        &col(LogicalType::TinyInt, 1, 0)
    ));
    assert!(!equals(
        &col(LogicalType::Boolean, 0, 0),
        &col(LogicalType::TinyInt, 3, 0)
    ));
}

#[test]
fn unrelated_types() {
    assert!(!equals(
        &col(LogicalType::VarChar, 10, 0),
        &col(LogicalType::Char, 10, 0)
    ));
    assert!(!equals(
        &col(LogicalType::Integer, 0, 0),
        &col(LogicalType::BigInt, 0, 0)
    ));
}

#[test]
fn equivalence_is_symmetric() {
    let samples = LogicalType::ALL
        .into_iter()
        .flat_map(|ty| [col(ty, 1, 0), col(ty, 10, 2)])
        .collect::<Vec<_>>();

    for a in &samples {
        for b in &samples {
            assert_eq!(equals(a, b), equals(b, a), "a={a:?} b={b:?}");
        }
    }
}
