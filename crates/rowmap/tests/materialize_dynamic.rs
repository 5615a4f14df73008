use rowmap::{ColumnChecker, DynamicRow, Resolver, ResultSet, StrategyKind, Value};

use pretty_assertions::assert_eq;

fn read(set: ResultSet) -> Vec<DynamicRow> {
    let mut cursor = set.into_cursor();
    Resolver::global()
        .resolve_default::<DynamicRow>()
        .deserialize(&mut cursor, &mut ColumnChecker::new())
        .unwrap()
}

#[test]
fn dynamic_rows_use_dynamic_strategy() {
    let deserializer = Resolver::global().resolve_default::<DynamicRow>();
    assert_eq!(deserializer.kind(), StrategyKind::Dynamic);
}

#[test]
fn copies_every_column_in_order() {
    let rows = read(
        ResultSet::new(["Id", "Name", "Score"])
            .row([Value::I32(1), Value::from("ada"), Value::Null])
            .row([Value::I32(2), Value::from("bo"), Value::F64(1.5)]),
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["Id", "Name", "Score"]);
    assert_eq!(rows[0].get("name"), Some(&Value::from("ada")));
    assert_eq!(rows[0].get("score"), Some(&Value::Null));
    assert_eq!(rows[1].get_as::<f64>("Score").unwrap(), Some(1.5));
}

#[test]
fn empty_result_yields_no_rows() {
    assert!(read(ResultSet::new(["Id"])).is_empty());
}

#[test]
fn repeated_column_names_keep_last_value() {
    let rows = read(ResultSet::new(["id", "id"]).row([Value::I32(1), Value::I32(2)]));
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[0].get("id"), Some(&Value::I32(2)));
}

#[test]
fn rows_serialize_to_json() {
    let rows = read(ResultSet::new(["Id"]).row([Value::I64(3)]));
    let json = serde_json::to_string(&rows).unwrap();
    let back: Vec<DynamicRow> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rows);
}
