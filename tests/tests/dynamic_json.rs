use tests::prelude::*;

use rowmap::DynamicRow;

#[test]
fn dynamic_rows_serialize_in_column_order() {
    let mut cursor = LoggingCursor::new([result_set!(
        ["Id", "Name", "Score"];
        [1, "ada", 9.5],
        [2, "brian", Value::Null],
    )]);

    let rows = Resolver::global()
        .resolve_default::<DynamicRow>()
        .deserialize(&mut cursor, &mut ColumnChecker::new())
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("name"), Some(&Value::from("brian")));

    let first = serde_json::to_string(&rows[0]).unwrap();
    assert!(first.find("Id").unwrap() < first.find("Name").unwrap());
    assert!(first.find("Name").unwrap() < first.find("Score").unwrap());

    let names: Vec<_> = rows[0].columns().collect();
    assert_eq!(names, ["Id", "Name", "Score"]);
}
