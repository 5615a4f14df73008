use tests::prelude::*;

use pretty_assertions::assert_eq;

type Pair = KeyValuePair<i32, String>;

fn int_string_export() -> MappingExport<Pair> {
    let mut export = MappingExport::<Pair>::declarative();
    export
        .for_property("Key", |config| {
            config.alias("Int");
        })
        .unwrap()
        .for_property("Value", |config| {
            config.alias("String");
        })
        .unwrap();
    export
}

#[test]
fn int_and_string_columns_into_pairs() {
    let mut cursor = LoggingCursor::new([result_set!(["Int", "String"]; [1, "varchar"])]);

    let pairs = Resolver::global()
        .resolve(&int_string_export())
        .deserialize(&mut cursor, &mut ColumnChecker::new())
        .unwrap();

    assert_eq!(pairs, vec![KeyValuePair::new(1, "varchar".to_string())]);
    assert_eq!(cursor.rows_read(), 1);
}

#[test]
fn physical_column_order_does_not_matter() {
    let mut cursor = LoggingCursor::new([result_set!(
        ["String", "Int"];
        ["one", 1],
        ["two", 2],
    )]);

    let pairs = Resolver::global()
        .resolve(&int_string_export())
        .deserialize(&mut cursor, &mut ColumnChecker::new())
        .unwrap();

    assert_eq!(
        pairs,
        vec![
            KeyValuePair::new(1, "one".to_string()),
            KeyValuePair::new(2, "two".to_string()),
        ]
    );
    assert_eq!(cursor.cells_read(), vec![1, 0, 1, 0]);
}

#[test]
fn processor_with_explicit_aliases() {
    let processor = Processor::<Pair>::builder("select Int, String from pairs")
        .property("Key", |config| {
            config.alias("Int");
        })
        .property("Value", |config| {
            config.alias("String");
        })
        .build()
        .unwrap();

    let mut cursor = LoggingCursor::new([result_set!(["Int", "String"]; [7, "seven"])]);
    assert_eq!(
        processor.execute(&mut cursor).unwrap(),
        vec![KeyValuePair::new(7, "seven".to_string())]
    );
}
