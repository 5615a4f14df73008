use tests::prelude::*;

fn null_int() -> LoggingCursor {
    LoggingCursor::new([result_set!(["Int"]; [Value::Null])])
}

#[test]
fn null_into_optional_int() {
    let values = Resolver::global()
        .resolve_default::<Option<i32>>()
        .deserialize(&mut null_int(), &mut ColumnChecker::new())
        .unwrap();

    assert_eq!(values, vec![None]);
}

#[test]
fn null_into_int_is_invalid_cast() {
    let err = assert_err!(
        Resolver::global()
            .resolve_default::<i32>()
            .deserialize(&mut null_int(), &mut ColumnChecker::new()),
        is_invalid_cast
    );

    assert!(!err.is_coercion());
    assert!(err.to_string().contains("value types cannot accept null"));
}

#[test]
fn mixed_nulls_preserve_positions() {
    let mut cursor = LoggingCursor::new([result_set!(
        ["Int"];
        [1],
        [Value::Null],
        [3],
    )]);

    let values = Resolver::global()
        .resolve_default::<Option<i64>>()
        .deserialize(&mut cursor, &mut ColumnChecker::new())
        .unwrap();

    assert_eq!(values, vec![Some(1), None, Some(3)]);
}

#[test]
fn failure_stops_reading() {
    let mut cursor = LoggingCursor::new([result_set!(
        ["Int"];
        [1],
        [Value::Null],
        [3],
    )]);

    let deserializer = Resolver::global().resolve_default::<i32>();
    let mut columns = ColumnChecker::new();
    let results: Vec<_> = deserializer.rows(&mut cursor, &mut columns).collect();

    assert_eq!(results.len(), 2);
    assert_eq!(*results[0].as_ref().unwrap(), 1);
    assert!(results[1].as_ref().unwrap_err().is_invalid_cast());
    assert_eq!(cursor.rows_read(), 2);
}

#[tokio::test]
async fn async_null_into_int_is_invalid_cast() {
    let mut cursor = null_int();
    assert_err!(
        Resolver::global()
            .resolve_default::<i32>()
            .deserialize_async(&mut cursor, &mut ColumnChecker::new(), None)
            .await,
        is_invalid_cast
    );
}
