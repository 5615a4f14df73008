use tests::prelude::*;

use rowmap::{Cancellation, DynamicRow, ResultCache};

fn assert_send_sync<T: Send + Sync>() {}

fn assert_send<T: Send>(_: T) {}

#[derive(Debug, Default, Materialize)]
struct User {
    id: i64,
    name: String,
}

#[test]
fn shared_types_are_send_and_sync() {
    assert_send_sync::<Resolver>();
    assert_send_sync::<DeserializeFn<User>>();
    assert_send_sync::<DeserializeFn<DynamicRow>>();
    assert_send_sync::<DeserializeFn<KeyValuePair<i32, String>>>();
    assert_send_sync::<Processor<User>>();
    assert_send_sync::<ResultCache>();
    assert_send_sync::<Cancellation>();
    assert_send_sync::<MappingExport<User>>();
    assert_send_sync::<Error>();
}

#[test]
fn async_reads_are_send() {
    let processor = Processor::<User>::builder("select * from users")
        .build()
        .unwrap();
    let deserializer = Resolver::global().resolve_default::<User>();

    let mut cursor = LoggingCursor::new([result_set!(["id", "name"])]);
    assert_send(processor.execute_async(&mut cursor, None));

    let mut cursor = LoggingCursor::new([result_set!(["id", "name"])]);
    let mut columns = ColumnChecker::new();
    assert_send(deserializer.deserialize_async(&mut cursor, &mut columns, None));
}

#[test]
fn processors_are_shared_across_threads() {
    let processor = std::sync::Arc::new(
        Processor::<User>::builder("select * from users")
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4i64)
        .map(|n| {
            let processor = processor.clone();
            std::thread::spawn(move || {
                let mut cursor =
                    LoggingCursor::new([result_set!(["id", "name"]; [n, format!("user{n}")])]);
                processor.execute(&mut cursor).unwrap()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let users = handle.join().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, n as i64);
        assert_eq!(users[0].name, format!("user{n}"));
    }
}
