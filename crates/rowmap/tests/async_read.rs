use rowmap::{
    AsyncCursor, Cancellation, ColumnChecker, Cursor, MemoryCursor, Resolver, Result, ResultSet,
    Row, Value,
};

use tokio_stream::StreamExt;

fn numbers(count: i64) -> MemoryCursor {
    (0..count)
        .fold(ResultSet::new(["n"]), |set, n| set.row([Value::I64(n)]))
        .into_cursor()
}

#[tokio::test]
async fn deserialize_async_reads_all_rows() {
    let mut cursor = numbers(5);
    let items = Resolver::global()
        .resolve_default::<i64>()
        .deserialize_async(&mut cursor, &mut ColumnChecker::new(), None)
        .await
        .unwrap();

    assert_eq!(items, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn deserialize_async_honours_cancellation() {
    let cancel = Cancellation::new();
    cancel.cancel();

    let mut cursor = numbers(5);
    let err = Resolver::global()
        .resolve_default::<i64>()
        .deserialize_async(&mut cursor, &mut ColumnChecker::new(), Some(&cancel))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn stream_yields_rows_in_order() {
    let deserializer = Resolver::global().resolve_default::<i64>();
    let mut cursor = numbers(4);
    let mut columns = ColumnChecker::new();

    let items: Vec<i64> = deserializer
        .stream(&mut cursor, &mut columns, None)
        .collect::<Result<_>>()
        .await
        .unwrap();

    assert_eq!(items, vec![0, 1, 2, 3]);
    assert!(columns.report().is_some());
}

#[tokio::test]
async fn stream_stops_between_rows_when_cancelled() {
    let deserializer = Resolver::global().resolve_default::<i64>();
    let cancel = Cancellation::new();
    let mut cursor = numbers(10);
    let mut columns = ColumnChecker::new();

    let stream = deserializer.stream(&mut cursor, &mut columns, Some(cancel.clone()));
    tokio::pin!(stream);

    assert_eq!(stream.next().await.unwrap().unwrap(), 0);
    assert_eq!(stream.next().await.unwrap().unwrap(), 1);

    cancel.cancel();
    assert!(stream.next().await.unwrap().unwrap_err().is_cancelled());
    assert!(stream.next().await.is_none());
}

#[test]
fn lazy_rows_honour_cancellation() {
    let deserializer = Resolver::global().resolve_default::<i64>();
    let cancel = Cancellation::new();
    let mut cursor = numbers(10);
    let mut columns = ColumnChecker::new();

    let mut rows = deserializer
        .rows(&mut cursor, &mut columns)
        .with_cancellation(cancel.clone());

    assert_eq!(rows.next().unwrap().unwrap(), 0);
    cancel.cancel();
    assert!(rows.next().unwrap().unwrap_err().is_cancelled());
    assert!(rows.next().is_none());
}

#[test]
fn lazy_rows_advance_on_demand() {
    let deserializer = Resolver::global().resolve_default::<i64>();
    let mut cursor = numbers(10);
    let mut columns = ColumnChecker::new();

    let first_three: Vec<i64> = deserializer
        .rows(&mut cursor, &mut columns)
        .take(3)
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(first_three, vec![0, 1, 2]);

    // The cursor is left on the third row.
    assert_eq!(cursor.value(0).unwrap(), Value::I64(2));
    assert!(Cursor::advance(&mut cursor).unwrap());
}

struct SlowCursor {
    inner: MemoryCursor,
}

impl Row for SlowCursor {
    fn field_count(&self) -> usize {
        self.inner.field_count()
    }

    fn column_name(&self, ordinal: usize) -> Option<&str> {
        self.inner.column_name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        self.inner.value(ordinal)
    }
}

#[rowmap::async_trait]
impl AsyncCursor for SlowCursor {
    async fn advance(&mut self) -> Result<bool> {
        tokio::task::yield_now().await;
        AsyncCursor::advance(&mut self.inner).await
    }
}

#[tokio::test]
async fn reads_from_suspending_cursor() {
    let mut cursor = SlowCursor { inner: numbers(3) };
    let items = Resolver::global()
        .resolve_default::<Option<i64>>()
        .deserialize_async(&mut cursor, &mut ColumnChecker::new(), None)
        .await
        .unwrap();

    assert_eq!(items, vec![Some(0), Some(1), Some(2)]);
}

#[tokio::test]
async fn deserialize_async_is_send() {
    let handle = tokio::spawn(async {
        let mut cursor = numbers(2);
        Resolver::global()
            .resolve_default::<i64>()
            .deserialize_async(&mut cursor, &mut ColumnChecker::new(), None)
            .await
    });

    assert_eq!(handle.await.unwrap().unwrap(), vec![0, 1]);
}
