use tests::prelude::*;

use rowmap::Cancellation;
use tokio_stream::StreamExt;

fn numbers(count: i64) -> LoggingCursor {
    let mut set = ResultSet::new(["n"]);
    for n in 0..count {
        set = set.row([n]);
    }
    LoggingCursor::new([set])
}

#[tokio::test]
async fn cancelled_before_start_never_advances() {
    let mut cursor = numbers(3);
    let cancel = Cancellation::new();
    cancel.cancel();

    assert_err!(
        Resolver::global()
            .resolve_default::<i64>()
            .deserialize_async(&mut cursor, &mut ColumnChecker::new(), Some(&cancel))
            .await,
        is_cancelled
    );

    assert!(cursor.ops().is_empty());
}

#[tokio::test]
async fn cancelled_mid_stream_stops_at_row_boundary() {
    let mut cursor = numbers(5);
    let log = cursor.ops_log_handle();
    let cancel = Cancellation::new();
    let deserializer = Resolver::global().resolve_default::<i64>();
    let mut columns = ColumnChecker::new();

    {
        let stream = deserializer.stream(&mut cursor, &mut columns, Some(cancel.clone()));
        tokio::pin!(stream);

        assert_eq!(stream.next().await.unwrap().unwrap(), 0);
        assert_eq!(stream.next().await.unwrap().unwrap(), 1);

        cancel.cancel();
        assert!(stream.next().await.unwrap().unwrap_err().is_cancelled());
        assert!(stream.next().await.is_none());
    }

    let advances = log
        .lock()
        .unwrap()
        .iter()
        .filter(|op| matches!(op, CursorOp::Advance(_)))
        .count();
    assert_eq!(advances, 2);
}

#[tokio::test]
async fn processor_execution_honours_cancellation() {
    let processor = Processor::<i64>::builder("select n from numbers")
        .build()
        .unwrap();

    let cancel = Cancellation::new();
    cancel.cancel();

    let mut cursor = numbers(2);
    assert_err!(
        processor.execute_async(&mut cursor, Some(&cancel)).await,
        is_cancelled
    );
    assert_eq!(cursor.rows_read(), 0);

    // The checker survives a cancelled execution.
    let mut cursor = numbers(2);
    assert_eq!(
        processor.execute_async(&mut cursor, None).await.unwrap(),
        vec![0, 1]
    );
}

#[test]
fn lazy_rows_stop_when_cancelled() {
    let mut cursor = numbers(4);
    let cancel = Cancellation::new();
    let deserializer = Resolver::global().resolve_default::<i64>();
    let mut columns = ColumnChecker::new();

    let mut rows = deserializer
        .rows(&mut cursor, &mut columns)
        .with_cancellation(cancel.clone());

    assert_eq!(rows.next().unwrap().unwrap(), 0);
    cancel.cancel();
    assert!(rows.next().unwrap().unwrap_err().is_cancelled());
    assert!(rows.next().is_none());
    drop(rows);

    assert_eq!(cursor.rows_read(), 1);
}
