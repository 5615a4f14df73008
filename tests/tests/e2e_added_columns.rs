use tests::prelude::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Default, PartialEq, Materialize)]
struct Pair {
    #[column("A")]
    a: i32,
    #[column("B")]
    b: String,
}

fn processor() -> Processor<Pair> {
    Processor::builder("select * from t").build().unwrap()
}

#[test]
fn added_column_between_executions() {
    let processor = processor();

    let mut first = LoggingCursor::new([result_set!(["A", "B"]; [1, "x"])]);
    let mut second = LoggingCursor::new([result_set!(["A", "B", "C"]; [2, "y", true])]);

    assert_eq!(
        processor.execute(&mut first).unwrap(),
        vec![Pair {
            a: 1,
            b: "x".to_string(),
        }]
    );
    assert_eq!(
        processor.execute(&mut second).unwrap(),
        vec![Pair {
            a: 2,
            b: "y".to_string(),
        }]
    );

    // The unmapped column is never read.
    assert_eq!(second.cells_read(), vec![0, 1]);

    let columns = processor.columns().unwrap();
    assert_eq!(columns.report().unwrap().ordinal("C"), Some(2));
}

#[test]
fn column_inserted_before_mapped_columns() {
    let processor = processor();

    let mut first = LoggingCursor::new([result_set!(["A", "B"]; [1, "x"])]);
    let mut second = LoggingCursor::new([result_set!(["C", "A", "B"]; [false, 2, "y"])]);

    processor.execute(&mut first).unwrap();
    let items = processor.execute(&mut second).unwrap();

    assert_eq!(
        items,
        vec![Pair {
            a: 2,
            b: "y".to_string(),
        }]
    );
    assert_eq!(second.cells_read(), vec![1, 2]);
}

#[test]
fn same_shape_reuses_ordinals() {
    let processor = processor();

    for n in 0..3 {
        let mut cursor = LoggingCursor::new([result_set!(["A", "B"]; [n, "x"])]);
        assert_eq!(processor.execute(&mut cursor).unwrap()[0].a, n);
    }

    assert_eq!(processor.columns().unwrap().cached(), 2);
}

#[test]
fn removed_column_is_skipped() {
    let processor = processor();

    let mut first = LoggingCursor::new([result_set!(["A", "B"]; [1, "x"])]);
    let mut second = LoggingCursor::new([result_set!(["B"]; ["y"])]);

    processor.execute(&mut first).unwrap();
    assert_eq!(
        processor.execute(&mut second).unwrap(),
        vec![Pair {
            a: 0,
            b: "y".to_string(),
        }]
    );
}
