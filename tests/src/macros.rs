/// Builds a `ResultSet` from column names and rows of cells.
///
/// ```ignore
/// let set = result_set!(["Int", "String"]; [1, "varchar"], [2, "text"]);
/// ```
#[macro_export]
macro_rules! result_set {
    ( [ $( $column:expr ),* $(,)? ] $( ; $( [ $( $cell:expr ),* $(,)? ] ),* $(,)? )? ) => {{
        #[allow(unused_mut)]
        let mut set = rowmap::ResultSet::new([ $( $column ),* ]);
        $( $(
            set = set.row([ $( rowmap::Value::from($cell) ),* ]);
        )* )?
        set
    }};
}

#[macro_export]
macro_rules! assert_err {
    ($result:expr, $predicate:ident) => {
        match $result {
            Ok(value) => panic!("expected error, got {:?}", value),
            Err(err) => {
                assert!(err.$predicate(), "unexpected error: {err:#?}");
                err
            }
        }
    };
}
