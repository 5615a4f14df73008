//! Common imports for test files
//!
//! `use tests::prelude::*;`

pub use crate::{assert_err, result_set, CursorOp, LoggingCursor};

pub use rowmap::{
    ColumnChecker, DeserializeFn, Error, KeyValuePair, MappingExport, Materialize, Processor,
    Resolver, Result, ResultSet, Value,
};
