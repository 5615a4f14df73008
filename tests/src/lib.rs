#[macro_use]
mod macros;

mod logging_cursor;
pub use logging_cursor::{CursorOp, LoggingCursor};

pub mod prelude;
