pub mod cursor;
pub use cursor::{AsyncCursor, Cursor, Row};

mod error;
pub use error::{Error, IntoError};

mod result_set;
pub use result_set::{MemoryCursor, ResultSet};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
pub use jiff;
pub use uuid;
