mod actions;
pub(crate) use actions::Actions;

mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod rename;
pub(crate) use rename::RenameRule;

mod target;
pub(crate) use target::Target;
