mod num;

mod primitive;
pub use primitive::Primitive;

mod text;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_jiff;
