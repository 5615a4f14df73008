use super::{Type, Value};
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
    F32(f32) {
        is_f32
    }
    F64(f64) {
        is_f64
    }
}

// Integer targets accept every integer variant (range checked), integral
// floats, booleans as 0/1 and strings holding a number.
macro_rules! impl_try_from_integer {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(val) => Ok(val),
                        Value::Null => Err(Error::invalid_cast(Type::$variant)),
                        Value::Bool(val) => Ok(val as $ty),
                        Value::String(ref s) => match s.trim().parse::<$ty>() {
                            Ok(val) => Ok(val),
                            Err(_) => Err(Error::coercion(value, Type::$variant)),
                        },
                        ref other => {
                            let wide = match other.as_i128() {
                                Some(wide) => Some(wide),
                                None => other.as_f64().and_then(integral),
                            };

                            match wide.and_then(|wide| <$ty>::try_from(wide).ok()) {
                                Some(val) => Ok(val),
                                None => Err(Error::coercion(value, Type::$variant)),
                            }
                        }
                    }
                }
            }
        )*
    };
}

impl_try_from_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64
}

/// Returns the float as an integer when it has no fractional part.
fn integral(val: f64) -> Option<i128> {
    if val.is_finite() && val.fract() == 0.0 {
        Some(val as i128)
    } else {
        None
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(val) => Ok(val),
            Value::F32(val) => Ok(val.into()),
            Value::Null => Err(Error::invalid_cast(Type::F64)),
            Value::String(ref s) => match s.trim().parse::<f64>() {
                Ok(val) => Ok(val),
                Err(_) => Err(Error::coercion(value, Type::F64)),
            },
            ref other => match other.as_i128() {
                Some(wide) => Ok(wide as f64),
                None => Err(Error::coercion(value, Type::F64)),
            },
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(val) => Ok(val),
            Value::F64(val) if !val.is_finite() || val.abs() <= f32::MAX as f64 => Ok(val as f32),
            Value::Null => Err(Error::invalid_cast(Type::F32)),
            Value::String(ref s) => match s.trim().parse::<f32>() {
                Ok(val) => Ok(val),
                Err(_) => Err(Error::coercion(value, Type::F32)),
            },
            ref other => match other.as_i128() {
                Some(wide) => Ok(wide as f32),
                None => Err(Error::coercion(value, Type::F32)),
            },
        }
    }
}
