use crate::{Result, Type, Value};

use std::{
    borrow::Cow,
    hash::{Hash, Hasher},
    sync::Arc,
};

type ConvertFn = dyn Fn(Value) -> Result<Value> + Send + Sync;

/// Converts a raw cell before it is assigned to a property.
///
/// The default conversion casts the cell to the property's type. Custom
/// conversions are either named, in which case two conversions with the same
/// name are considered the same shape, or anonymous, in which case identity
/// is the closure allocation itself.
#[derive(Clone)]
pub struct Conversion {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Default,
    Custom {
        identity: Identity,
        convert: Arc<ConvertFn>,
    },
}

#[derive(Clone, Debug)]
enum Identity {
    Named(Cow<'static, str>),
    Anonymous,
}

impl Conversion {
    /// Cast to the property's type.
    pub fn default_cast() -> Conversion {
        Conversion {
            repr: Repr::Default,
        }
    }

    pub fn new<F>(convert: F) -> Conversion
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Conversion {
            repr: Repr::Custom {
                identity: Identity::Anonymous,
                convert: Arc::new(convert),
            },
        }
    }

    pub fn named<F>(name: impl Into<Cow<'static, str>>, convert: F) -> Conversion
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Conversion {
            repr: Repr::Custom {
                identity: Identity::Named(name.into()),
                convert: Arc::new(convert),
            },
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self.repr, Repr::Default)
    }

    /// Applies the conversion to a cell bound for a property of type `ty`.
    pub fn apply(&self, ty: &Type, value: Value) -> Result<Value> {
        match &self.repr {
            Repr::Default => ty.cast(value),
            Repr::Custom { convert, .. } => convert(value),
        }
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Conversion::default_cast()
    }
}

impl Hash for Conversion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.repr {
            Repr::Default => state.write_u8(0),
            Repr::Custom {
                identity: Identity::Named(name),
                ..
            } => {
                state.write_u8(1);
                name.hash(state);
            }
            Repr::Custom {
                identity: Identity::Anonymous,
                convert,
            } => {
                state.write_u8(2);
                (Arc::as_ptr(convert) as *const () as usize).hash(state);
            }
        }
    }
}

impl core::fmt::Debug for Conversion {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.repr {
            Repr::Default => f.write_str("Conversion::Default"),
            Repr::Custom { identity, .. } => f
                .debug_tuple("Conversion::Custom")
                .field(identity)
                .finish(),
        }
    }
}
