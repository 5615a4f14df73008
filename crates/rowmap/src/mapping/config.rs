use super::{Conversion, Property};
use crate::{Result, Value};

use std::{
    borrow::Cow,
    hash::{DefaultHasher, Hash, Hasher},
};

/// The active mapping of one property: its column alias and conversion.
pub struct PropertyConfig<T> {
    property: Property<T>,
    conversion: Conversion,
}

impl<T> PropertyConfig<T> {
    pub fn new(property: Property<T>) -> PropertyConfig<T> {
        PropertyConfig {
            property,
            conversion: Conversion::default(),
        }
    }

    /// Binds the property to a different column.
    pub fn alias(&mut self, alias: impl Into<Cow<'static, str>>) -> &mut Self {
        self.property.set_alias(alias.into());
        self
    }

    /// Replaces the conversion with an anonymous one.
    pub fn convert_with<F>(&mut self, convert: F) -> &mut Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.conversion = Conversion::new(convert);
        self
    }

    /// Replaces the conversion with a named one. Exports that use the same
    /// name compile to the same deserializer.
    pub fn convert_named<F>(&mut self, name: impl Into<Cow<'static, str>>, convert: F) -> &mut Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.conversion = Conversion::named(name, convert);
        self
    }

    pub fn conversion(&mut self, conversion: Conversion) -> &mut Self {
        self.conversion = conversion;
        self
    }

    /// Restores the default cast.
    pub fn reset_conversion(&mut self) -> &mut Self {
        self.conversion = Conversion::default();
        self
    }

    pub fn property(&self) -> &Property<T> {
        &self.property
    }

    pub fn name(&self) -> &'static str {
        self.property.name()
    }

    pub fn active_alias(&self) -> &str {
        self.property.alias()
    }

    pub fn active_conversion(&self) -> &Conversion {
        &self.conversion
    }

    /// Hash of everything that influences the compiled binding of this
    /// property.
    pub fn cache_contribution(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.property.name().hash(&mut hasher);
        self.property.alias().hash(&mut hasher);
        self.conversion.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T> Clone for PropertyConfig<T> {
    fn clone(&self) -> Self {
        PropertyConfig {
            property: self.property.clone(),
            conversion: self.conversion.clone(),
        }
    }
}

impl<T> core::fmt::Debug for PropertyConfig<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("PropertyConfig")
            .field("property", &self.property)
            .field("conversion", &self.conversion)
            .finish()
    }
}
