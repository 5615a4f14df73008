use super::{Actions, MappingExport, Property, PropertyConfig};
use crate::Materialize;

use std::borrow::Cow;

/// Source of property metadata for a target type.
pub trait MetadataExtractor {
    fn extract<T: Materialize>(&self) -> Vec<Property<T>>;
}

/// Reads the metadata declared with `#[derive(Materialize)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Declarative;

impl MetadataExtractor for Declarative {
    fn extract<T: Materialize>(&self) -> Vec<Property<T>> {
        T::properties()
    }
}

/// Builds a [`MappingExport`] from a type's property metadata.
///
/// A property is exported when its actions intersect the requested actions,
/// it is in the whitelist (if one is set) and it is not blacklisted.
#[derive(Debug, Clone)]
pub struct Discovery<E = Declarative> {
    actions: Actions,
    whitelist: Option<Vec<Cow<'static, str>>>,
    blacklist: Vec<Cow<'static, str>>,
    extractor: E,
}

impl Discovery {
    pub fn new(actions: Actions) -> Discovery {
        Discovery {
            actions,
            whitelist: None,
            blacklist: Vec::new(),
            extractor: Declarative,
        }
    }
}

impl<E: MetadataExtractor> Discovery<E> {
    pub fn with_extractor<X: MetadataExtractor>(self, extractor: X) -> Discovery<X> {
        Discovery {
            actions: self.actions,
            whitelist: self.whitelist,
            blacklist: self.blacklist,
            extractor,
        }
    }

    /// Restricts the export to the named properties.
    pub fn whitelist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.whitelist
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Excludes the named properties.
    pub fn blacklist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.blacklist.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn export<T: Materialize>(&self) -> MappingExport<T> {
        let catalog = self.extractor.extract::<T>();
        let mut export = MappingExport::with_catalog(catalog.clone());

        for property in catalog {
            if self.includes(&property) {
                export.insert(PropertyConfig::new(property));
            }
        }

        export
    }

    fn includes<T>(&self, property: &Property<T>) -> bool {
        let name = property.name();

        if !property.actions().intersects(self.actions) {
            return false;
        }

        if let Some(whitelist) = &self.whitelist {
            if !whitelist.iter().any(|allowed| allowed == name) {
                return false;
            }
        }

        !self.blacklist.iter().any(|denied| denied == name)
    }
}
