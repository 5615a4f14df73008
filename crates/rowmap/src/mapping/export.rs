use super::{Actions, Discovery, Property, PropertyConfig};
use crate::{Error, Materialize, Result};

use indexmap::IndexMap;
use std::sync::Arc;

const FOLD_PRIME: u64 = 1_099_511_628_211;

/// The active per-property mappings of a target type.
///
/// Entries are keyed by property name; configuring a property twice keeps
/// the last configuration. The export also remembers the full property
/// catalog of the type so properties excluded by discovery can still be
/// configured explicitly.
pub struct MappingExport<T> {
    catalog: Arc<[Property<T>]>,
    entries: IndexMap<&'static str, PropertyConfig<T>>,
}

impl<T: Materialize> MappingExport<T> {
    /// The export used when nothing else is configured: every property that
    /// can be written from a row, bound to its declared alias.
    pub fn declarative() -> MappingExport<T> {
        Discovery::new(Actions::WRITE).export()
    }

    /// An export with no active properties.
    pub fn empty() -> MappingExport<T> {
        MappingExport::with_catalog(T::properties())
    }

    /// Configures the named property, activating it if discovery left it
    /// out.
    pub fn for_property(
        &mut self,
        name: &str,
        configure: impl FnOnce(&mut PropertyConfig<T>),
    ) -> Result<&mut Self> {
        if let Some(config) = self.entries.get_mut(name) {
            configure(config);
            return Ok(self);
        }

        let Some(property) = self.catalog.iter().find(|p| p.name() == name) else {
            return Err(Error::unknown_property(T::type_name(), name));
        };

        let mut config = PropertyConfig::new(property.clone());
        configure(&mut config);
        self.entries.insert(property.name(), config);
        Ok(self)
    }
}

impl<T> MappingExport<T> {
    pub(crate) fn with_catalog(catalog: Vec<Property<T>>) -> MappingExport<T> {
        MappingExport {
            catalog: catalog.into(),
            entries: IndexMap::new(),
        }
    }

    /// Inserts a configuration, replacing any previous one for the same
    /// property.
    pub fn insert(&mut self, config: PropertyConfig<T>) -> &mut Self {
        self.entries.insert(config.name(), config);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyConfig<T>> {
        self.entries.shift_remove(name)
    }

    /// Deactivates every property.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Overlays explicit configuration on top of this export. Entries of
    /// `explicit` replace entries for the same property.
    pub fn merge(mut self, explicit: MappingExport<T>) -> MappingExport<T> {
        for (_, config) in explicit.entries {
            self.insert(config);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyConfig<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Active configurations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyConfig<T>> + '_ {
        self.entries.values()
    }

    /// Every property the target type declares, active or not.
    pub fn catalog(&self) -> &[Property<T>] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Structural hash of the export. Two exports with the same hash compile
    /// to interchangeable deserializers.
    pub fn cache_hash(&self) -> u64 {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_unstable_by_key(|(name, _)| *name);

        entries
            .into_iter()
            .fold(self.entries.len() as u64, |acc, (_, config)| {
                acc.wrapping_mul(FOLD_PRIME)
                    .wrapping_add(config.cache_contribution())
            })
    }
}

impl<T> Clone for MappingExport<T> {
    fn clone(&self) -> Self {
        MappingExport {
            catalog: self.catalog.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<T> core::fmt::Debug for MappingExport<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("MappingExport")
            .field("entries", &self.entries)
            .finish()
    }
}
