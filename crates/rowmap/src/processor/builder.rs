use super::Processor;
use crate::{
    CommandKind, Error, MappingExport, Materialize, PropertyConfig, Resolver, Result, ResultCache,
};

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

pub struct Builder<T> {
    command: String,
    kind: CommandKind,

    /// Built on first use. Property overrides are applied to it as they are
    /// declared, so every processor built from this builder shares the same
    /// conversions and resolves to the same deserializer.
    mapping: Option<MappingExport<T>>,

    /// First override that named an unknown property, reported by `build`.
    error: Option<Error>,

    resolver: Option<Arc<Resolver>>,
    column_caching: bool,
    cache: Option<ResultCache>,
    cache_ttl: Option<Duration>,
}

impl<T: Materialize> Builder<T> {
    pub(super) fn new(command: String) -> Builder<T> {
        Builder {
            command,
            kind: CommandKind::Text,
            mapping: None,
            error: None,
            resolver: None,
            column_caching: true,
            cache: None,
            cache_ttl: None,
        }
    }

    pub fn kind(&mut self, kind: CommandKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Replaces the declarative mapping export, discarding property
    /// overrides declared so far.
    pub fn mapping(&mut self, export: MappingExport<T>) -> &mut Self {
        self.mapping = Some(export);
        self
    }

    /// Overrides the mapping of one property.
    pub fn property<F>(&mut self, name: &str, configure: F) -> &mut Self
    where
        F: FnOnce(&mut PropertyConfig<T>),
    {
        let export = self.mapping.get_or_insert_with(MappingExport::declarative);

        if let Err(err) = export.for_property(name, configure) {
            self.error.get_or_insert(err);
        }

        self
    }

    /// Resolves deserializers with `resolver` instead of the global one.
    pub fn resolver(&mut self, resolver: Arc<Resolver>) -> &mut Self {
        self.resolver = Some(resolver);
        self
    }

    /// Whether resolved column ordinals are kept between executions.
    /// Defaults to `true`.
    pub fn column_index_caching(&mut self, enabled: bool) -> &mut Self {
        self.column_caching = enabled;
        self
    }

    pub fn result_cache(&mut self, cache: ResultCache) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    /// Sets the expiry of cached results. Has no effect without a result
    /// cache.
    pub fn cache_ttl(&mut self, ttl: Duration) -> &mut Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn build(&self) -> Result<Processor<T>> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let export = self
            .mapping
            .clone()
            .unwrap_or_else(MappingExport::declarative);

        let resolver = self.resolver.clone().unwrap_or_else(Resolver::global);
        let deserializer = resolver.resolve(&export);

        let cache = self.cache.clone().map(|cache| match self.cache_ttl {
            Some(ttl) => cache.with_ttl(ttl),
            None => cache,
        });

        Ok(Processor {
            command: self.command.clone(),
            kind: self.kind,
            deserializer,
            columns: Mutex::new(None),
            column_caching: self.column_caching,
            cache,
        })
    }
}
