//! Property metadata and the per-type mapping export.
//!
//! A [`MappingExport`] records, for each property of a target type, the
//! column alias it binds to and the conversion applied to the cell before
//! the property is set. Exports start from the declarative metadata produced
//! by `#[derive(Materialize)]` and are refined with explicit configuration.

mod actions;
pub use actions::Actions;

mod config;
pub use config::PropertyConfig;

mod conversion;
pub use conversion::Conversion;

mod discovery;
pub use discovery::{Declarative, Discovery, MetadataExtractor};

mod export;
pub use export::MappingExport;

mod property;
pub use property::{Property, Setter};
