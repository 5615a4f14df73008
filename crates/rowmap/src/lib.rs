extern crate self as rowmap;

pub mod cache;
pub use cache::{CacheKey, CacheProvider, CommandKind, MemoryCache, Params, ResultCache};

mod cancel;
pub use cancel::Cancellation;

pub mod column;
pub use column::{ColumnChecker, ColumnReport};

mod dynamic;
pub use dynamic::DynamicRow;

pub mod mapping;
pub use mapping::{Actions, Conversion, Discovery, MappingExport, Property, PropertyConfig};

mod materialize;
pub use materialize::{Kind, Materialize};

mod multi;
pub use multi::MultiReader;

mod pair;
pub use pair::KeyValuePair;

pub mod processor;
pub use processor::Processor;

mod resolve;
pub use resolve::{DeserializeFn, Resolver, Rows};

pub mod strategy;
pub use strategy::{Strategy, StrategyKind};

pub use rowmap_core::{
    bail, err,
    stmt::{Primitive, Type, Value},
    AsyncCursor, Cursor, Error, MemoryCursor, Result, ResultSet, Row,
};
pub use rowmap_core::{async_trait, jiff, uuid};

pub use rowmap_macros::Materialize;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        mapping::{Actions, Property},
        Kind, Materialize, Primitive, Result, Value,
    };
    pub use std::{default::Default, vec::Vec};
}
