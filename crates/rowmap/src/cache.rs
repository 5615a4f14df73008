//! Caching of materialized collections.
//!
//! A [`ResultCache`] stores the rows produced for a command under a
//! [`CacheKey`] derived from the command text, its kind and its parameter
//! values. Collections are stored as JSON through a pluggable
//! [`CacheProvider`]; [`MemoryCache`] is the in-process provider.

mod key;
pub use key::{CacheKey, CommandKind, Params};

mod memory;
pub use memory::{CacheMetrics, MemoryCache, MemoryCacheConfig};

mod provider;
pub use provider::CacheProvider;

mod result_cache;
pub use result_cache::ResultCache;
