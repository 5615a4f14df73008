use crate::{Result, Value};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How a command's text is interpreted by the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    #[default]
    Text,
    StoredProcedure,
    TableDirect,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Text => "text",
            CommandKind::StoredProcedure => "stored_procedure",
            CommandKind::TableDirect => "table_direct",
        }
    }
}

/// Named parameter values a command was executed with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    values: Vec<(String, Value)>,
}

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    /// Sets `name`, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Params {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();

        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parameters sorted by name, so the order they were set in does not
    /// affect the cache key.
    fn canonical(&self) -> Vec<&(String, Value)> {
        let mut values: Vec<_> = self.values.iter().collect();
        values.sort_by(|a, b| a.0.cmp(&b.0));
        values
    }
}

/// Identifies a cached result collection.
///
/// The key is the hex SHA-256 digest of the command text, the command kind
/// and the parameter values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(command: &str, kind: CommandKind, params: &Params) -> Result<CacheKey> {
        let mut hasher = Sha256::new();
        hasher.update(b"rowmap:v1\0");
        hasher.update(kind.as_str().as_bytes());
        hasher.update(b"\0");
        hasher.update(command.as_bytes());
        hasher.update(b"\0");
        hasher.update(serde_json::to_vec(&params.canonical())?);

        Ok(CacheKey(hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
