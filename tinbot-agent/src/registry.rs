//! Entry-point registry
//!
//! Jobs name the executable unit they want by entry-point path. Instead of
//! reflective dispatch, the agent keeps an explicit registry populated at
//! startup: a mapping from entry-point name to a typed callable. Lookup of a
//! name nobody registered fails with [`RegistryError::UnknownEntryPoint`].

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// File-extension suffix stripped from entry-point paths before lookup
const ENTRY_POINT_SUFFIX: &str = ".xaml";

/// Errors raised by registry lookups
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown entry point: {0}")]
    UnknownEntryPoint(String),
}

/// The opaque executable unit behind an entry-point name
///
/// Implementations receive the job's parsed input arguments and either
/// return a result value or fail; what a job actually does is outside the
/// agent's concern.
#[async_trait]
pub trait EntryPoint: Send + Sync {
    async fn invoke(&self, args: Value) -> anyhow::Result<Value>;
}

/// Mapping from entry-point name to callable, populated at startup
#[derive(Default)]
pub struct EntryPointRegistry {
    entries: HashMap<String, Arc<dyn EntryPoint>>,
}

impl EntryPointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callable under an entry-point name.
    pub fn register(&mut self, name: impl Into<String>, entry_point: Arc<dyn EntryPoint>) {
        self.entries.insert(name.into(), entry_point);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves an entry-point path to its registry name by stripping the
    /// fixed file-extension suffix, if present.
    pub fn resolve_name(path: &str) -> &str {
        path.strip_suffix(ENTRY_POINT_SUFFIX).unwrap_or(path)
    }

    /// Looks up the entry point named by `path` and invokes it with the
    /// given arguments.
    pub async fn invoke(&self, path: &str, args: Value) -> anyhow::Result<Value> {
        let name = Self::resolve_name(path);
        let entry_point = self
            .entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownEntryPoint(name.to_string()))?;

        entry_point.invoke(args).await
    }
}
