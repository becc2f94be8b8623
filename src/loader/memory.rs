//! In-memory resource source.
//!
//! The reference implementation of `ResourceSource`. Resources are byte
//! buffers keyed by normalized path. A path can also be registered as a
//! failure, which is how tests simulate a network error for one dataset.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;

use super::{normalize_path, LoadCause, ResourceSource};

#[derive(Debug, Clone)]
enum Entry {
    Body(Vec<u8>),
    Failure(String),
}

/// In-memory map of path → bytes. Cheap to clone; clones share storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    inner: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn with_failure(self, path: &str, reason: impl Into<String>) -> Self {
        self.fail(path, reason);
        self
    }

    /// Store (or replace) a resource body.
    pub fn insert(&self, path: &str, body: impl Into<Vec<u8>>) {
        self.inner
            .write()
            .insert(normalize_path(path).to_owned(), Entry::Body(body.into()));
    }

    /// Serialize `value` as JSON and store it.
    pub fn insert_json<T: Serialize>(&self, path: &str, value: &T) -> serde_json::Result<()> {
        let body = serde_json::to_vec(value)?;
        self.insert(path, body);
        Ok(())
    }

    /// Make every fetch of `path` fail with `reason`.
    pub fn fail(&self, path: &str, reason: impl Into<String>) {
        self.inner
            .write()
            .insert(normalize_path(path).to_owned(), Entry::Failure(reason.into()));
    }

    pub fn remove(&self, path: &str) -> bool {
        self.inner.write().remove(normalize_path(path)).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[async_trait]
impl ResourceSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadCause> {
        match self.inner.read().get(normalize_path(path)) {
            Some(Entry::Body(bytes)) => Ok(bytes.clone()),
            Some(Entry::Failure(reason)) => Err(LoadCause::Fetch(reason.clone())),
            None => Err(LoadCause::NotFound),
        }
    }
}
