//! # Data Loader
//!
//! Fetch-then-parse for the three site datasets.
//!
//! `ResourceSource` is the contract between the widgets and wherever the JSON
//! lives. [`load`] is the only entry point the widgets use: one fetch, one
//! parse, one validation pass. No retries, no timeout.
//!
//! ## Implementations
//!
//! | Source | Module | Feature | Description |
//! |--------|--------|---------|-------------|
//! | `MemorySource` | `memory` | (default) | In-memory map for tests/embedding |
//! | `DirSource` | `fs` | `fs` | Files under a local directory |
//! | `HttpSource` | `http` | `http` | GET relative to a base URL |

pub mod memory;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;
use crate::model::Dataset;

pub use memory::MemorySource;
#[cfg(feature = "fs")]
pub use fs::DirSource;
#[cfg(feature = "http")]
pub use http::HttpSource;

// ============================================================================
// Errors
// ============================================================================

/// Why a single resource failed to load.
#[derive(Debug, thiserror::Error)]
pub enum LoadCause {
    #[error("resource not found")]
    NotFound,

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid dataset: {0}")]
    Invalid(String),
}

/// A resource could not be turned into a dataset.
#[derive(Debug, thiserror::Error)]
#[error("failed to load {path}: {cause}")]
pub struct LoadError {
    pub path: String,
    #[source]
    pub cause: LoadCause,
}

impl LoadError {
    pub fn new(path: impl Into<String>, cause: LoadCause) -> Self {
        Self { path: path.into(), cause }
    }
}

// ============================================================================
// ResourceSource Trait
// ============================================================================

/// Where datasets come from.
///
/// Paths are relative, in the form the site uses (`./data/matrices.json`).
/// Implementations should pass them through [`normalize_path`] before
/// resolving them.
#[async_trait]
pub trait ResourceSource: Send + Sync + 'static {
    /// Fetch the raw bytes of a resource.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadCause>;
}

/// Strip leading `./` and `/` so `./data/x.json`, `/data/x.json` and
/// `data/x.json` name the same resource.
pub fn normalize_path(path: &str) -> &str {
    let mut p = path.trim();
    loop {
        if let Some(rest) = p.strip_prefix("./") {
            p = rest;
        } else if let Some(rest) = p.strip_prefix('/') {
            p = rest;
        } else {
            return p;
        }
    }
}

/// Fetch, parse and validate a dataset.
pub async fn load<T, S>(source: &S, path: &str) -> Result<T, LoadError>
where
    T: Dataset,
    S: ResourceSource + ?Sized,
{
    tracing::debug!(path, kind = T::KIND, "fetching dataset");

    let bytes = source
        .fetch(path)
        .await
        .map_err(|cause| LoadError::new(path, cause))?;

    let doc: T = serde_json::from_slice(&bytes)
        .map_err(|e| LoadError::new(path, LoadCause::Parse(e)))?;

    doc.validate()
        .map_err(|reason| LoadError::new(path, LoadCause::Invalid(reason)))?;

    tracing::debug!(path, kind = T::KIND, bytes = bytes.len(), "dataset loaded");
    Ok(doc)
}
