//! Local directory source. Serves datasets from files under a root.

use std::path::{Component, Path, PathBuf};
use async_trait::async_trait;

use super::{normalize_path, LoadCause, ResourceSource};

/// Reads `root/<path>` with `tokio::fs`.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, LoadCause> {
        let rel = Path::new(normalize_path(path));
        if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
            return Err(LoadCause::Fetch(format!("path '{path}' escapes the source root")));
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl ResourceSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadCause> {
        let full = self.resolve(path)?;
        tokio::fs::read(&full).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadCause::NotFound,
            _ => LoadCause::Fetch(format!("{}: {e}", full.display())),
        })
    }
}
