//! HTTP source. GETs datasets relative to a base URL.

use async_trait::async_trait;

use super::{normalize_path, LoadCause, ResourceSource};

/// Fetches `base_url/<path>` with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), normalize_path(path))
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadCause> {
        let url = self.url_for(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadCause::Fetch(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadCause::NotFound);
        }
        if !status.is_success() {
            return Err(LoadCause::Fetch(format!("GET {url} returned {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadCause::Fetch(e.to_string()))?;
        Ok(body.to_vec())
    }
}
