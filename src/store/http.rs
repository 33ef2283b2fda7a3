//! HTTP store client.
//!
//! Thin `reqwest` wrapper over the three rectangle endpoints. Response bodies
//! are read as text and parsed in `parse_dimensions` so the parsing rules can
//! be tested without a server.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use tracing::debug;

use super::RemoteStore;
use crate::config::StoreTimeouts;
use crate::error::StoreError;
use crate::model::Dimensions;

const RECTANGLE_PATH: &str = "/rectangle";
const DOWNLOAD_PATH: &str = "/rectangle/download";

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Build a client for `base_url` (a trailing `/` is ignored).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(base_url: &str, timeouts: StoreTimeouts) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::ApiResponse { status: status.as_u16(), body });
        }
        Ok(response)
    }

    async fn send_for_text(&self, request: reqwest::RequestBuilder) -> Result<String, StoreError> {
        self.send(request)
            .await?
            .text()
            .await
            .map_err(|e| StoreError::ApiRequest(e.to_string()))
    }
}

#[async_trait::async_trait]
impl RemoteStore for HttpStore {
    async fn get_dimensions(&self) -> Result<Dimensions, StoreError> {
        let url = self.url(RECTANGLE_PATH);
        debug!(%url, "fetching dimensions");
        parse_dimensions(&self.send_for_text(self.http.get(url)).await?)
    }

    async fn update_dimensions(&self, dims: Dimensions) -> Result<Dimensions, StoreError> {
        let url = self.url(RECTANGLE_PATH);
        debug!(%url, width = dims.width, height = dims.height, "updating dimensions");
        let text = self.send_for_text(self.http.put(url).json(&dims)).await?;
        // 204 or an empty 200: the store accepted the body as sent.
        if text.trim().is_empty() {
            return Ok(dims);
        }
        parse_dimensions(&text)
    }

    async fn download(&self) -> Result<Vec<u8>, StoreError> {
        let url = self.url(DOWNLOAD_PATH);
        debug!(%url, "downloading dimensions payload");
        let bytes = self
            .send(self.http.get(url))
            .await?
            .bytes()
            .await
            .map_err(|e| StoreError::ApiRequest(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_dimensions(json: &str) -> Result<Dimensions, StoreError> {
    let dims: Dimensions = serde_json::from_str(json).map_err(|e| StoreError::ApiParse(e.to_string()))?;
    Ok(dims.validate()?)
}
