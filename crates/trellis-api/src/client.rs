//! The REST client.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;
use trellis_core::DesignNode;

use crate::error::ApiError;

const DEFAULT_BASE_URL: &str = "https://api.figma.com";

/// Client for the Figma file retrieval endpoints.
///
/// Authenticates every request with the `X-Figma-Token` header. The
/// client holds no mutable state; one instance serves a whole run.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// Response of `GET /v1/files/{key}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileResponse {
    /// Document title.
    #[serde(default)]
    pub name: String,
    /// Root of the node tree.
    pub document: DesignNode,
}

/// Response of `GET /v1/files/{key}/nodes`.
///
/// Ids the API had no detail for are simply absent from the map; the
/// caller skips those frames.
#[derive(Debug, Clone, Deserialize)]
pub struct NodesResponse {
    #[serde(default)]
    pub nodes: IndexMap<String, NodeDetail>,
}

/// One entry of the nodes response.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDetail {
    /// Full subtree rooted at the requested node.
    pub document: DesignNode,
}

impl FigmaClient {
    /// Create a client against the public Figma API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against a different base URL. Used by tests.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Fetch a file's document tree.
    pub async fn fetch_file(&self, file_key: &str) -> Result<FileResponse, ApiError> {
        let url = format!("{}/v1/files/{file_key}", self.base_url);
        debug!(%url, "fetching design file");
        let body = self.get(&url, &[]).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the full subtrees for the given node ids.
    pub async fn fetch_nodes(
        &self,
        file_key: &str,
        ids: &[String],
    ) -> Result<NodesResponse, ApiError> {
        let url = format!("{}/v1/files/{file_key}/nodes", self.base_url);
        debug!(%url, count = ids.len(), "fetching node details");
        let body = self.get(&url, &[("ids", ids.join(","))]).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .header("X-Figma-Token", &self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
