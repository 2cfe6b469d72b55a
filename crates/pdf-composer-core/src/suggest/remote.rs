use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SuggesterConfig;
use crate::error::{Error, Result};
use crate::pdf::CoverPageData;
use super::traits::{ContentSuggester, FileRef, SuggesterInfo};

/// Suggestion backend talking to a single remote HTTP endpoint.
///
/// One URL serves both operations; the request body's `action` field selects
/// smart-sort or cover-page generation.
pub struct RemoteSuggester {
    client: Client,
    /// Endpoint URL (e.g., "https://pdf-ai-manager.azurewebsites.net/api/pdfsort")
    pub endpoint: String,
}

#[derive(Debug, Serialize)]
struct SortRequest<'a> {
    action: &'static str,
    files: &'a [FileRef],
}

#[derive(Debug, Serialize)]
struct CoverRequest<'a> {
    action: &'static str,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct SortResponse {
    #[serde(default, rename = "sortedIds")]
    sorted_ids: Vec<String>,
}

impl RemoteSuggester {
    /// Create a suggester from configuration.
    ///
    /// # Errors
    /// Returns a configuration error when no endpoint is set; the service is
    /// unusable without one and the failure should surface before any
    /// request is attempted.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created, which should only happen
    /// in extreme circumstances (e.g., TLS backend unavailable on the system).
    #[allow(clippy::expect_used)]
    pub fn new(config: &SuggesterConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| Error::ConfigMissing("suggester.endpoint".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { client, endpoint })
    }

    /// POST a JSON payload and decode a JSON response.
    async fn call<Req, Resp>(&self, payload: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        debug!("Suggestion request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::RemoteRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Suggestion endpoint error: {} - {}", status, body);
            return Err(Error::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| Error::RemoteInvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ContentSuggester for RemoteSuggester {
    fn info(&self) -> SuggesterInfo {
        SuggesterInfo {
            name: "remote",
            requires_endpoint: true,
        }
    }

    async fn suggest_order(&self, files: &[FileRef]) -> Result<Vec<String>> {
        let request = SortRequest {
            action: "smart-sort",
            files,
        };
        let response: SortResponse = self.call(&request).await?;
        debug!("Received {} sorted id(s)", response.sorted_ids.len());
        Ok(response.sorted_ids)
    }

    async fn generate_cover(&self, description: &str) -> Result<CoverPageData> {
        let request = CoverRequest {
            action: "cover-page",
            description,
        };
        self.call(&request).await
    }
}
