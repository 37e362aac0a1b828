//! HTTP client for the task API
//!
//! Fetches the input payload and submits the result envelope, presenting a
//! bearer token when one is held.

use anyhow::{anyhow, Context, Result};
use rangeq_core::{DataPayload, ResultEnvelope};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;

/// Client for the remote task API
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str, auth_token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    /// Replace the bearer token for subsequent requests
    pub fn set_token(&mut self, token: String) {
        self.auth_token = Some(token);
    }

    /// Check whether a bearer token is currently held
    pub fn has_token(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Fetch the input payload from the data endpoint
    pub async fn fetch_payload(&self, endpoint: &str) -> Result<DataPayload> {
        let url = self.url(endpoint);
        debug!("Fetching payload from {}", url);

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .with_context(|| format!("Failed to fetch payload from {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Data endpoint returned {}: {}", status, body));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .context("Data endpoint returned invalid JSON")?;

        let payload = DataPayload::from_value(value).context("Data endpoint payload is malformed")?;

        debug!(
            "Fetched payload: {} elements, {} queries",
            payload.data.len(),
            payload.query.len()
        );

        Ok(payload)
    }

    /// Submit the result envelope to the result endpoint
    pub async fn submit_result(&self, endpoint: &str, envelope: &ResultEnvelope) -> Result<()> {
        let url = self.url(endpoint);
        debug!("Submitting {} result slots to {}", envelope.result.len(), url);

        let response = self
            .authorize(self.http.post(&url))
            .json(envelope)
            .send()
            .await
            .with_context(|| format!("Failed to submit result to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Result endpoint returned {}: {}", status, body));
        }

        Ok(())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, None, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = test_client("http://api.example.com/");
        assert_eq!(client.url("/data"), "http://api.example.com/data");
        assert_eq!(client.url("data"), "http://api.example.com/data");
    }

    #[test]
    fn test_token_lifecycle() {
        let mut client = test_client("http://api.example.com");
        assert!(!client.has_token());

        client.set_token("abc123".to_string());
        assert!(client.has_token());
    }
}
