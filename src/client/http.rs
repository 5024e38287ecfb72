// HTTP client for the summary service

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{SummaryError, SummaryService};
use crate::brand::{FormState, SummaryResponse, SummaryText};
use crate::config::constants::BRAND_ROUTE;
use crate::config::ClientConfig;

pub struct HttpSummaryClient {
    client: Client,
    endpoint: String,
}

impl HttpSummaryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), BRAND_ROUTE);
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.server_url, config.timeout())
    }

    /// Full URL the form is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryService for HttpSummaryClient {
    /// Send a single generate request (no retry)
    async fn generate(&self, form: &FormState) -> Result<SummaryText, SummaryError> {
        tracing::debug!(endpoint = %self.endpoint, "Sending form to summary service");

        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| SummaryError::Unreachable {
                url: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Summary service rejected request");
            return Err(SummaryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: SummaryResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::Decode(e.to_string()))?;

        tracing::debug!(len = body.result.len(), "Received summary");

        Ok(body.into())
    }
}
