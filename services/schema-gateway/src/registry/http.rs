//! HTTP client for Confluent-compatible schema registries.
use super::SchemaRegistry;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::{Duration, Instant};

#[derive(Debug, Deserialize)]
struct SchemaResponse {
    schema: String,
}

#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRegistryClient {
    /// Build a client for the registry at `base_url`.
    ///
    /// # Errors
    /// - `base_url` cannot carry path segments (e.g. `mailto:`).
    /// - The underlying HTTP client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> anyhow::Result<Self> {
        if base_url.cannot_be_a_base() {
            anyhow::bail!("registry url {base_url} cannot be used as a base url");
        }
        Ok(Self { client, base_url })
    }

    fn schema_url(&self, subject: &str, version: &str) -> Result<Url> {
        // Segments are percent-encoded, so odd subject names cannot escape the path.
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::internal(format!("failed to generate the path from {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["subjects", subject, "versions", version]);
        Ok(url)
    }
}

#[async_trait]
impl SchemaRegistry for HttpRegistryClient {
    async fn fetch_schema(&self, subject: &str, version: &str) -> Result<String> {
        let url = self.schema_url(subject, version)?;
        let started = Instant::now();
        let response = self.client.get(url).send().await;
        metrics::histogram!("schema_gateway_registry_fetch_seconds")
            .record(started.elapsed().as_secs_f64());
        let response = response.map_err(|err| Error::remote(err.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(Error::not_found(format!(
                    "schema {subject}/{version} not found"
                )));
            }
            status => {
                return Err(Error::remote(format!(
                    "unexpected response status: {status}"
                )));
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| Error::remote(format!("failed to read response body: {err}")))?;
        let decoded: SchemaResponse = serde_json::from_slice(&body)
            .map_err(|err| Error::remote(format!("invalid response body format: {err}")))?;
        tracing::debug!(subject, version, "schema fetched from registry");
        Ok(decoded.schema)
    }

    fn endpoint(&self) -> String {
        self.base_url.to_string()
    }
}
