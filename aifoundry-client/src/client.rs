//! Project client implementation.

use crate::agents::Agents;
use crate::config::ProjectConfig;
use crate::connections::Connections;
use crate::error::{FoundryError, Result};
use crate::responses::Responses;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Header carrying the project API key.
const API_KEY_HEADER: &str = "api-key";

/// Client for an AI Foundry project.
///
/// Covers the management operations the provisioning flow consumes
/// (connection lookup, agent version create, agent get) and the
/// OpenAI-compatible responses surface. Operations are grouped the way the
/// platform groups them:
///
/// ```rust,ignore
/// use aifoundry_client::{ProjectClient, ProjectConfig};
///
/// let client = ProjectClient::new(ProjectConfig::new(endpoint, api_key))?;
/// let connection = client.connections().get("bing-conn").await?;
/// let agent = client.agents().get("team-locator").await?;
/// ```
///
/// The underlying HTTP transport keeps its defaults: no request timeout is
/// configured and no call is retried. Every error surfaces to the caller at
/// the failing operation.
#[derive(Debug)]
pub struct ProjectClient {
    http: Client,
    config: ProjectConfig,
}

impl ProjectClient {
    /// Create a new project client from the given config.
    pub fn new(config: ProjectConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(FoundryError::Config("project endpoint must not be empty".to_string()));
        }
        if config.api_key.trim().is_empty() {
            return Err(FoundryError::Config("project API key must not be empty".to_string()));
        }

        let http = Client::builder()
            .build()
            .map_err(|e| FoundryError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// The configured project endpoint.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Connection operations.
    pub fn connections(&self) -> Connections<'_> {
        Connections { client: self }
    }

    /// Agent operations.
    pub fn agents(&self) -> Agents<'_> {
        Agents { client: self }
    }

    /// Response (inference) operations.
    pub fn responses(&self) -> Responses<'_> {
        Responses { client: self }
    }

    /// Build a management URL for the given resource path, with the
    /// `api-version` query the management surface requires.
    pub(crate) fn management_url(&self, path: &str) -> String {
        format!(
            "{}/{}?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            path,
            self.config.api_version
        )
    }

    /// Build an inference URL under the project's OpenAI-compatible surface.
    pub(crate) fn inference_url(&self, path: &str) -> String {
        format!("{}/openai/v1/{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        tracing::debug!(url = %url, "GET");
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(url = %url, "POST");
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(body)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    /// Check the response status code and return an error carrying the body
    /// text if it is not successful.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(FoundryError::Api { status: status.as_u16(), message })
    }
}
