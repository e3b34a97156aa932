//! Configuration types for the project client.

use serde::{Deserialize, Serialize};

/// API version sent on management routes when none is configured.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Configuration for an AI Foundry project endpoint.
///
/// Each project exposes a management surface (connections, agents) and an
/// OpenAI-compatible inference surface under a single endpoint URL.
/// Authentication uses the `api-key` header.
///
/// # Example
///
/// ```rust,ignore
/// use aifoundry_client::ProjectConfig;
///
/// let config = ProjectConfig::new(
///     "https://my-project.services.ai.azure.com/api/projects/my-project",
///     "my-api-key",
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project endpoint URL.
    pub endpoint: String,
    /// API key for the project.
    pub api_key: String,
    /// Management API version (e.g., `"v1"`).
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl ProjectConfig {
    /// Create a new project config with the given endpoint and API key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: default_api_version(),
        }
    }

    /// Set the management API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}
