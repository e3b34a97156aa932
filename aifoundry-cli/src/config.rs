//! Environment-driven configuration for the provisioning flow.

use aifoundry_client::{FoundryError, Result};

pub const ENDPOINT_VAR: &str = "AZURE_AI_PROJECT_ENDPOINT";
pub const API_KEY_VAR: &str = "AZURE_AI_API_KEY";
pub const AGENT_NAME_VAR: &str = "AGENT_NAME";
pub const AGENT_MODEL_VAR: &str = "AGENT_MODEL";
pub const MCP_SERVER_URI_VAR: &str = "COSMOSDB_MCP_SERVER_URI";
pub const MCP_CONNECTION_NAME_VAR: &str = "COSMOSDB_MCP_CONNECTION_NAME";
pub const BING_CONNECTION_NAME_VAR: &str = "BING_CONNECTION_NAME";

/// Everything the provisioning flow needs, resolved up front.
///
/// Loading fails on the first missing variable so a misconfigured run
/// stops before any network call is made.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Foundry project endpoint URL.
    pub endpoint: String,
    /// API key for the project endpoint.
    pub api_key: String,
    /// Name of the agent to create a version of.
    pub agent_name: String,
    /// Model the agent runs on.
    pub model: String,
    /// URL of the CosmosDB MCP server.
    pub mcp_server_url: String,
    /// Project connection carrying credentials for the MCP server.
    pub mcp_connection_name: String,
    /// Project connection for Bing grounding, resolved to an id at runtime.
    pub bing_connection_name: String,
}

impl ProvisionConfig {
    /// Load the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through a lookup function.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| FoundryError::Config(format!("environment variable {key} is not set")))
        };

        Ok(Self {
            endpoint: require(ENDPOINT_VAR)?,
            api_key: require(API_KEY_VAR)?,
            agent_name: require(AGENT_NAME_VAR)?,
            model: require(AGENT_MODEL_VAR)?,
            mcp_server_url: require(MCP_SERVER_URI_VAR)?,
            mcp_connection_name: require(MCP_CONNECTION_NAME_VAR)?,
            bing_connection_name: require(BING_CONNECTION_NAME_VAR)?,
        })
    }

    /// The environment variables [`ProvisionConfig::from_env`] reads.
    pub const fn required_vars() -> [&'static str; 7] {
        [
            ENDPOINT_VAR,
            API_KEY_VAR,
            AGENT_NAME_VAR,
            AGENT_MODEL_VAR,
            MCP_SERVER_URI_VAR,
            MCP_CONNECTION_NAME_VAR,
            BING_CONNECTION_NAME_VAR,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (ENDPOINT_VAR, "https://proj.example.com/api/projects/demo"),
            (API_KEY_VAR, "key-abc"),
            (AGENT_NAME_VAR, "team-locator"),
            (AGENT_MODEL_VAR, "gpt-4o"),
            (MCP_SERVER_URI_VAR, "https://mcp.example.com"),
            (MCP_CONNECTION_NAME_VAR, "employee-db"),
            (BING_CONNECTION_NAME_VAR, "my-bing-connection"),
        ])
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let env = full_env();
        let config = ProvisionConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.endpoint, "https://proj.example.com/api/projects/demo");
        assert_eq!(config.agent_name, "team-locator");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.bing_connection_name, "my-bing-connection");
    }

    #[test]
    fn test_missing_var_names_the_key() {
        let mut env = full_env();
        env.remove(BING_CONNECTION_NAME_VAR);
        let error =
            ProvisionConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap_err();

        assert!(error.to_string().contains(BING_CONNECTION_NAME_VAR));
    }

    #[test]
    fn test_empty_value_treated_as_unset() {
        let mut env = full_env();
        env.insert(AGENT_MODEL_VAR, "");
        let error =
            ProvisionConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap_err();

        assert!(error.to_string().contains(AGENT_MODEL_VAR));
    }
}
