//! Agent definitions and versioned create/get operations.

use crate::client::ProjectClient;
use crate::error::Result;
use crate::tools::AgentTool;
use serde::{Deserialize, Serialize};

/// Definition submitted when creating a new version of a named agent.
///
/// Combines the model, the instructions document, sampling parameters, and
/// the tool descriptors the hosted agent may invoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptAgentDefinition {
    /// Model identifier the agent runs on.
    pub model: String,
    /// System instructions, submitted exactly as loaded.
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Tool descriptors in invocation-preference order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<AgentTool>,
}

impl PromptAgentDefinition {
    /// Create a definition with the given model and instructions.
    pub fn new(model: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            instructions: instructions.into(),
            temperature: None,
            top_p: None,
            tools: Vec::new(),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Append a tool descriptor.
    pub fn with_tool(mut self, tool: AgentTool) -> Self {
        self.tools.push(tool);
        self
    }

    /// Replace the tool list.
    pub fn with_tools(mut self, tools: Vec<AgentTool>) -> Self {
        self.tools = tools;
        self
    }
}

/// A newly created version of a named agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentVersion {
    /// Version identifier assigned by the platform.
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An agent resource fetched by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Agent operations, scoped to a [`ProjectClient`].
pub struct Agents<'a> {
    pub(crate) client: &'a ProjectClient,
}

impl Agents<'_> {
    /// Create a new version of the named agent from the given definition.
    ///
    /// The platform appends a version to the named agent on every call, so
    /// each run of a provisioning flow produces a fresh version.
    pub async fn create_version(
        &self,
        agent_name: &str,
        definition: &PromptAgentDefinition,
    ) -> Result<AgentVersion> {
        tracing::debug!(agent.name = agent_name, model = %definition.model, "creating agent version");
        let url = self.client.management_url(&format!("agents/{agent_name}/versions"));
        self.client.post_json(url, definition).await
    }

    /// Fetch the agent resource by name.
    pub async fn get(&self, agent_name: &str) -> Result<Agent> {
        tracing::debug!(agent.name = agent_name, "fetching agent");
        let url = self.client.management_url(&format!("agents/{agent_name}"));
        self.client.get_json(url).await
    }
}
