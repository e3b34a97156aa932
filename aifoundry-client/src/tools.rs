//! Tool descriptors attached to agent definitions.
//!
//! These are parameter objects, not executable tools: the platform's agent
//! runtime interprets them and performs the actual invocation remotely.

use serde::{Deserialize, Serialize};

/// Approval policy for remote MCP tool invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequireApproval {
    Never,
    Always,
}

/// One search configuration of a grounding tool, referencing a resolved
/// project connection id (never the raw connection name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BingGroundingSearchConfiguration {
    pub project_connection_id: String,
}

/// Parameters of the Bing grounding tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BingGroundingParameters {
    pub search_configurations: Vec<BingGroundingSearchConfiguration>,
}

/// A tool descriptor the platform's agent runtime knows how to invoke.
///
/// Serialized with a `type` tag, matching the wire format of the agent
/// definition's tool list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentTool {
    /// Remote MCP server reachable through a project connection.
    Mcp {
        server_label: String,
        project_connection_id: String,
        server_url: String,
        require_approval: RequireApproval,
    },
    /// Web-grounding search backed by a Bing connection.
    BingGrounding { bing_grounding: BingGroundingParameters },
}

impl AgentTool {
    /// MCP tool descriptor with the approval policy fixed to `never`.
    pub fn mcp(
        server_label: impl Into<String>,
        project_connection_id: impl Into<String>,
        server_url: impl Into<String>,
    ) -> Self {
        AgentTool::Mcp {
            server_label: server_label.into(),
            project_connection_id: project_connection_id.into(),
            server_url: server_url.into(),
            require_approval: RequireApproval::Never,
        }
    }

    /// Bing grounding descriptor with a single search configuration for the
    /// given resolved connection id.
    pub fn bing_grounding(project_connection_id: impl Into<String>) -> Self {
        AgentTool::BingGrounding {
            bing_grounding: BingGroundingParameters {
                search_configurations: vec![BingGroundingSearchConfiguration {
                    project_connection_id: project_connection_id.into(),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mcp_tool_serialization() {
        let tool = AgentTool::mcp("cosmosdb", "cosmosdb", "https://mcp.example.com/v1");
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "mcp",
                "server_label": "cosmosdb",
                "project_connection_id": "cosmosdb",
                "server_url": "https://mcp.example.com/v1",
                "require_approval": "never",
            })
        );
    }

    #[test]
    fn test_bing_grounding_serialization() {
        let tool = AgentTool::bing_grounding("conn-123");
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "bing_grounding",
                "bing_grounding": {
                    "search_configurations": [
                        {"project_connection_id": "conn-123"}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_bing_grounding_single_configuration() {
        let tool = AgentTool::bing_grounding("conn-123");
        let AgentTool::BingGrounding { bing_grounding } = tool else {
            panic!("expected bing grounding tool");
        };
        assert_eq!(bing_grounding.search_configurations.len(), 1);
        assert_eq!(bing_grounding.search_configurations[0].project_connection_id, "conn-123");
    }

    #[test]
    fn test_require_approval_serialization() {
        assert_eq!(serde_json::to_value(RequireApproval::Never).unwrap(), json!("never"));
        assert_eq!(serde_json::to_value(RequireApproval::Always).unwrap(), json!("always"));
    }

    #[test]
    fn test_tool_round_trip() {
        let tool = AgentTool::mcp("db", "db-conn", "https://mcp.example.com");
        let json = serde_json::to_string(&tool).unwrap();
        let back: AgentTool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tool);
    }
}
