//! The provisioning flow: resolve the search connection, publish a new agent
//! version, and smoke-test it with a pair of prompts.

use crate::config::ProvisionConfig;
use aifoundry_client::{
    AgentReference, AgentTool, InputMessage, ProjectClient, PromptAgentDefinition, ResponseRequest,
    Result,
};

/// Sampling temperature applied to every provisioned version.
pub const AGENT_TEMPERATURE: f32 = 0.25;
/// Nucleus sampling parameter applied to every provisioned version.
pub const AGENT_TOP_P: f32 = 0.75;

/// Prompts issued against the fresh version, in order.
pub const SMOKE_PROMPTS: [&str; 2] = ["Who is Jay Emery?", "What's the date?"];

/// Load the instructions document from disk.
///
/// The content is submitted to the platform exactly as read, trailing
/// newline included.
pub fn load_instructions(path: &std::path::Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Run the provisioning flow end to end, writing progress lines to `out`.
///
/// The flow stops at the first failing step. Steps, in order:
///
/// 1. Resolve the Bing connection name to a connection id
/// 2. Create a new version of the named agent with the MCP database tool
///    and the Bing grounding tool attached
/// 3. Fetch the agent back by name
/// 4. Issue each smoke prompt sequentially and print its output text
pub async fn run<W: std::io::Write>(
    client: &ProjectClient,
    config: &ProvisionConfig,
    instructions: &str,
    out: &mut W,
) -> Result<()> {
    tracing::info!(
        agent = %config.agent_name,
        model = %config.model,
        "starting provisioning run"
    );

    let connection = client.connections().get(&config.bing_connection_name).await?;
    writeln!(out, "Using Bing connection: {}", connection.id)?;

    // Tool order is invocation preference: the database tool goes first.
    let tools = vec![
        AgentTool::mcp(
            &config.mcp_connection_name,
            &config.mcp_connection_name,
            &config.mcp_server_url,
        ),
        AgentTool::bing_grounding(&connection.id),
    ];

    let definition = PromptAgentDefinition::new(&config.model, instructions)
        .with_temperature(AGENT_TEMPERATURE)
        .with_top_p(AGENT_TOP_P)
        .with_tools(tools);

    let version = client.agents().create_version(&config.agent_name, &definition).await?;
    writeln!(out, "Created agent version: {}", version.version)?;

    let agent = client.agents().get(&config.agent_name).await?;
    writeln!(out, "Retrieved agent: {}", agent.name)?;

    for prompt in SMOKE_PROMPTS {
        let request = ResponseRequest::new(vec![InputMessage::user(prompt)])
            .with_agent(AgentReference::new(&agent.name));
        let response = client.responses().create(&request).await?;
        writeln!(out, "Response output: {}", response.output_text())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aifoundry_client::FoundryError;
    use std::io::Write;

    #[test]
    fn test_load_instructions_preserves_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "You locate team members.\n").unwrap();

        let instructions = load_instructions(file.path()).unwrap();
        assert_eq!(instructions, "You locate team members.\n");
    }

    #[test]
    fn test_load_instructions_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_instructions(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(error, FoundryError::Io(_)));
    }
}
