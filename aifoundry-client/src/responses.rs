//! Response generation against a provisioned agent.
//!
//! Requests go to the project's OpenAI-compatible inference surface rather
//! than the management surface, so no `api-version` parameter applies.

use crate::client::ProjectClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single input message in a response request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

impl InputMessage {
    /// Create a user-role message with the given text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Reference to a named agent whose configuration drives the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReference {
    pub name: String,
    #[serde(rename = "type")]
    pub reference_type: String,
}

impl AgentReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_type: "agent_reference".to_string(),
        }
    }
}

/// Request body for response generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRequest {
    pub input: Vec<InputMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentReference>,
}

impl ResponseRequest {
    pub fn new(input: Vec<InputMessage>) -> Self {
        Self { input, agent: None }
    }

    /// Route the request through the referenced agent.
    pub fn with_agent(mut self, agent: AgentReference) -> Self {
        self.agent = Some(agent);
        self
    }
}

/// One content fragment inside an output message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputContent {
    OutputText { text: String },
    #[serde(other)]
    Other,
}

/// One item in a response's output list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message { content: Vec<OutputContent> },
    #[serde(other)]
    Other,
}

/// A completed model response.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

impl ModelResponse {
    /// Concatenate the text fragments of every output message.
    ///
    /// Non-message items and non-text fragments are skipped, so tool call
    /// records in the output list do not leak into the printed text.
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for item in &self.output {
            if let OutputItem::Message { content } = item {
                for fragment in content {
                    if let OutputContent::OutputText { text: t } = fragment {
                        text.push_str(t);
                    }
                }
            }
        }
        text
    }
}

/// Response operations, scoped to a [`ProjectClient`].
pub struct Responses<'a> {
    pub(crate) client: &'a ProjectClient,
}

impl Responses<'_> {
    /// Generate a response for the given request and wait for completion.
    pub async fn create(&self, request: &ResponseRequest) -> Result<ModelResponse> {
        tracing::debug!(
            messages = request.input.len(),
            agent = request.agent.as_ref().map(|a| a.name.as_str()),
            "creating response"
        );
        let url = self.client.inference_url("responses");
        self.client.post_json(url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_agent_reference() {
        let request = ResponseRequest::new(vec![InputMessage::user("Who is Jay Emery?")])
            .with_agent(AgentReference::new("team-locator"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "input": [{"role": "user", "content": "Who is Jay Emery?"}],
                "agent": {"name": "team-locator", "type": "agent_reference"}
            })
        );
    }

    #[test]
    fn test_output_text_concatenates_fragments() {
        let response: ModelResponse = serde_json::from_value(json!({
            "id": "resp-1",
            "output": [
                {"type": "message", "content": [
                    {"type": "output_text", "text": "Jay Emery is "},
                    {"type": "output_text", "text": "on the platform team."}
                ]}
            ]
        }))
        .unwrap();
        assert_eq!(response.output_text(), "Jay Emery is on the platform team.");
    }

    #[test]
    fn test_output_text_skips_non_message_items() {
        let response: ModelResponse = serde_json::from_value(json!({
            "output": [
                {"type": "mcp_call", "name": "lookup"},
                {"type": "message", "content": [
                    {"type": "refusal", "refusal": "no"},
                    {"type": "output_text", "text": "done"}
                ]}
            ]
        }))
        .unwrap();
        assert_eq!(response.output_text(), "done");
    }

    #[test]
    fn test_output_text_empty_when_no_output() {
        let response: ModelResponse = serde_json::from_value(json!({"id": "resp-2"})).unwrap();
        assert_eq!(response.output_text(), "");
    }
}
