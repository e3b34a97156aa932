//! # aifoundry-client
//!
//! REST client for Azure AI Foundry project endpoints.
//!
//! ## Overview
//!
//! This crate wraps the two surfaces a Foundry project exposes:
//!
//! - The management surface (connections, agents and their versions),
//!   addressed as `{endpoint}/{path}?api-version={version}`
//! - The OpenAI-compatible inference surface (responses), addressed as
//!   `{endpoint}/openai/v1/{path}`
//!
//! All operations hang off a [`ProjectClient`] and are grouped by resource:
//! [`ProjectClient::connections`], [`ProjectClient::agents`] and
//! [`ProjectClient::responses`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aifoundry_client::{ProjectClient, ProjectConfig, PromptAgentDefinition};
//!
//! # async fn run() -> aifoundry_client::Result<()> {
//! let config = ProjectConfig::new(
//!     "https://my-project.services.ai.azure.com/api/projects/demo",
//!     std::env::var("AZURE_AI_API_KEY").unwrap_or_default(),
//! );
//! let client = ProjectClient::new(config)?;
//!
//! let connection = client.connections().get("my-bing-connection").await?;
//! let definition = PromptAgentDefinition::new("gpt-4o", "You are helpful.")
//!     .with_temperature(0.25);
//! let version = client.agents().create_version("assistant", &definition).await?;
//! println!("created version {}", version.version);
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod client;
pub mod config;
pub mod connections;
pub mod error;
pub mod responses;
pub mod tools;

pub use agents::{Agent, AgentVersion, Agents, PromptAgentDefinition};
pub use client::ProjectClient;
pub use config::{DEFAULT_API_VERSION, ProjectConfig};
pub use connections::{Connection, Connections};
pub use error::{FoundryError, Result};
pub use responses::{
    AgentReference, InputMessage, ModelResponse, OutputContent, OutputItem, ResponseRequest,
    Responses,
};
pub use tools::{
    AgentTool, BingGroundingParameters, BingGroundingSearchConfiguration, RequireApproval,
};
