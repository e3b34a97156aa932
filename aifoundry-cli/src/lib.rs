//! # aifoundry-cli
//!
//! Command-line provisioning tool for Azure AI Foundry agents.
//!
//! ## Overview
//!
//! The `agent-provision` binary publishes a new version of a named agent
//! from environment configuration and an instructions file, then runs a
//! short smoke test against it:
//!
//! 1. Resolve the configured Bing connection name to a connection id
//! 2. Create an agent version wired to a CosmosDB MCP server and Bing
//!    grounding
//! 3. Fetch the agent back and issue two smoke prompts
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a .env file based on .env.example, then:
//! agent-provision --instructions instructions.txt
//! ```
//!
//! The flow itself lives in [`provision::run`] and writes its progress to
//! any [`std::io::Write`] sink, which is how the integration tests capture
//! it.

pub mod cli;
pub mod config;
pub mod provision;

pub use cli::Cli;
pub use config::ProvisionConfig;
