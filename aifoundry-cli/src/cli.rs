use clap::Parser;
use std::path::PathBuf;

/// Provision an Azure AI Foundry agent and smoke-test it
#[derive(Parser, Debug)]
#[command(name = "agent-provision")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the agent instructions file
    #[arg(short, long, default_value = "instructions.txt")]
    pub instructions: PathBuf,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}
