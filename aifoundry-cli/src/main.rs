use aifoundry_cli::{Cli, ProvisionConfig, provision};
use aifoundry_client::{ProjectClient, ProjectConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit env file must exist; the default ./.env is optional.
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    init_logging();

    let config = match ProvisionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("The following environment variables are required:");
            for var in ProvisionConfig::required_vars() {
                eprintln!("  {var}");
            }
            eprintln!();
            eprintln!("They can also be supplied through a .env file; see .env.example.");
            std::process::exit(1);
        }
    };

    let instructions = provision::load_instructions(&cli.instructions)
        .with_context(|| format!("failed to read instructions from {}", cli.instructions.display()))?;

    let client = ProjectClient::new(ProjectConfig::new(&config.endpoint, &config.api_key))?;

    let mut stdout = std::io::stdout();
    provision::run(&client, &config, &instructions, &mut stdout).await?;

    Ok(())
}
