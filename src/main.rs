use clap::Parser;
use moneymates_scripts::{cli::Cli, config::EnvConfig, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load a `.env` file if present before reading the environment
    dotenv::dotenv().ok();

    tracing_subscriber::fmt().pretty().init();

    let Cli {
        rpc_url,
        artifacts_path,
        deployments_path,
        command,
    } = Cli::parse();

    // The required configuration is validated before any network interaction
    let env_config = EnvConfig::from_env()?;

    let client = setup_client(&env_config.private_key, &rpc_url).await?;

    command
        .run(client, &env_config, &artifacts_path, &deployments_path)
        .await
}
