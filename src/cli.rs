//! Definitions of CLI arguments and commands for the deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy_proxy, upgrade},
    config::EnvConfig,
    constants::{DEFAULT_INITIALIZER_METHOD, MONEYMATES_CONTRACT_NAME},
    deployer::EthersDeployer,
    errors::ScriptError,
};

/// The CLI for the MoneyMates deploy scripts
#[derive(Parser)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long)]
    pub rpc_url: String,

    /// Path to the directory containing the compiled contract artifacts
    #[arg(short, long, default_value = "artifacts")]
    pub artifacts_path: String,

    /// Path to the `deployments.json` file in which deployed addresses
    /// are recorded
    #[arg(short, long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts exposed by the CLI
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the MoneyMates contract behind an upgradeable proxy
    DeployProxy(DeployProxyArgs),
    /// Point the proxy at a new implementation contract
    Upgrade(UpgradeArgs),
}

impl Command {
    /// Run the command against the target network
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        env_config: &EnvConfig,
        artifacts_path: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployProxy(args) => {
                let deployer = EthersDeployer::new(client);
                let deployment =
                    deploy_proxy(args, env_config, &deployer, artifacts_path, deployments_path)
                        .await?;

                println!("{deployment}");
                println!(
                    "Proxy admin contract deployed at {:#x}",
                    deployment.proxy_admin_address
                );

                Ok(())
            }
            Command::Upgrade(args) => upgrade(args, client, deployments_path).await,
        }
    }
}

/// Deploy the MoneyMates upgradeable proxy contract.
///
/// Concretely, this is a [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy),
/// which itself deploys a `ProxyAdmin` contract.
///
/// Calls made directly to the `TransparentUpgradeableProxy` contract will be forwarded to the implementation contract.
/// Upgrade calls can only be made to the `TransparentUpgradeableProxy` through the `ProxyAdmin`.
#[derive(Args)]
pub struct DeployProxyArgs {
    /// Logical name of the contract deployed behind the proxy
    #[arg(short, long, default_value = MONEYMATES_CONTRACT_NAME)]
    pub contract: String,

    /// Name of the initializer function invoked on the implementation
    /// contract after proxy deployment
    #[arg(short, long, default_value = DEFAULT_INITIALIZER_METHOD)]
    pub initializer: String,
}

/// Upgrade the MoneyMates implementation
#[derive(Args)]
pub struct UpgradeArgs {
    /// Address of the proxy admin contract, in hex.
    ///
    /// Defaults to the address recorded in the deployments file
    #[arg(long)]
    pub proxy_admin: Option<String>,

    /// Address of the proxy contract, in hex.
    ///
    /// Defaults to the address recorded in the deployments file
    #[arg(long)]
    pub proxy: Option<String>,

    /// Address of the new implementation contract in hex
    #[arg(short, long)]
    pub implementation: String,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when upgrading
    #[arg(short, long)]
    pub calldata: Option<String>,
}

#[cfg(test)]
mod tests {
    //! Tests for CLI argument parsing

    use clap::Parser;

    use super::{Cli, Command};

    /// Tests that the deploy-proxy command parses with its defaults applied
    #[test]
    fn test_deploy_proxy_defaults() {
        let cli = Cli::try_parse_from([
            "moneymates-scripts",
            "--rpc-url",
            "http://localhost:8545",
            "deploy-proxy",
        ])
        .unwrap();

        assert_eq!(cli.artifacts_path, "artifacts");
        assert_eq!(cli.deployments_path, "deployments.json");

        let Command::DeployProxy(args) = cli.command else {
            panic!("expected the deploy-proxy command")
        };
        assert_eq!(args.contract, "MoneyMates");
        assert_eq!(args.initializer, "initialize");
    }

    /// Tests that the RPC URL is required
    #[test]
    fn test_rpc_url_required() {
        assert!(Cli::try_parse_from(["moneymates-scripts", "deploy-proxy"]).is_err());
    }

    /// Tests that the upgrade command parses its addresses
    #[test]
    fn test_upgrade_args() {
        let cli = Cli::try_parse_from([
            "moneymates-scripts",
            "--rpc-url",
            "http://localhost:8545",
            "upgrade",
            "--implementation",
            "0x52312ad6f01657413b2eae9287f6b9adad93d5fe",
        ])
        .unwrap();

        let Command::Upgrade(args) = cli.command else {
            panic!("expected the upgrade command")
        };
        assert!(args.proxy_admin.is_none());
        assert!(args.proxy.is_none());
        assert!(args.calldata.is_none());
        assert_eq!(
            args.implementation,
            "0x52312ad6f01657413b2eae9287f6b9adad93d5fe"
        );
    }
}
