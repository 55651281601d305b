//! Implementations of the various deploy scripts

use std::{str::FromStr, sync::Arc};

use ethers::{
    abi::{Address, Token},
    providers::Middleware,
    types::Bytes,
    utils::hex::FromHex,
};
use tracing::info;

use crate::{
    artifacts::ContractArtifact,
    cli::{DeployProxyArgs, UpgradeArgs},
    config::EnvConfig,
    constants::{
        MONEYMATES_CONTRACT_KEY, MONEYMATES_PROXY_ADMIN_CONTRACT_KEY,
        MONEYMATES_PROXY_CONTRACT_KEY, PROXY_CONTRACT_NAME,
    },
    deployer::Deployer,
    errors::ScriptError,
    solidity::ProxyAdminContract,
    types::ProxyDeployment,
    utils::{initializer_calldata, parse_addr_from_deployments_file, write_deployed_address},
};

/// Deploy the implementation contract and the upgradeable proxy in front of
/// it, invoking the configured initializer with the fees recipient address
/// as its single argument.
pub async fn deploy_proxy(
    args: DeployProxyArgs,
    env_config: &EnvConfig,
    deployer: &impl Deployer,
    artifacts_path: &str,
    deployments_path: &str,
) -> Result<ProxyDeployment, ScriptError> {
    println!("Running deploy script for the {} contract", args.contract);

    let implementation_artifact = ContractArtifact::load(artifacts_path, &args.contract)?;
    let proxy_artifact = ContractArtifact::load(artifacts_path, PROXY_CONTRACT_NAME)?;

    // The implementation contract takes no constructor arguments;
    // its setup happens through the initializer invoked by the proxy
    let implementation_address = deployer
        .deploy(&implementation_artifact, Vec::new())
        .await?;
    info!("Implementation contract deployed at {implementation_address:#x}");

    let init_calldata = initializer_calldata(
        &implementation_artifact.abi,
        &args.initializer,
        &env_config.fees_recipient,
    )?;

    let owner_address = deployer.deployer_address()?;
    let proxy_address = deployer
        .deploy(
            &proxy_artifact,
            vec![
                Token::Address(implementation_address),
                Token::Address(owner_address),
                Token::Bytes(init_calldata),
            ],
        )
        .await?;

    let proxy_admin_address = deployer.proxy_admin_address(proxy_address).await?;

    write_deployed_address(
        deployments_path,
        MONEYMATES_CONTRACT_KEY,
        implementation_address,
    )?;
    write_deployed_address(deployments_path, MONEYMATES_PROXY_CONTRACT_KEY, proxy_address)?;
    write_deployed_address(
        deployments_path,
        MONEYMATES_PROXY_ADMIN_CONTRACT_KEY,
        proxy_admin_address,
    )?;

    Ok(ProxyDeployment {
        contract_name: implementation_artifact.contract_name,
        implementation_address,
        proxy_address,
        proxy_admin_address,
    })
}

/// Upgrade the proxy to a new implementation contract through the proxy admin
pub async fn upgrade(
    args: UpgradeArgs,
    client: Arc<impl Middleware>,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let proxy_admin_address = match args.proxy_admin {
        Some(ref addr) => parse_addr(addr)?,
        None => {
            parse_addr_from_deployments_file(deployments_path, MONEYMATES_PROXY_ADMIN_CONTRACT_KEY)?
        }
    };
    let proxy_address = match args.proxy {
        Some(ref addr) => parse_addr(addr)?,
        None => parse_addr_from_deployments_file(deployments_path, MONEYMATES_PROXY_CONTRACT_KEY)?,
    };
    let implementation_address = parse_addr(&args.implementation)?;

    let data = if let Some(calldata) = args.calldata {
        Bytes::from_hex(calldata).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?
    } else {
        Bytes::new()
    };

    let proxy_admin = ProxyAdminContract::new(proxy_admin_address, client);

    proxy_admin
        .upgrade_and_call(proxy_address, implementation_address, data)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    println!("Proxy upgraded to implementation at {implementation_address:#x}");

    Ok(())
}

/// Parse an address from a hex string
fn parse_addr(addr: &str) -> Result<Address, ScriptError> {
    Address::from_str(addr).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}
