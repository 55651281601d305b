//! Utilities for the deploy scripts.

use std::{
    fs::{self, File},
    io::Read,
    path::PathBuf,
    str::FromStr,
    sync::Arc,
};

use ethers::{
    abi::{Abi, Address, Token},
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use json::JsonValue;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Sets up the client with which to interact with the target network,
/// deriving the signing wallet from the deployer's private key.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.clone().with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Parse the given file into a JSON value
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Parse the address stored under `contract_key` in the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(
                    "Could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Write the address deployed for `contract_key` to the deployments file
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

/// Prepare calldata for the initializer method invoked after proxy deployment.
///
/// The initializer is looked up in the implementation ABI by the configured
/// name and receives exactly one argument, the fees recipient address.
pub fn initializer_calldata(
    abi: &Abi,
    initializer: &str,
    fees_recipient: &str,
) -> Result<Vec<u8>, ScriptError> {
    let recipient = Address::from_str(fees_recipient)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    let function = abi.function(initializer).map_err(|e| {
        ScriptError::CalldataConstruction(format!("initializer `{initializer}`: {e}"))
    })?;

    function
        .encode_input(&[Token::Address(recipient)])
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}
