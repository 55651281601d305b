//! The chain-facing deployment interface and its `ethers`-backed implementation

use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use ethers::{
    abi::Token,
    contract::ContractFactory,
    providers::Middleware,
    types::{Address, H256},
};

use crate::{
    artifacts::ContractArtifact,
    constants::{
        NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT, NUM_DEPLOY_CONFIRMATIONS,
        PROXY_ADMIN_STORAGE_SLOT,
    },
    errors::ScriptError,
};

/// The interface through which the deploy commands reach the target network.
///
/// Success or failure of these operations is determined entirely by the
/// underlying client; no retries or failure classification happen here.
#[async_trait]
pub trait Deployer: Send + Sync {
    /// The address of the signing wallet performing deployments
    fn deployer_address(&self) -> Result<Address, ScriptError>;

    /// Deploy the contract described by `artifact` with the given constructor
    /// arguments, awaiting deployment confirmation
    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        constructor_args: Vec<Token>,
    ) -> Result<Address, ScriptError>;

    /// Read the proxy admin contract address from the EIP1967 admin storage
    /// slot of the proxy deployed at `proxy_address`
    async fn proxy_admin_address(&self, proxy_address: Address) -> Result<Address, ScriptError>;
}

/// A [`Deployer`] backed by an `ethers` middleware client
pub struct EthersDeployer<M> {
    /// The client used to sign and broadcast deployment transactions
    client: Arc<M>,
}

impl<M> EthersDeployer<M> {
    /// Construct a deployer around the given client
    pub fn new(client: Arc<M>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<M: Middleware> Deployer for EthersDeployer<M> {
    fn deployer_address(&self) -> Result<Address, ScriptError> {
        self.client
            .default_sender()
            .ok_or_else(|| {
                ScriptError::ClientInitialization(
                    "client does not have sender attached".to_string(),
                )
            })
    }

    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        constructor_args: Vec<Token>,
    ) -> Result<Address, ScriptError> {
        let factory = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode()?,
            self.client.clone(),
        );

        let contract = factory
            .deploy_tokens(constructor_args)
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
            .confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .send()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        Ok(contract.address())
    }

    async fn proxy_admin_address(&self, proxy_address: Address) -> Result<Address, ScriptError> {
        // This is the recommended way to get the proxy admin address:
        // https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
        let admin_slot = self
            .client
            .get_storage_at(
                proxy_address,
                // Can `unwrap` here since we know the storage slot constitutes a valid H256
                H256::from_str(PROXY_ADMIN_STORAGE_SLOT).unwrap(),
                None, /* block */
            )
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

        Ok(Address::from_slice(
            &admin_slot[NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..NUM_BYTES_STORAGE_SLOT],
        ))
    }
}
