//! Constants used in the deploy scripts

/// The name of the environment variable holding the deployer wallet's private key
pub const WALLET_PRIVATE_KEY_ENV_VAR: &str = "WALLET_PRIVATE_KEY";

/// The name of the environment variable holding the fees recipient address
pub const FEES_RECIPIENT_ENV_VAR: &str = "FEES_RECIPIENT";

/// The default logical name of the contract deployed behind the proxy
pub const MONEYMATES_CONTRACT_NAME: &str = "MoneyMates";

/// The default name of the initializer function invoked after proxy deployment
pub const DEFAULT_INITIALIZER_METHOD: &str = "initialize";

/// The logical name of the upgradeable proxy contract artifact
///
/// Compiled from https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/transparent/TransparentUpgradeableProxy.sol
pub const PROXY_CONTRACT_NAME: &str = "TransparentUpgradeableProxy";

/// The file extension of compiled contract artifacts
pub const ARTIFACT_EXTENSION: &str = "json";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// The storage slot containing the proxy admin contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: &str =
    "0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The MoneyMates implementation contract key in the `deployments.json` file
pub const MONEYMATES_CONTRACT_KEY: &str = "moneymates_contract";

/// The MoneyMates proxy contract key in the `deployments.json` file
pub const MONEYMATES_PROXY_CONTRACT_KEY: &str = "moneymates_proxy_contract";

/// The MoneyMates proxy admin contract key in the `deployments.json` file
pub const MONEYMATES_PROXY_ADMIN_CONTRACT_KEY: &str = "moneymates_proxy_admin_contract";
