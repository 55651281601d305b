//! Definitions of Solidity interfaces called during deployment

use ethers::contract::abigen;

abigen!(
    ProxyAdminContract,
    r#"[
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external;
    ]"#,
);
