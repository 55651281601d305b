//! Type definitions used throughout the deploy scripts

use std::fmt::{self, Display};

use ethers::types::Address;

/// The addresses resulting from a completed proxy deployment
#[derive(Clone, Debug)]
pub struct ProxyDeployment {
    /// The logical name of the contract deployed behind the proxy
    pub contract_name: String,
    /// The address of the implementation contract
    pub implementation_address: Address,
    /// The address of the proxy contract, the address through which the
    /// contract is used
    pub proxy_address: Address,
    /// The address of the proxy admin contract through which upgrades are made
    pub proxy_admin_address: Address,
}

impl Display for ProxyDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} was deployed to {:#x}",
            self.contract_name, self.proxy_address
        )
    }
}

#[cfg(test)]
mod tests {
    //! Tests for deploy script types

    use ethers::types::Address;

    use super::ProxyDeployment;

    /// Tests that the deployment summary names the contract and the proxy
    /// address
    #[test]
    fn test_deployment_summary() {
        let proxy_address = Address::repeat_byte(0x02);
        let deployment = ProxyDeployment {
            contract_name: "MoneyMates".to_string(),
            implementation_address: Address::repeat_byte(0x01),
            proxy_address,
            proxy_admin_address: Address::repeat_byte(0x03),
        };

        assert_eq!(
            deployment.to_string(),
            format!("MoneyMates was deployed to {proxy_address:#x}"),
        );
    }
}
