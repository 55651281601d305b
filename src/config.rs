//! Environment-sourced configuration for the deploy scripts

use std::env;

use crate::{
    constants::{FEES_RECIPIENT_ENV_VAR, WALLET_PRIVATE_KEY_ENV_VAR},
    errors::ScriptError,
};

/// The required configuration values, read from the environment before any
/// network interaction is attempted
#[derive(Debug)]
pub struct EnvConfig {
    /// The hex-encoded private key of the deployer wallet
    pub private_key: String,
    /// The address receiving protocol fees, passed to the initializer
    pub fees_recipient: String,
}

impl EnvConfig {
    /// Read the required configuration from the process environment
    pub fn from_env() -> Result<Self, ScriptError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read the required configuration through `lookup`.
    ///
    /// Empty values are treated as absent.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScriptError> {
        let private_key = lookup(WALLET_PRIVATE_KEY_ENV_VAR)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ScriptError::MissingConfig(format!(
                    "wallet private key not detected, set {WALLET_PRIVATE_KEY_ENV_VAR} in the environment or .env file"
                ))
            })?;

        let fees_recipient = lookup(FEES_RECIPIENT_ENV_VAR)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ScriptError::MissingConfig(format!(
                    "fees recipient not detected, set {FEES_RECIPIENT_ENV_VAR} in the environment or .env file"
                ))
            })?;

        Ok(Self {
            private_key,
            fees_recipient,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Tests for reading the required environment configuration

    use crate::{
        constants::{FEES_RECIPIENT_ENV_VAR, WALLET_PRIVATE_KEY_ENV_VAR},
        errors::ScriptError,
    };

    use super::EnvConfig;

    /// A private key value used in tests
    const TEST_PRIVATE_KEY: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    /// A fees recipient value used in tests
    const TEST_FEES_RECIPIENT: &str = "0x52312ad6f01657413b2eae9287f6b9adad93d5fe";

    /// Build a lookup over a fixed set of (variable, value) pairs
    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |var| {
            pairs
                .iter()
                .find(|(name, _)| *name == var)
                .map(|(_, value)| value.to_string())
        }
    }

    /// Tests that both values present yields the configuration
    #[test]
    fn test_both_values_present() {
        let config = EnvConfig::from_lookup(lookup_from(&[
            (WALLET_PRIVATE_KEY_ENV_VAR, TEST_PRIVATE_KEY),
            (FEES_RECIPIENT_ENV_VAR, TEST_FEES_RECIPIENT),
        ]))
        .unwrap();

        assert_eq!(config.private_key, TEST_PRIVATE_KEY);
        assert_eq!(config.fees_recipient, TEST_FEES_RECIPIENT);
    }

    /// Tests that a missing private key is reported as such, without
    /// mentioning the fees recipient
    #[test]
    fn test_missing_private_key() {
        let err = EnvConfig::from_lookup(lookup_from(&[(
            FEES_RECIPIENT_ENV_VAR,
            TEST_FEES_RECIPIENT,
        )]))
        .unwrap_err();

        assert!(matches!(err, ScriptError::MissingConfig(_)));
        let message = err.to_string();
        assert!(message.contains(WALLET_PRIVATE_KEY_ENV_VAR));
        assert!(!message.contains(FEES_RECIPIENT_ENV_VAR));
        assert!(!message.contains("recipient"));
    }

    /// Tests that a missing fees recipient is reported as such, without
    /// mentioning the private key
    #[test]
    fn test_missing_fees_recipient() {
        let err = EnvConfig::from_lookup(lookup_from(&[(
            WALLET_PRIVATE_KEY_ENV_VAR,
            TEST_PRIVATE_KEY,
        )]))
        .unwrap_err();

        assert!(matches!(err, ScriptError::MissingConfig(_)));
        let message = err.to_string();
        assert!(message.contains(FEES_RECIPIENT_ENV_VAR));
        assert!(!message.contains(WALLET_PRIVATE_KEY_ENV_VAR));
        assert!(!message.contains("private key"));
    }

    /// Tests that with both values absent a missing value is still reported
    #[test]
    fn test_missing_both() {
        let err = EnvConfig::from_lookup(lookup_from(&[])).unwrap_err();

        assert!(matches!(err, ScriptError::MissingConfig(_)));
        assert!(err.to_string().contains(WALLET_PRIVATE_KEY_ENV_VAR));
    }

    /// Tests that an empty value is treated as absent
    #[test]
    fn test_empty_value_treated_as_missing() {
        let err = EnvConfig::from_lookup(lookup_from(&[
            (WALLET_PRIVATE_KEY_ENV_VAR, ""),
            (FEES_RECIPIENT_ENV_VAR, TEST_FEES_RECIPIENT),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains(WALLET_PRIVATE_KEY_ENV_VAR));
    }
}
