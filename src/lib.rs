//! Scripts for deploying and managing the upgradeable MoneyMates contract.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
mod commands;
pub mod config;
pub mod constants;
pub mod deployer;
pub mod errors;
mod solidity;
pub mod types;
pub mod utils;
