//! Error types for the interchain token router contract.

use common::PayloadError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payload(#[from] PayloadError),

    #[error("Only the contract owner can call this method")]
    Unauthorized,

    #[error("No token registered for domain {domain}")]
    NoTokenRegistered { domain: u64 },
}
