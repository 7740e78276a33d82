//! Error types for the mailbox contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Only the contract owner can call this method")]
    Unauthorized,

    #[error("Message already delivered: {message_id}")]
    AlreadyDelivered { message_id: String },

    #[error("Dispatch fee is set but no fee token is configured")]
    FeeTokenNotSet,
}
