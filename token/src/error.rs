//! Error types for the interchain token contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Only the contract owner can call this method")]
    Unauthorized,

    #[error("Only the configured router can call this method")]
    UnauthorizedRouter,

    #[error("Amount must be greater than zero")]
    InvalidZeroAmount,

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance {
        balance: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: have {allowance}, need {required}")]
    InsufficientAllowance {
        allowance: Uint128,
        required: Uint128,
    },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Dispatch reply carried no data")]
    MissingDispatchData,
}
