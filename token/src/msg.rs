//! Message types for the interchain token contract.

use common::Domain;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// A balance credited at instantiation
#[cw_serde]
pub struct InitialBalance {
    pub account: String,
    pub amount: Uint128,
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Domain identifier of the chain this token serves
    pub local_domain: Domain,
    /// Local router contract authorized to mint
    pub router: String,
    /// Local mailbox contract
    pub mailbox: String,
    /// Identifier of the router instance that receives transfers on the
    /// destination domain
    pub remote_router: String,
    /// Balances credited at instantiation
    pub initial_balances: Vec<InitialBalance>,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Move `amount` from the caller to `recipient`
    Transfer { recipient: String, amount: Uint128 },

    /// Grant `spender` an additional `amount` of allowance over the caller's
    /// balance. Allowances accumulate; approving twice adds up.
    Approve { spender: String, amount: Uint128 },

    /// Move `amount` from `owner` to `recipient`, spending the caller's
    /// allowance
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Credit `recipient` with newly minted value
    ///
    /// Authorization: Router only
    Mint { recipient: String, amount: Uint128 },

    /// Burn `amount` from the caller's balance, crediting the reserved
    /// burn-accounting account
    Burn { amount: Uint128 },

    /// Burn `amount` locally and dispatch a transfer instruction to
    /// `destination_domain` through the mailbox.
    ///
    /// The assigned message identifier is returned as [`XTransferResponse`]
    /// in the response data. There is no refund on relay failure: the burn
    /// stands until the message is processed on the destination domain.
    XTransfer {
        destination_domain: Domain,
        recipient: String,
        amount: Uint128,
    },

    /// Credit `recipient` for a transfer burned on a remote domain
    ///
    /// Authorization: Router only. The router forwards this only after the
    /// mailbox has accepted delivery of the carrying message.
    HandleRemoteMint {
        sender: String,
        recipient: String,
        amount: Uint128,
    },

    /// Rebind the router, mailbox, or remote router references
    ///
    /// Authorization: Owner only
    UpdateConfig {
        router: Option<String>,
        mailbox: Option<String>,
        remote_router: Option<String>,
    },
}

/// Response data set by [`ExecuteMsg::XTransfer`]
#[cw_serde]
pub struct XTransferResponse {
    pub message_id: String,
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Balance of an account, zero if unknown
    #[returns(BalanceResponse)]
    Balance { account: String },
    /// Remaining allowance granted by `owner` to `spender`
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Total amount burned for bridging
    #[returns(BurnedBalanceResponse)]
    BurnedBalance {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub local_domain: Domain,
    pub owner: Addr,
    pub router: Addr,
    pub mailbox: Addr,
    pub remote_router: String,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct BurnedBalanceResponse {
    pub amount: Uint128,
}
