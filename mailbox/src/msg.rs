//! Message types for the mailbox contract.

use common::Domain;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Domain identifier of the chain this mailbox serves
    pub local_domain: Domain,
    /// cw20 ledger used for dispatch fee collection, if fees are charged
    pub fee_token: Option<String>,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Register an outbound message, assigning it the next nonce and a
    /// unique identifier.
    ///
    /// The identifier is returned as [`DispatchResponse`] in the response
    /// data. If a dispatch fee is set, it is collected from the caller
    /// through the configured cw20 ledger (allowance required).
    Dispatch {
        destination_domain: Domain,
        /// Recipient account/contract identifier on the destination domain
        recipient: String,
        /// Opaque message payload
        body: String,
    },

    /// Mark an inbound message as delivered.
    ///
    /// Fails if the identifier has already been processed. `metadata` is
    /// carried for external verifiers and not interpreted here.
    Process {
        metadata: String,
        message_id: String,
    },

    /// Set the flat dispatch fee
    ///
    /// Authorization: Owner only
    SetDispatchFee { amount: Uint128 },

    /// Set the default interchain security module
    ///
    /// Authorization: Owner only
    SetDefaultIsm { module: String },

    /// Set the default post-dispatch hook
    ///
    /// Authorization: Owner only
    SetDefaultHook { hook: String },

    /// Set the required post-dispatch hook
    ///
    /// Authorization: Owner only
    SetRequiredHook { hook: String },

    /// Set or clear the cw20 ledger used for fee collection
    ///
    /// Authorization: Owner only
    SetFeeToken { token: Option<String> },

    /// Transfer contract ownership
    ///
    /// Authorization: Owner only
    UpdateOwner { new_owner: String },
}

/// Response data set by [`ExecuteMsg::Dispatch`]
#[cw_serde]
pub struct DispatchResponse {
    pub message_id: String,
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Current outbound nonce
    #[returns(NonceResponse)]
    Nonce {},
    /// Identifier of the most recently dispatched message
    #[returns(LatestDispatchedIdResponse)]
    LatestDispatchedId {},
    /// Whether a message has been delivered
    #[returns(DeliveredResponse)]
    Delivered { message_id: String },
    /// Account that processed a message, if any
    #[returns(ProcessorResponse)]
    Processor { message_id: String },
    /// Block height a message was delivered at, 0 if undelivered
    #[returns(ProcessedAtResponse)]
    ProcessedAt { message_id: String },
    /// Current dispatch fee
    #[returns(DispatchFeeResponse)]
    DispatchFee {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub local_domain: Domain,
    pub owner: Addr,
    pub default_ism: String,
    pub default_hook: String,
    pub required_hook: String,
    pub dispatch_fee: Uint128,
    pub fee_token: Option<Addr>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct LatestDispatchedIdResponse {
    pub message_id: Option<String>,
}

#[cw_serde]
pub struct DeliveredResponse {
    pub delivered: bool,
}

#[cw_serde]
pub struct ProcessorResponse {
    pub processor: Option<Addr>,
}

#[cw_serde]
pub struct ProcessedAtResponse {
    pub block_height: u64,
}

#[cw_serde]
pub struct DispatchFeeResponse {
    pub amount: Uint128,
}
