//! State definitions for the interchain token contract.

use common::Domain;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Domain identifier of the chain this token is deployed on
    pub local_domain: Domain,
    /// Owner address for configuration changes
    pub owner: Addr,
    /// Local router contract authorized to mint bridged value
    pub router: Addr,
    /// Local mailbox contract outbound transfers are dispatched through
    pub mailbox: Addr,
    /// Identifier of the router instance receiving transfers on the
    /// destination domain
    pub remote_router: String,
}

/// Context for an outbound transfer, held between the dispatch submessage
/// and its reply within a single transaction
#[cw_serde]
pub struct PendingTransfer {
    pub sender: String,
    pub recipient: String,
    pub amount: Uint128,
    pub destination_domain: Domain,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:interchain-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Reserved pseudo-account accumulating all value burned for bridging.
/// Bookkeeping only: nothing can sign as this account, so it is never
/// debitable.
pub const BURNED_ACCOUNT: &str = "bridge_burned";

/// Reply id for the mailbox dispatch issued by `XTransfer`
pub const XTRANSFER_REPLY_ID: u64 = 1;

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Account balances
/// Key: opaque account identifier, Value: balance
pub const BALANCES: Map<&str, Uint128> = Map::new("balances");

/// Approved allowances
/// Key: (owner, spender), Value: remaining allowance
pub const ALLOWANCES: Map<(&str, &str), Uint128> = Map::new("allowances");

/// In-flight outbound transfer awaiting the dispatch reply
pub const PENDING_TRANSFER: Item<PendingTransfer> = Item::new("pending_transfer");
