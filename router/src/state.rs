//! State definitions for the interchain token router contract.

use common::Domain;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Domain identifier of the chain this router is deployed on
    pub local_domain: Domain,
    /// Owner address for registry changes
    pub owner: Addr,
    /// Local mailbox contract consulted for delivery marking
    pub mailbox: Addr,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:interchain-router";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Token registry
/// Key: domain identifier, Value: local token contract address
pub const TOKENS_BY_DOMAIN: Map<u64, Addr> = Map::new("tokens_by_domain");
