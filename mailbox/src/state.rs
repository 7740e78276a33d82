//! State definitions for the mailbox contract.

use common::Domain;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Domain identifier of the chain this mailbox is deployed on
    pub local_domain: Domain,
    /// Owner address for configuration changes and fee collection
    pub owner: Addr,
    /// Interchain security module, referenced by name for external verifiers
    pub default_ism: String,
    /// Post-dispatch hook, referenced by name
    pub default_hook: String,
    /// Hook required to run on every dispatch, referenced by name
    pub required_hook: String,
    /// Flat fee collected from the caller on every dispatch
    pub dispatch_fee: Uint128,
    /// cw20 ledger the dispatch fee is collected through
    pub fee_token: Option<Addr>,
}

/// Delivery record for a processed message.
///
/// Presence of a record means the message is delivered; records are never
/// mutated or removed.
#[cw_serde]
pub struct Delivery {
    /// Account that first processed the message
    pub processor: Addr,
    /// Block height at which delivery occurred
    pub block_height: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:interchain-mailbox";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// ISM and hook names seeded at instantiation
pub const DEFAULT_ISM: &str = "default_ism";
pub const DEFAULT_HOOK: &str = "default_hook";
pub const REQUIRED_HOOK: &str = "required_hook";

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Outbound nonce counter, incremented by exactly 1 per successful dispatch
pub const NONCE: Item<u64> = Item::new("nonce");

/// Identifier of the most recently dispatched message
pub const LATEST_DISPATCHED_ID: Item<String> = Item::new("latest_dispatched_id");

/// Delivery records
/// Key: message identifier (0x-prefixed hex), Value: Delivery
pub const DELIVERIES: Map<&str, Delivery> = Map::new("deliveries");
