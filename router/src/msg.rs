//! Message types for the interchain token router contract.

use common::Domain;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Domain identifier of the chain this router serves
    pub local_domain: Domain,
    /// Local mailbox contract
    pub mailbox: String,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Register the token contract handling bridging traffic for `domain`
    ///
    /// Authorization: Owner only
    SetTokenForDomain { domain: Domain, token: String },

    /// Deliver an inbound bridging message: mark it processed in the
    /// mailbox, decode the payload, and forward a mint instruction to the
    /// token registered for this router's local domain.
    ///
    /// A message that was already delivered fails in the mailbox and the
    /// whole call aborts without minting.
    Process {
        message_body: String,
        message_id: String,
    },

    /// Transfer contract ownership
    ///
    /// Authorization: Owner only
    UpdateOwner { new_owner: String },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Token registered for a domain, if any
    #[returns(TokenForDomainResponse)]
    TokenForDomain { domain: Domain },
    /// Paginated list of registered routes
    #[returns(RoutesResponse)]
    Routes {
        start_after: Option<Domain>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub local_domain: Domain,
    pub owner: Addr,
    pub mailbox: Addr,
}

#[cw_serde]
pub struct TokenForDomainResponse {
    pub token: Option<Addr>,
}

#[cw_serde]
pub struct RouteResponse {
    pub domain: Domain,
    pub token: Addr,
}

#[cw_serde]
pub struct RoutesResponse {
    pub routes: Vec<RouteResponse>,
}
