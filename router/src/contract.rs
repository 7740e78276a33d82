//! Interchain Token Router Contract - Entry Points

use common::TransferPayload;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order,
    Response, StdResult, WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use interchain_token::msg::ExecuteMsg as TokenExecuteMsg;
use mailbox::msg::ExecuteMsg as MailboxExecuteMsg;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RouteResponse,
    RoutesResponse, TokenForDomainResponse,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOKENS_BY_DOMAIN};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        local_domain: msg.local_domain,
        owner: info.sender.clone(),
        mailbox: deps.api.addr_validate(&msg.mailbox)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("local_domain", msg.local_domain.to_string())
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetTokenForDomain { domain, token } => {
            execute_set_token_for_domain(deps, info, domain, token)
        }
        ExecuteMsg::Process {
            message_body,
            message_id,
        } => execute_process(deps, message_body, message_id),
        ExecuteMsg::UpdateOwner { new_owner } => execute_update_owner(deps, info, new_owner),
    }
}

fn execute_set_token_for_domain(
    deps: DepsMut,
    info: MessageInfo,
    domain: u64,
    token: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let token = deps.api.addr_validate(&token)?;
    TOKENS_BY_DOMAIN.save(deps.storage, domain, &token)?;

    Ok(Response::new()
        .add_attribute("action", "set_token_for_domain")
        .add_attribute("domain", domain.to_string())
        .add_attribute("token", token))
}

fn execute_process(
    deps: DepsMut,
    message_body: String,
    message_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let payload = TransferPayload::decode(&message_body)?;

    // Mint through the token bound to this router's own local domain; a
    // router serves exactly one local token regardless of the message's
    // origin domain.
    let token = TOKENS_BY_DOMAIN
        .may_load(deps.storage, config.local_domain)?
        .ok_or(ContractError::NoTokenRegistered {
            domain: config.local_domain,
        })?;

    // The mailbox delivery mark executes before the mint; a replay aborts
    // the whole transaction and nothing is minted.
    let process_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.mailbox.to_string(),
        msg: to_json_binary(&MailboxExecuteMsg::Process {
            metadata: message_body.clone(),
            message_id: message_id.clone(),
        })?,
        funds: vec![],
    });
    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::HandleRemoteMint {
            sender: payload.sender.clone(),
            recipient: payload.recipient,
            amount: payload.amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(process_msg)
        .add_message(mint_msg)
        .add_attribute("action", "router_message")
        .add_attribute("message_body", message_body)
        .add_attribute("message_id", message_id)
        .add_attribute("sender_domain", payload.origin_domain.to_string())
        .add_attribute("sender_address", payload.sender))
}

fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("owner", config.owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TokenForDomain { domain } => {
            to_json_binary(&query_token_for_domain(deps, domain)?)
        }
        QueryMsg::Routes { start_after, limit } => {
            to_json_binary(&query_routes(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        local_domain: config.local_domain,
        owner: config.owner,
        mailbox: config.mailbox,
    })
}

fn query_token_for_domain(deps: Deps, domain: u64) -> StdResult<TokenForDomainResponse> {
    let token = TOKENS_BY_DOMAIN.may_load(deps.storage, domain)?;
    Ok(TokenForDomainResponse { token })
}

fn query_routes(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RoutesResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start: Option<Bound<u64>> = start_after.map(Bound::exclusive);

    let routes: Vec<RouteResponse> = TOKENS_BY_DOMAIN
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (domain, token) = item?;
            Ok(RouteResponse { domain, token })
        })
        .collect::<StdResult<_>>()?;

    Ok(RoutesResponse { routes })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
