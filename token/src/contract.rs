//! Interchain Token Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    credit_balance, execute_approve, execute_burn, execute_handle_remote_mint, execute_mint,
    execute_transfer, execute_transfer_from, execute_update_config, execute_x_transfer,
    reply_x_transfer,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_allowance, query_balance, query_burned_balance, query_config};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, XTRANSFER_REPLY_ID};

// ============================================================================
// Instantiate
// ============================================================================

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
        router: deps.api.addr_validate(&msg.router)?,
        mailbox: deps.api.addr_validate(&msg.mailbox)?,
        remote_router: msg.remote_router,
    };
    CONFIG.save(deps.storage, &config)?;

    for balance in &msg.initial_balances {
        credit_balance(deps.storage, &balance.account, balance.amount)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("local_domain", msg.local_domain.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("router", config.router))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, amount),
        ExecuteMsg::XTransfer {
            destination_domain,
            recipient,
            amount,
        } => execute_x_transfer(deps, info, destination_domain, recipient, amount),
        ExecuteMsg::HandleRemoteMint {
            sender,
            recipient,
            amount,
        } => execute_handle_remote_mint(deps, info, sender, recipient, amount),
        ExecuteMsg::UpdateConfig {
            router,
            mailbox,
            remote_router,
        } => execute_update_config(deps, info, router, mailbox, remote_router),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        XTRANSFER_REPLY_ID => reply_x_transfer(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Balance { account } => to_json_binary(&query_balance(deps, account)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::BurnedBalance {} => to_json_binary(&query_burned_balance(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
