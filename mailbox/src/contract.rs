//! Interchain Mailbox Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_dispatch, execute_process, execute_set_default_hook, execute_set_default_ism,
    execute_set_dispatch_fee, execute_set_fee_token, execute_set_required_hook,
    execute_update_owner,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_delivered, query_dispatch_fee, query_latest_dispatched_id, query_nonce,
    query_processed_at, query_processor,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_HOOK, DEFAULT_ISM, NONCE,
    REQUIRED_HOOK,
};

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

    let fee_token = msg
        .fee_token
        .map(|t| deps.api.addr_validate(&t))
        .transpose()?;

    let config = Config {
        local_domain: msg.local_domain,
        owner: info.sender.clone(),
        default_ism: DEFAULT_ISM.to_string(),
        default_hook: DEFAULT_HOOK.to_string(),
        required_hook: REQUIRED_HOOK.to_string(),
        dispatch_fee: Uint128::zero(),
        fee_token,
    };
    CONFIG.save(deps.storage, &config)?;
    NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("local_domain", msg.local_domain.to_string())
        .add_attribute("owner", info.sender))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Dispatch {
            destination_domain,
            recipient,
            body,
        } => execute_dispatch(deps, info, destination_domain, recipient, body),
        ExecuteMsg::Process {
            metadata,
            message_id,
        } => execute_process(deps, env, info, metadata, message_id),
        ExecuteMsg::SetDispatchFee { amount } => execute_set_dispatch_fee(deps, info, amount),
        ExecuteMsg::SetDefaultIsm { module } => execute_set_default_ism(deps, info, module),
        ExecuteMsg::SetDefaultHook { hook } => execute_set_default_hook(deps, info, hook),
        ExecuteMsg::SetRequiredHook { hook } => execute_set_required_hook(deps, info, hook),
        ExecuteMsg::SetFeeToken { token } => execute_set_fee_token(deps, info, token),
        ExecuteMsg::UpdateOwner { new_owner } => execute_update_owner(deps, info, new_owner),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Nonce {} => to_json_binary(&query_nonce(deps)?),
        QueryMsg::LatestDispatchedId {} => to_json_binary(&query_latest_dispatched_id(deps)?),
        QueryMsg::Delivered { message_id } => to_json_binary(&query_delivered(deps, message_id)?),
        QueryMsg::Processor { message_id } => to_json_binary(&query_processor(deps, message_id)?),
        QueryMsg::ProcessedAt { message_id } => {
            to_json_binary(&query_processed_at(deps, message_id)?)
        }
        QueryMsg::DispatchFee {} => to_json_binary(&query_dispatch_fee(deps)?),
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
