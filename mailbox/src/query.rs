//! Query handlers for the mailbox contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    ConfigResponse, DeliveredResponse, DispatchFeeResponse, LatestDispatchedIdResponse,
    NonceResponse, ProcessedAtResponse, ProcessorResponse,
};
use crate::state::{CONFIG, DELIVERIES, LATEST_DISPATCHED_ID, NONCE};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        local_domain: config.local_domain,
        owner: config.owner,
        default_ism: config.default_ism,
        default_hook: config.default_hook,
        required_hook: config.required_hook,
        dispatch_fee: config.dispatch_fee,
        fee_token: config.fee_token,
    })
}

pub fn query_nonce(deps: Deps) -> StdResult<NonceResponse> {
    let nonce = NONCE.load(deps.storage)?;
    Ok(NonceResponse { nonce })
}

pub fn query_latest_dispatched_id(deps: Deps) -> StdResult<LatestDispatchedIdResponse> {
    let message_id = LATEST_DISPATCHED_ID.may_load(deps.storage)?;
    Ok(LatestDispatchedIdResponse { message_id })
}

pub fn query_delivered(deps: Deps, message_id: String) -> StdResult<DeliveredResponse> {
    Ok(DeliveredResponse {
        delivered: DELIVERIES.has(deps.storage, &message_id),
    })
}

pub fn query_processor(deps: Deps, message_id: String) -> StdResult<ProcessorResponse> {
    let processor = DELIVERIES
        .may_load(deps.storage, &message_id)?
        .map(|d| d.processor);
    Ok(ProcessorResponse { processor })
}

pub fn query_processed_at(deps: Deps, message_id: String) -> StdResult<ProcessedAtResponse> {
    let block_height = DELIVERIES
        .may_load(deps.storage, &message_id)?
        .map_or(0, |d| d.block_height);
    Ok(ProcessedAtResponse { block_height })
}

pub fn query_dispatch_fee(deps: Deps) -> StdResult<DispatchFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(DispatchFeeResponse {
        amount: config.dispatch_fee,
    })
}
