//! Inbound delivery handler.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Delivery, DELIVERIES};

pub fn execute_process(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    _metadata: String,
    message_id: String,
) -> Result<Response, ContractError> {
    // Replay check comes before any other effect. A delivery record is
    // terminal: once written it is never mutated or removed.
    if DELIVERIES.has(deps.storage, &message_id) {
        return Err(ContractError::AlreadyDelivered { message_id });
    }

    let delivery = Delivery {
        processor: info.sender.clone(),
        block_height: env.block.height,
    };
    DELIVERIES.save(deps.storage, &message_id, &delivery)?;

    Ok(Response::new()
        .add_attribute("action", "process")
        .add_attribute("message_id", message_id)
        .add_attribute("processor", info.sender)
        .add_attribute("block_height", delivery.block_height.to_string()))
}
