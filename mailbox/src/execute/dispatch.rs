//! Outbound dispatch handler.

use common::{Domain, Message, MESSAGE_VERSION};
use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::msg::DispatchResponse;
use crate::state::{CONFIG, LATEST_DISPATCHED_ID, NONCE};

pub fn execute_dispatch(
    deps: DepsMut,
    info: MessageInfo,
    destination_domain: Domain,
    recipient: String,
    body: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Collect the flat fee through the configured cw20 ledger. The transfer
    // runs after this execution; a short balance or allowance reverts the
    // whole transaction, so a failed dispatch consumes no nonce.
    let mut messages: Vec<CosmosMsg> = vec![];
    if !config.dispatch_fee.is_zero() {
        let fee_token = config
            .fee_token
            .as_ref()
            .ok_or(ContractError::FeeTokenNotSet)?;
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: fee_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: config.owner.to_string(),
                amount: config.dispatch_fee,
            })?,
            funds: vec![],
        }));
    }

    let nonce = NONCE.load(deps.storage)?;

    let message = Message {
        version: MESSAGE_VERSION,
        nonce,
        origin_domain: config.local_domain,
        sender: info.sender.to_string(),
        destination_domain,
        recipient: recipient.clone(),
        body,
    };
    let message_id = message.id();

    NONCE.save(deps.storage, &(nonce + 1))?;
    LATEST_DISPATCHED_ID.save(deps.storage, &message_id)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "dispatch")
        .add_attribute("sender", info.sender)
        .add_attribute("origin_domain", config.local_domain.to_string())
        .add_attribute("destination_domain", destination_domain.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("message_id", message_id.clone())
        .add_attribute("nonce", nonce.to_string())
        .set_data(to_json_binary(&DispatchResponse { message_id })?))
}
