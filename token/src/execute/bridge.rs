//! Bridging handlers (mint, burn, remote transfer) and the dispatch reply.

use common::{Domain, TransferPayload};
use cosmwasm_std::{
    from_json, to_json_binary, Addr, DepsMut, MessageInfo, Reply, Response, StdError, Storage,
    SubMsg, Uint128, WasmMsg,
};
use mailbox::msg::{DispatchResponse, ExecuteMsg as MailboxExecuteMsg};

use super::ledger::{credit_balance, debit_balance};
use crate::error::ContractError;
use crate::msg::XTransferResponse;
use crate::state::{
    Config, PendingTransfer, BURNED_ACCOUNT, CONFIG, PENDING_TRANSFER, XTRANSFER_REPLY_ID,
};

fn assert_router(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.router {
        return Err(ContractError::UnauthorizedRouter);
    }
    Ok(())
}

/// Debit `from` and credit the reserved burn-accounting account
fn burn_balance(storage: &mut dyn Storage, from: &str, amount: Uint128) -> Result<(), ContractError> {
    debit_balance(storage, from, amount)?;
    credit_balance(storage, BURNED_ACCOUNT, amount)?;
    Ok(())
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_router(&config, &info.sender)?;

    credit_balance(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    burn_balance(deps.storage, info.sender.as_str(), amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_x_transfer(
    deps: DepsMut,
    info: MessageInfo,
    destination_domain: Domain,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    burn_balance(deps.storage, info.sender.as_str(), amount)?;

    let payload = TransferPayload {
        sender: info.sender.to_string(),
        recipient: recipient.clone(),
        amount,
        origin_domain: config.local_domain,
    };

    PENDING_TRANSFER.save(
        deps.storage,
        &PendingTransfer {
            sender: payload.sender.clone(),
            recipient,
            amount,
            destination_domain,
        },
    )?;

    // Dispatch through the mailbox; the assigned identifier comes back in
    // the reply, which emits the remote_transfer attributes.
    let dispatch = WasmMsg::Execute {
        contract_addr: config.mailbox.to_string(),
        msg: to_json_binary(&MailboxExecuteMsg::Dispatch {
            destination_domain,
            recipient: config.remote_router.clone(),
            body: payload.encode(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(dispatch, XTRANSFER_REPLY_ID))
        .add_attribute("action", "x_transfer")
        .add_attribute("from", info.sender)
        .add_attribute("destination_domain", destination_domain.to_string())
        .add_attribute("amount", amount))
}

pub fn execute_handle_remote_mint(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_router(&config, &info.sender)?;

    credit_balance(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "receive_remote_transfer")
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    router: Option<String>,
    mailbox: Option<String>,
    remote_router: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if let Some(router) = router {
        config.router = deps.api.addr_validate(&router)?;
    }
    if let Some(mailbox) = mailbox {
        config.mailbox = deps.api.addr_validate(&mailbox)?;
    }
    if let Some(remote_router) = remote_router {
        config.remote_router = remote_router;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("router", config.router)
        .add_attribute("mailbox", config.mailbox)
        .add_attribute("remote_router", config.remote_router))
}

/// Reply handler for the mailbox dispatch issued by `XTransfer`
pub fn reply_x_transfer(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_TRANSFER.load(deps.storage)?;
    PENDING_TRANSFER.remove(deps.storage);

    let result = reply.result.into_result().map_err(StdError::generic_err)?;
    let data = result.data.ok_or(ContractError::MissingDispatchData)?;
    let DispatchResponse { message_id } = from_json(&data)?;

    let config = CONFIG.load(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "remote_transfer")
        .add_attribute("origin_domain", config.local_domain.to_string())
        .add_attribute("destination_domain", pending.destination_domain.to_string())
        .add_attribute("sender", pending.sender)
        .add_attribute("recipient", pending.recipient)
        .add_attribute("amount", pending.amount)
        .add_attribute("message_id", message_id.clone())
        .set_data(to_json_binary(&XTransferResponse { message_id })?))
}
