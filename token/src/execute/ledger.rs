//! Fungible ledger handlers (transfer, approve, transfer_from).

use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ALLOWANCES, BALANCES};

/// Debit `from` by `amount`, failing without mutation if the balance is short
pub(crate) fn debit_balance(
    storage: &mut dyn Storage,
    from: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, from)?.unwrap_or_default();
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }
    BALANCES.save(storage, from, &(balance - amount))?;
    Ok(())
}

pub(crate) fn credit_balance(
    storage: &mut dyn Storage,
    to: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, to)?.unwrap_or_default();
    BALANCES.save(storage, to, &(balance + amount))?;
    Ok(())
}

fn assert_positive(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    Ok(())
}

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_positive(amount)?;

    debit_balance(deps.storage, info.sender.as_str(), amount)?;
    credit_balance(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_positive(amount)?;

    // Allowances accumulate rather than overwrite.
    let key = (info.sender.as_str(), spender.as_str());
    let allowance = ALLOWANCES.may_load(deps.storage, key)?.unwrap_or_default() + amount;
    ALLOWANCES.save(deps.storage, key, &allowance)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("spender", spender)
        .add_attribute("allowance", allowance))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_positive(amount)?;

    let key = (owner.as_str(), info.sender.as_str());
    let allowance = ALLOWANCES.may_load(deps.storage, key)?.unwrap_or_default();
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            allowance,
            required: amount,
        });
    }
    ALLOWANCES.save(deps.storage, key, &(allowance - amount))?;

    debit_balance(deps.storage, &owner, amount)?;
    credit_balance(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("spender", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}
