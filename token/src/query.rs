//! Query handlers for the interchain token contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{AllowanceResponse, BalanceResponse, BurnedBalanceResponse, ConfigResponse};
use crate::state::{ALLOWANCES, BALANCES, BURNED_ACCOUNT, CONFIG};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        local_domain: config.local_domain,
        owner: config.owner,
        router: config.router,
        mailbox: config.mailbox,
        remote_router: config.remote_router,
    })
}

pub fn query_balance(deps: Deps, account: String) -> StdResult<BalanceResponse> {
    let balance = BALANCES.may_load(deps.storage, &account)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let allowance = ALLOWANCES
        .may_load(deps.storage, (owner.as_str(), spender.as_str()))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}

pub fn query_burned_balance(deps: Deps) -> StdResult<BurnedBalanceResponse> {
    let amount = BALANCES
        .may_load(deps.storage, BURNED_ACCOUNT)?
        .unwrap_or_default();
    Ok(BurnedBalanceResponse { amount })
}
