//! Execute message handlers for the interchain token contract.

mod bridge;
mod ledger;

pub use bridge::{
    execute_burn, execute_handle_remote_mint, execute_mint, execute_update_config,
    execute_x_transfer, reply_x_transfer,
};
pub use ledger::{execute_approve, execute_transfer, execute_transfer_from};

pub(crate) use ledger::credit_balance;
