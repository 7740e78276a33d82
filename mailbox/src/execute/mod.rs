//! Execute message handlers for the mailbox contract.

mod admin;
mod dispatch;
mod process;

pub use admin::{
    execute_set_default_hook, execute_set_default_ism, execute_set_dispatch_fee,
    execute_set_fee_token, execute_set_required_hook, execute_update_owner,
};
pub use dispatch::execute_dispatch;
pub use process::execute_process;
