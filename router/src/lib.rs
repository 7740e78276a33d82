//! Interchain Token Router Contract
//!
//! The router is the delivery endpoint for bridging messages. It marks the
//! message delivered in the mailbox (which rejects replays), decodes the
//! pipe-delimited transfer payload, and forwards a mint instruction to the
//! interchain token registered for this router's local domain.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
