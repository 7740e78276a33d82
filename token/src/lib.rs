//! Interchain Token Contract - Bridgeable Fungible Ledger
//!
//! A fungible-balance ledger that can move value across domains through the
//! mailbox.
//!
//! # Outbound Flow (Burn)
//! 1. A holder calls `XTransfer`, burning the amount from their balance
//! 2. The transfer instruction is dispatched through the mailbox to the
//!    router instance on the destination domain
//! 3. The burned amount stays accounted on a reserved pseudo-account until
//!    the message is processed remotely
//!
//! # Inbound Flow (Mint)
//! 1. The local router processes a delivered message and forwards a mint
//!    instruction here
//! 2. The recipient is credited; only the configured router may mint
//!
//! There is no refund path: a burned amount is recoverable only by relaying
//! the dispatched message.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
