//! Interchain Mailbox Contract - Cross-Domain Message Dispatch & Delivery
//!
//! The mailbox assigns every outbound message a strictly increasing nonce and
//! a collision-resistant identifier, and marks inbound messages as delivered
//! exactly once.
//!
//! # Dispatch Flow
//! 1. A caller (typically a token contract) dispatches a message body to a
//!    destination domain
//! 2. The mailbox collects the flat dispatch fee, if one is set
//! 3. The assigned identifier is returned and the message is relayed
//!    off-chain
//!
//! # Delivery Flow
//! 1. A relayer submits a message identifier for processing
//! 2. The mailbox records the processor and block height, rejecting
//!    identifiers that have already been delivered
//!
//! Message authenticity verification is delegated to an interchain security
//! module, referenced by name and not invoked here.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
