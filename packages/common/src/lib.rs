//! Common - Shared Types and Utilities for the Interchain Bridge Contracts
//!
//! This package provides the canonical message record, message identifier
//! derivation, and the bridging payload wire codec used across the mailbox,
//! token, and router contracts.

pub mod hash;
pub mod message;
pub mod payload;

pub use hash::{bytes32_to_hex, keccak256};
pub use message::{Domain, Message, MESSAGE_VERSION};
pub use payload::{PayloadError, TransferPayload};
