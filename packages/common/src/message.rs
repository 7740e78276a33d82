//! Canonical cross-domain message record and identifier derivation.

use cosmwasm_schema::cw_serde;

use crate::hash::{bytes32_to_hex, keccak256};

/// Identifier for a distinct chain/ledger participating in cross-domain
/// messaging.
pub type Domain = u64;

/// Protocol version stamped into every dispatched message.
pub const MESSAGE_VERSION: u8 = 1;

/// A cross-domain message as assembled at dispatch time.
///
/// The record itself is ephemeral; the mailbox stores only the identifier
/// derived from it.
#[cw_serde]
pub struct Message {
    pub version: u8,
    pub nonce: u64,
    pub origin_domain: Domain,
    pub sender: String,
    pub destination_domain: Domain,
    pub recipient: String,
    pub body: String,
}

impl Message {
    /// Canonical byte encoding of all seven fields.
    ///
    /// Integers are fixed-width big-endian; strings are prefixed with their
    /// u32 byte length, so no field value can shift the boundary of another.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf =
            Vec::with_capacity(37 + self.sender.len() + self.recipient.len() + self.body.len());
        buf.push(self.version);
        buf.extend(self.nonce.to_be_bytes());
        buf.extend(self.origin_domain.to_be_bytes());
        encode_str(&mut buf, &self.sender);
        buf.extend(self.destination_domain.to_be_bytes());
        encode_str(&mut buf, &self.recipient);
        encode_str(&mut buf, &self.body);
        buf
    }

    /// Derive the message identifier: keccak256 over the canonical encoding,
    /// rendered as 0x-prefixed hex.
    pub fn id(&self) -> String {
        bytes32_to_hex(&keccak256(&self.encode()))
    }
}

fn encode_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend((s.len() as u32).to_be_bytes());
    buf.extend_from_slice(s.as_bytes());
}
