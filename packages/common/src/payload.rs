//! Wire codec for the token-bridging payload carried in a message body.

use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use thiserror::Error;

use crate::message::Domain;

#[derive(Error, Debug, PartialEq)]
pub enum PayloadError {
    #[error("Invalid payload: expected 4 pipe-delimited fields, got {got}")]
    InvalidFieldCount { got: usize },

    #[error("Invalid payload amount: {value}")]
    InvalidAmount { value: String },

    #[error("Invalid payload origin domain: {value}")]
    InvalidDomain { value: String },
}

/// A token-transfer instruction as carried inside a message body.
///
/// Wire format: `{sender}|{recipient}|{amount}|{origin_domain}` with the
/// amount as an unsigned decimal string. Exactly three separators.
#[cw_serde]
pub struct TransferPayload {
    pub sender: String,
    pub recipient: String,
    pub amount: Uint128,
    pub origin_domain: Domain,
}

impl TransferPayload {
    pub fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.sender, self.recipient, self.amount, self.origin_domain
        )
    }

    pub fn decode(body: &str) -> Result<Self, PayloadError> {
        let parts: Vec<&str> = body.split('|').collect();
        if parts.len() != 4 {
            return Err(PayloadError::InvalidFieldCount { got: parts.len() });
        }

        let amount = Uint128::from_str(parts[2]).map_err(|_| PayloadError::InvalidAmount {
            value: parts[2].to_string(),
        })?;
        let origin_domain = parts[3]
            .parse::<Domain>()
            .map_err(|_| PayloadError::InvalidDomain {
                value: parts[3].to_string(),
            })?;

        Ok(Self {
            sender: parts[0].to_string(),
            recipient: parts[1].to_string(),
            amount,
            origin_domain,
        })
    }
}
