//! RPC utility functions

use crate::errors::{SweepError, SweepResult};
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};
use std::str::FromStr;

/// Parse a pubkey from string
pub fn parse_pubkey_string(s: &str) -> SweepResult<Pubkey> {
    Pubkey::from_str(s.trim()).map_err(|_| SweepError::InvalidRecipient {
        input: s.to_string(),
    })
}

pub fn commitment_to_string(commitment: CommitmentLevel) -> &'static str {
    match commitment {
        CommitmentLevel::Processed => "processed",
        CommitmentLevel::Confirmed => "confirmed",
        CommitmentLevel::Finalized => "finalized",
    }
}

/// Shorten an address for display: first 8 and last 4 characters
pub fn short_address(address: &Pubkey) -> String {
    let s = address.to_string();
    if s.len() <= 12 {
        return s;
    }
    format!("{}...{}", &s[..8], &s[s.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pubkey_string() {
        let key = parse_pubkey_string(" 3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX ").expect("valid");
        assert_eq!(key.to_string(), "3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX");

        let err = parse_pubkey_string("not-an-address").unwrap_err();
        assert_eq!(
            err,
            SweepError::InvalidRecipient {
                input: "not-an-address".to_string()
            }
        );
    }

    #[test]
    fn test_short_address() {
        let key = parse_pubkey_string("3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX").expect("valid");
        assert_eq!(short_address(&key), "3KBJ2uHx...hTBX");
    }
}
