//! Ledger data types and parsing of `jsonParsed` token accounts

use crate::errors::{SweepError, SweepResult};
use serde_json::Value;
use solana_account_decoder::parse_token::UiTokenAmount;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// One fungible-token account owned by the connected wallet
///
/// Raw amount and decimals travel together from enumeration to assembly, so
/// the transfer amount never has to be rebuilt from the display value.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHolding {
    /// Token mint
    pub mint: Pubkey,
    /// Source token account owned by the wallet
    pub account: Pubkey,
    /// Balance in the token's smallest unit
    pub amount: u64,
    /// Decimal precision reported by the mint
    pub decimals: u8,
    /// Human-readable balance as reported by the node
    pub ui_amount: Option<f64>,
    /// Token program that owns the account (SPL Token or Token-2022)
    pub token_program: Pubkey,
}

impl TokenHolding {
    pub fn is_token_2022(&self) -> bool {
        self.token_program == spl_token_2022::id()
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// Display balance, derived from the raw amount when the node omits it
    pub fn ui_balance(&self) -> f64 {
        self.ui_amount
            .unwrap_or_else(|| (self.amount as f64) / 10f64.powi(self.decimals as i32))
    }
}

/// Parse one keyed account returned by `getTokenAccountsByOwner`
///
/// `account_json` is the serialized `UiAccount`. Returns `Ok(None)` when the
/// node did not return a parsed token balance for the account.
pub fn parse_token_account(
    pubkey: &str,
    account_json: &Value,
    token_program: &Pubkey,
) -> SweepResult<Option<TokenHolding>> {
    let malformed = |reason: &str| SweepError::MalformedAccount {
        account: pubkey.to_string(),
        reason: reason.to_string(),
    };

    let account = Pubkey::from_str(pubkey).map_err(|e| malformed(&e.to_string()))?;

    let Some(info) = account_json
        .get("data")
        .and_then(|d| d.get("parsed"))
        .and_then(|p| p.get("info"))
    else {
        return Ok(None);
    };

    let token_amount = match info.get("tokenAmount") {
        Some(v) if !v.is_null() => v,
        _ => return Ok(None),
    };

    let mint = info
        .get("mint")
        .and_then(|m| m.as_str())
        .ok_or_else(|| malformed("missing mint"))?;
    let mint = Pubkey::from_str(mint).map_err(|e| malformed(&format!("invalid mint: {}", e)))?;

    let token_amount: UiTokenAmount = serde_json::from_value(token_amount.clone())
        .map_err(|e| malformed(&format!("invalid tokenAmount: {}", e)))?;
    let amount = token_amount
        .amount
        .parse::<u64>()
        .map_err(|e| malformed(&format!("invalid raw amount '{}': {}", token_amount.amount, e)))?;

    Ok(Some(TokenHolding {
        mint,
        account,
        amount,
        decimals: token_amount.decimals,
        ui_amount: token_amount.ui_amount,
        token_program: *token_program,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ACCOUNT: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";
    const MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    fn ui_account(token_amount: Value) -> Value {
        json!({
            "lamports": 2039280,
            "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
            "executable": false,
            "rentEpoch": 0,
            "space": 165,
            "data": {
                "program": "spl-token",
                "space": 165,
                "parsed": {
                    "type": "account",
                    "info": {
                        "isNative": false,
                        "mint": MINT,
                        "owner": "3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX",
                        "state": "initialized",
                        "tokenAmount": token_amount
                    }
                }
            }
        })
    }

    #[test]
    fn test_parse_token_account() {
        let value = ui_account(json!({
            "amount": "5000000",
            "decimals": 6,
            "uiAmount": 5.0,
            "uiAmountString": "5"
        }));

        let holding = parse_token_account(ACCOUNT, &value, &spl_token::id())
            .expect("parse")
            .expect("holding");

        assert_eq!(holding.mint.to_string(), MINT);
        assert_eq!(holding.account.to_string(), ACCOUNT);
        assert_eq!(holding.amount, 5_000_000);
        assert_eq!(holding.decimals, 6);
        assert_eq!(holding.ui_balance(), 5.0);
        assert!(!holding.is_token_2022());
    }

    #[test]
    fn test_null_token_amount_is_skipped() {
        let value = ui_account(Value::Null);
        assert_eq!(
            parse_token_account(ACCOUNT, &value, &spl_token::id()).expect("parse"),
            None
        );
    }

    #[test]
    fn test_binary_data_is_skipped() {
        let value = json!({ "data": ["AAAA", "base64"] });
        assert_eq!(
            parse_token_account(ACCOUNT, &value, &spl_token::id()).expect("parse"),
            None
        );
    }

    #[test]
    fn test_bad_raw_amount_is_malformed() {
        let value = ui_account(json!({
            "amount": "-1",
            "decimals": 6,
            "uiAmount": null,
            "uiAmountString": "-1"
        }));
        let err = parse_token_account(ACCOUNT, &value, &spl_token::id()).unwrap_err();
        assert!(matches!(err, SweepError::MalformedAccount { .. }));
    }

    #[test]
    fn test_ui_balance_falls_back_to_raw_amount() {
        let holding = TokenHolding {
            mint: Pubkey::new_unique(),
            account: Pubkey::new_unique(),
            amount: 1_500,
            decimals: 3,
            ui_amount: None,
            token_program: spl_token_2022::id(),
        };
        assert_eq!(holding.ui_balance(), 1.5);
        assert!(holding.is_token_2022());
    }
}
