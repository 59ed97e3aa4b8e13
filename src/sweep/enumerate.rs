//! Account enumeration
//!
//! Best-effort read of every token account the wallet owns. Read failures
//! degrade to "no holdings" for the affected program; they never abort the
//! sweep.

use crate::logger::{self, LogTag};
use crate::rpc::{LedgerClient, TokenHolding};
use solana_sdk::pubkey::Pubkey;

/// Token programs to enumerate
pub fn token_programs(include_token_2022: bool) -> Vec<Pubkey> {
    let mut programs = vec![spl_token::id()];
    if include_token_2022 {
        programs.push(spl_token_2022::id());
    }
    programs
}

/// All token holdings of `owner` across `programs`
///
/// Returns an empty list without touching the ledger when no wallet is
/// connected.
pub async fn enumerate_holdings<L: LedgerClient>(
    ledger: &L,
    owner: Option<Pubkey>,
    programs: &[Pubkey],
) -> Vec<TokenHolding> {
    let Some(owner) = owner else {
        return Vec::new();
    };

    let mut holdings = Vec::new();
    for program in programs {
        match ledger.get_token_accounts(&owner, program).await {
            Ok(found) => {
                logger::debug(
                    LogTag::Sweep,
                    &format!("{} token accounts under program {}", found.len(), program),
                );
                holdings.extend(found);
            }
            Err(e) => {
                logger::warning(
                    LogTag::Sweep,
                    &format!(
                        "Error fetching token accounts for program {}: {} (continuing without them)",
                        program, e
                    ),
                );
            }
        }
    }

    holdings
}
