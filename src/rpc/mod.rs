//! Ledger access: the `LedgerClient` seam, its RPC implementation and the
//! token account types it returns.

pub mod client;
pub mod types;
pub mod utils;

pub use client::{LedgerClient, RpcLedger};
pub use types::{parse_token_account, TokenHolding};
pub use utils::{commitment_to_string, parse_pubkey_string, short_address};
