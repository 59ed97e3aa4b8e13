/// Configuration schemas - every section defined once with its defaults
use crate::config_struct;
use crate::constants::{DEFAULT_COMMITMENT, DEFAULT_RESERVE_LAMPORTS, DEFAULT_RPC_URL};
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

// ============================================================================
// RPC CONFIGURATION
// ============================================================================

config_struct! {
    /// RPC endpoint configuration
    pub struct RpcConfig {
        /// JSON-RPC endpoint of the ledger node
        url: String = DEFAULT_RPC_URL.to_string(),

        /// Per-request timeout
        timeout_secs: u64 = 30,

        /// Deadline for a submitted transaction to reach the sweep commitment
        confirm_timeout_secs: u64 = 60,

        /// Delay between signature status polls
        poll_interval_ms: u64 = 500,
    }
}

// ============================================================================
// SWEEP CONFIGURATION
// ============================================================================

config_struct! {
    /// Sweep behaviour
    pub struct SweepConfig {
        /// Lamports left in the wallet to pay the fee
        reserve_lamports: u64 = DEFAULT_RESERVE_LAMPORTS,

        /// Commitment awaited after broadcast (processed, confirmed, finalized)
        commitment: String = DEFAULT_COMMITMENT.to_string(),

        /// Pre-filled recipient in the form
        default_recipient: String = String::new(),

        /// Also sweep Token-2022 accounts. Off by default: the sweep is one
        /// atomic transaction, and a mint with a transfer hook or marked
        /// non-transferable fails it as a whole.
        include_token_2022: bool = false,

        /// Assemble but never sign
        dry_run: bool = false,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        /// Wallet private key (base58 or array format); empty means no wallet connected
        main_wallet_private: String = String::new(),

        /// RPC configuration
        rpc: RpcConfig = RpcConfig::default(),

        /// Sweep configuration
        sweep: SweepConfig = SweepConfig::default(),
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl RpcConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("rpc.url cannot be empty".to_string());
        }
        if self.poll_interval_ms == 0 {
            return Err("rpc.poll_interval_ms must be > 0".to_string());
        }
        if self.confirm_timeout_secs == 0 {
            return Err("rpc.confirm_timeout_secs must be > 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("rpc.timeout_secs must be > 0".to_string());
        }
        Ok(())
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), String> {
        parse_commitment(&self.commitment).map(|_| ())
    }

    /// Commitment level the sweep waits for
    pub fn commitment_level(&self) -> CommitmentLevel {
        parse_commitment(&self.commitment).unwrap_or(CommitmentLevel::Confirmed)
    }

    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment_level(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        self.rpc.validate()?;
        self.sweep.validate()
    }
}

/// Parse a commitment name as written in the config file
pub fn parse_commitment(name: &str) -> Result<CommitmentLevel, String> {
    match name.trim().to_lowercase().as_str() {
        "processed" => Ok(CommitmentLevel::Processed),
        "confirmed" => Ok(CommitmentLevel::Confirmed),
        "finalized" => Ok(CommitmentLevel::Finalized),
        other => Err(format!(
            "Unknown commitment '{}' (expected processed, confirmed or finalized)",
            other
        )),
    }
}
