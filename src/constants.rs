/// Global constants used across the sweeper
///
/// System-wide values that are not configurable.

// ============================================================================
// SOLANA BLOCKCHAIN CONSTANTS
// ============================================================================

/// Number of decimal places for SOL
pub const SOL_DECIMALS: u8 = 9;

/// Lamports per SOL (10^9)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// SOL kept behind in the wallet to pay the transaction fee (0.002 SOL)
pub const DEFAULT_RESERVE_LAMPORTS: u64 = 2_000_000;

/// Commitment level the sweep waits for before reporting success
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Default RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

// ============================================================================
// USER-FACING MESSAGES
// ============================================================================

pub const MSG_WALLET_NOT_CONNECTED: &str = "Wallet not connected";
pub const MSG_MISSING_RECIPIENT: &str = "Please enter a recipient address";
pub const MSG_INVALID_RECIPIENT: &str = "Invalid recipient address";
pub const MSG_NOTHING_TO_TRANSFER: &str = "No tokens or SOL available to transfer.";
pub const MSG_USER_REJECTED: &str = "User rejected the request";
pub const MSG_SWEEP_SUCCESS: &str = "All tokens and SOL transferred successfully!";

/// Convert lamports to SOL for display
pub fn lamports_to_sol(lamports: u64) -> f64 {
    (lamports as f64) / (LAMPORTS_PER_SOL as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_is_two_thousandths_of_a_sol() {
        assert_eq!(DEFAULT_RESERVE_LAMPORTS, LAMPORTS_PER_SOL / 500);
        assert!((lamports_to_sol(DEFAULT_RESERVE_LAMPORTS) - 0.002).abs() < f64::EPSILON);
    }
}
