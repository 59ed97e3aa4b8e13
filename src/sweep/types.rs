//! Sweep data model

use crate::rpc::TokenHolding;
use solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Signature, transaction::Transaction,
};

/// Everything needed to assemble one sweep
///
/// Only built once the recipient has parsed as a valid address.
#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub recipient: Pubkey,
    /// Lamports left behind for the fee
    pub reserve_lamports: u64,
    pub holdings: Vec<TokenHolding>,
}

/// One transfer included in the assembled transaction
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedTransfer {
    Native {
        lamports: u64,
    },
    Token {
        mint: Pubkey,
        source: Pubkey,
        destination: Pubkey,
        amount: u64,
        decimals: u8,
        token_program: Pubkey,
    },
}

/// A holding left out because the recipient cannot receive it yet
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedHolding {
    pub holding: TokenHolding,
    /// Associated token account the transfer would have gone to
    pub destination: Pubkey,
    pub reason: String,
}

/// Result of transaction assembly, at least one instruction long
#[derive(Debug, Clone)]
pub struct AssembledSweep {
    pub payer: Pubkey,
    pub recipient: Pubkey,
    pub instructions: Vec<Instruction>,
    /// Parallel to `instructions`
    pub transfers: Vec<PlannedTransfer>,
    pub skipped: Vec<SkippedHolding>,
}

impl AssembledSweep {
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn native_lamports(&self) -> Option<u64> {
        self.transfers.iter().find_map(|t| match t {
            PlannedTransfer::Native { lamports } => Some(*lamports),
            _ => None,
        })
    }

    pub fn token_transfer_count(&self) -> usize {
        self.transfers
            .iter()
            .filter(|t| matches!(t, PlannedTransfer::Token { .. }))
            .count()
    }

    /// Unsigned transaction with the wallet as fee payer
    pub fn to_transaction(&self) -> Transaction {
        Transaction::new_with_payer(&self.instructions, Some(&self.payer))
    }
}

/// Outcome of a submitted sweep
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionOutcome {
    Confirmed(Signature),
    Failed(String),
}

impl TransactionOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, TransactionOutcome::Confirmed(_))
    }
}

/// Per-attempt state machine
///
/// `Idle → Validating → Enumerating → Assembling → AwaitingSignature →
/// AwaitingConfirmation → Succeeded | Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepPhase {
    #[default]
    Idle,
    Validating,
    Enumerating,
    Assembling,
    AwaitingSignature,
    AwaitingConfirmation,
    Succeeded,
    Failed,
}

impl SweepPhase {
    /// Phases in which the sweep action is disabled
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SweepPhase::Enumerating
                | SweepPhase::Assembling
                | SweepPhase::AwaitingSignature
                | SweepPhase::AwaitingConfirmation
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SweepPhase::Succeeded | SweepPhase::Failed)
    }

    /// Whether the machine may move from `self` to `next`
    pub fn can_transition_to(&self, next: SweepPhase) -> bool {
        use SweepPhase::*;
        match (self, next) {
            (Idle | Succeeded | Failed, Validating) => true,
            (Validating, Enumerating | Failed) => true,
            (Enumerating, Assembling | Failed) => true,
            (Assembling, AwaitingSignature | Idle | Failed) => true,
            (AwaitingSignature, AwaitingConfirmation | Failed) => true,
            (AwaitingConfirmation, Succeeded | Failed) => true,
            _ => false,
        }
    }

    /// Label shown in the status region
    pub fn label(&self) -> &'static str {
        match self {
            SweepPhase::Idle => "Idle",
            SweepPhase::Validating => "Validating recipient...",
            SweepPhase::Enumerating => "Reading balances...",
            SweepPhase::Assembling => "Assembling transaction...",
            SweepPhase::AwaitingSignature => "Waiting for signature...",
            SweepPhase::AwaitingConfirmation => "Waiting for confirmation...",
            SweepPhase::Succeeded => "Succeeded",
            SweepPhase::Failed => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            SweepPhase::Idle,
            SweepPhase::Validating,
            SweepPhase::Enumerating,
            SweepPhase::Assembling,
            SweepPhase::AwaitingSignature,
            SweepPhase::AwaitingConfirmation,
            SweepPhase::Succeeded,
            SweepPhase::Validating,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_no_skipping_signature() {
        assert!(!SweepPhase::Assembling.can_transition_to(SweepPhase::AwaitingConfirmation));
        assert!(!SweepPhase::AwaitingSignature.can_transition_to(SweepPhase::Succeeded));
        assert!(!SweepPhase::Enumerating.can_transition_to(SweepPhase::Validating));
    }

    #[test]
    fn test_busy_phases() {
        assert!(!SweepPhase::Idle.is_busy());
        assert!(!SweepPhase::Validating.is_busy());
        assert!(SweepPhase::AwaitingSignature.is_busy());
        assert!(!SweepPhase::Failed.is_busy());
        assert!(SweepPhase::Failed.is_terminal());
    }
}
