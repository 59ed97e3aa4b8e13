//! Submission: signing through the wallet, broadcast and confirmation

use super::types::SweepPhase;
use crate::errors::SweepResult;
use crate::logger::{self, LogTag};
use crate::rpc::LedgerClient;
use crate::wallet::WalletAdapter;
use solana_sdk::{
    commitment_config::CommitmentLevel, signature::Signature, transaction::Transaction,
};

/// Hand `transaction` to the wallet and wait for `commitment`
///
/// `on_phase` is told when the sweep moves from waiting on the signature to
/// waiting on the ledger.
pub async fn submit_and_confirm<W, L>(
    wallet: &W,
    ledger: &L,
    transaction: Transaction,
    commitment: CommitmentLevel,
    mut on_phase: impl FnMut(SweepPhase),
) -> SweepResult<Signature>
where
    W: WalletAdapter,
    L: LedgerClient,
{
    on_phase(SweepPhase::AwaitingSignature);
    let signature = wallet.sign_and_send(transaction).await?;

    on_phase(SweepPhase::AwaitingConfirmation);
    logger::info(
        LogTag::Sweep,
        &format!("Sweep transaction submitted: {}", signature),
    );

    ledger.confirm(&signature, commitment).await?;
    logger::info(
        LogTag::Sweep,
        &format!("Sweep transaction confirmed: {}", signature),
    );

    Ok(signature)
}
