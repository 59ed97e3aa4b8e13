//! Keypair-backed wallet
//!
//! Holds the configured keypair, asks the operator before signing unless
//! auto-approval is on, then signs with a fresh blockhash and broadcasts
//! through the shared RPC client.

use super::{WalletAdapter, WalletSession};
use crate::config::parse_wallet_keypair;
use crate::errors::{SweepError, SweepResult};
use crate::logger::{self, LogTag};
use crate::ui;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::sync::Arc;

/// How signing requests are approved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalMode {
    /// Ask on the terminal for every transaction
    Prompt,
    /// Sign without asking (--yes)
    AutoApprove,
}

pub struct KeypairWallet {
    keypair: Option<Keypair>,
    session: WalletSession,
    client: Arc<RpcClient>,
    approval: ApprovalMode,
}

impl KeypairWallet {
    /// Build a wallet from the configured private key
    ///
    /// An empty key gives a disconnected wallet.
    pub fn from_private_key(
        private_key: &str,
        client: Arc<RpcClient>,
        approval: ApprovalMode,
    ) -> SweepResult<Self> {
        let keypair = parse_wallet_keypair(private_key).map_err(SweepError::configuration)?;

        let mut wallet = Self {
            keypair: None,
            session: WalletSession::disconnected(),
            client,
            approval,
        };
        if let Some(keypair) = keypair {
            wallet.connect(keypair);
        }
        Ok(wallet)
    }

    pub fn connect(&mut self, keypair: Keypair) {
        let address = keypair.pubkey();
        self.keypair = Some(keypair);
        self.session.connect(address);
        logger::info(LogTag::Wallet, &format!("Wallet connected: {}", address));
    }

    pub fn disconnect(&mut self) {
        if let Some(address) = self.session.address() {
            logger::info(LogTag::Wallet, &format!("Wallet disconnected: {}", address));
        }
        self.keypair = None;
        self.session.disconnect();
    }

    async fn approve(&self, transaction: &Transaction) -> SweepResult<()> {
        match self.approval {
            ApprovalMode::AutoApprove => Ok(()),
            ApprovalMode::Prompt => {
                if ui::prompt_signature_approval(transaction).await? {
                    Ok(())
                } else {
                    Err(SweepError::Rejected)
                }
            }
        }
    }
}

impl WalletAdapter for KeypairWallet {
    fn session(&self) -> &WalletSession {
        &self.session
    }

    async fn sign_and_send(&self, mut transaction: Transaction) -> SweepResult<Signature> {
        let keypair = self.keypair.as_ref().ok_or(SweepError::WalletNotConnected)?;

        self.approve(&transaction).await?;

        let blockhash = self.client.get_latest_blockhash().await?;
        transaction
            .try_sign(&[keypair], blockhash)
            .map_err(|e| SweepError::Signing(e.to_string()))?;

        let signature = self.client.send_transaction(&transaction).await?;
        logger::info(LogTag::Wallet, &format!("Transaction sent: {}", signature));

        Ok(signature)
    }
}
