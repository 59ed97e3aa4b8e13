//! Ledger collaborator interface and its RPC-backed implementation
//!
//! The sweep only talks to the ledger through `LedgerClient`, which keeps the
//! orchestrator testable against in-memory ledgers.

use super::RpcLedger;
use crate::errors::{SweepError, SweepResult};
use crate::logger::{self, LogTag};
use crate::rpc::types::{parse_token_account, TokenHolding};
use crate::rpc::utils::commitment_to_string;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    pubkey::Pubkey,
    signature::Signature,
};
use std::time::Instant;

/// Read and confirm operations the sweep needs from the ledger
pub trait LedgerClient {
    /// Native balance in lamports
    fn get_native_balance(
        &self,
        address: &Pubkey,
    ) -> impl std::future::Future<Output = SweepResult<u64>> + Send;

    /// Token accounts owned by `owner` under one token program
    ///
    /// Accounts without a parsed balance are left out.
    fn get_token_accounts(
        &self,
        owner: &Pubkey,
        token_program: &Pubkey,
    ) -> impl std::future::Future<Output = SweepResult<Vec<TokenHolding>>> + Send;

    /// Whether an account exists at `address`
    fn account_exists(
        &self,
        address: &Pubkey,
    ) -> impl std::future::Future<Output = SweepResult<bool>> + Send;

    /// Wait until `signature` reaches `commitment`
    ///
    /// Fails when the transaction errors on chain or the deadline passes.
    fn confirm(
        &self,
        signature: &Signature,
        commitment: CommitmentLevel,
    ) -> impl std::future::Future<Output = SweepResult<()>> + Send;
}

impl LedgerClient for RpcLedger {
    async fn get_native_balance(&self, address: &Pubkey) -> SweepResult<u64> {
        let lamports = self.client.get_balance(address).await?;
        logger::debug(
            LogTag::Rpc,
            &format!("getBalance {} -> {} lamports", address, lamports),
        );
        Ok(lamports)
    }

    async fn get_token_accounts(
        &self,
        owner: &Pubkey,
        token_program: &Pubkey,
    ) -> SweepResult<Vec<TokenHolding>> {
        let keyed_accounts = self
            .client
            .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(*token_program))
            .await?;

        logger::debug(
            LogTag::Rpc,
            &format!(
                "getTokenAccountsByOwner {} program {} -> {} accounts",
                owner,
                token_program,
                keyed_accounts.len()
            ),
        );

        let mut holdings = Vec::with_capacity(keyed_accounts.len());
        for keyed in keyed_accounts {
            let account_json = serde_json::to_value(&keyed.account)?;
            match parse_token_account(&keyed.pubkey, &account_json, token_program) {
                Ok(Some(holding)) => holdings.push(holding),
                Ok(None) => logger::debug(
                    LogTag::Rpc,
                    &format!("Token account {} has no parsed balance", keyed.pubkey),
                ),
                Err(e) => logger::warning(LogTag::Rpc, &e.to_string()),
            }
        }

        Ok(holdings)
    }

    async fn account_exists(&self, address: &Pubkey) -> SweepResult<bool> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await?;
        Ok(response.value.is_some())
    }

    async fn confirm(&self, signature: &Signature, commitment: CommitmentLevel) -> SweepResult<()> {
        let start = Instant::now();
        let commitment_config = CommitmentConfig { commitment };

        logger::debug(
            LogTag::Rpc,
            &format!(
                "Waiting for {} to reach {}",
                signature,
                commitment_to_string(commitment)
            ),
        );

        loop {
            if start.elapsed() >= self.confirm_timeout {
                return Err(SweepError::ConfirmationTimeout {
                    signature: signature.to_string(),
                    timeout_secs: self.confirm_timeout.as_secs(),
                });
            }

            match self
                .client
                .get_signature_status_with_commitment(signature, commitment_config)
                .await
            {
                Ok(Some(Ok(()))) => {
                    logger::debug(
                        LogTag::Rpc,
                        &format!(
                            "{} CONFIRMED after {}ms",
                            signature,
                            start.elapsed().as_millis()
                        ),
                    );
                    return Ok(());
                }
                Ok(Some(Err(tx_error))) => {
                    return Err(SweepError::TransactionFailed {
                        signature: signature.to_string(),
                        reason: tx_error.to_string(),
                    });
                }
                Ok(None) => {
                    logger::verbose(
                        LogTag::Rpc,
                        &format!(
                            "{} not yet {} after {}ms",
                            signature,
                            commitment_to_string(commitment),
                            start.elapsed().as_millis()
                        ),
                    );
                }
                Err(e) => {
                    // Transient error, keep polling until the deadline
                    logger::debug(LogTag::Rpc, &format!("Signature status poll failed: {}", e));
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
