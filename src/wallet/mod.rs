//! Wallet collaborator
//!
//! The sweep reads the connected address and hands finished transactions to
//! a `WalletAdapter` for signing and broadcast. `KeypairWallet` is the
//! terminal implementation backed by a configured keypair.

pub mod manager;

pub use manager::{ApprovalMode, KeypairWallet};

use crate::errors::SweepResult;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};

/// The currently connected identity
///
/// Created on connect, cleared on disconnect. The sweep only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    address: Option<Pubkey>,
}

impl WalletSession {
    pub fn connected(address: Pubkey) -> Self {
        Self {
            address: Some(address),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, address: Pubkey) {
        self.address = Some(address);
    }

    pub fn disconnect(&mut self) {
        self.address = None;
    }

    pub fn address(&self) -> Option<Pubkey> {
        self.address
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

/// Signs and broadcasts transactions for the connected address
pub trait WalletAdapter {
    fn session(&self) -> &WalletSession;

    /// Connected address, `None` when no wallet is connected
    fn address(&self) -> Option<Pubkey> {
        self.session().address()
    }

    /// Sign `transaction` as fee payer and broadcast it
    ///
    /// May wait for the user to approve. A declined request fails with
    /// `SweepError::Rejected`.
    fn sign_and_send(
        &self,
        transaction: Transaction,
    ) -> impl std::future::Future<Output = SweepResult<Signature>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = WalletSession::disconnected();
        assert!(!session.is_connected());
        assert_eq!(session.address(), None);

        let key = Pubkey::new_unique();
        session.connect(key);
        assert!(session.is_connected());
        assert_eq!(session.address(), Some(key));

        session.disconnect();
        assert_eq!(session, WalletSession::disconnected());
    }
}
