//! RPC-backed ledger client
//!
//! Wraps the non-blocking `solana_client` RpcClient with the timeouts from
//! the `[rpc]` config section.

mod methods;

pub use methods::LedgerClient;

use crate::config::RpcConfig;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use std::sync::Arc;
use std::time::Duration;

pub struct RpcLedger {
    client: Arc<RpcClient>,
    confirm_timeout: Duration,
    poll_interval: Duration,
}

impl RpcLedger {
    pub fn new(config: &RpcConfig, commitment: CommitmentConfig) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            config.url.clone(),
            Duration::from_secs(config.timeout_secs),
            commitment,
        );

        Self {
            client: Arc::new(client),
            confirm_timeout: Duration::from_secs(config.confirm_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Shared handle for collaborators that broadcast through the same node
    pub fn client(&self) -> Arc<RpcClient> {
        Arc::clone(&self.client)
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}
