/// Structured error handling for the sweeper
///
/// Errors are grouped the way the sweep surfaces them:
/// - input errors are reported before any network call
/// - enumeration errors are swallowed by the enumerator (fail-open)
/// - assembly errors stop the sweep before signing
/// - submission errors come from signing, broadcast or confirmation
use crate::constants::{
    MSG_INVALID_RECIPIENT, MSG_MISSING_RECIPIENT, MSG_NOTHING_TO_TRANSFER, MSG_USER_REJECTED,
    MSG_WALLET_NOT_CONNECTED,
};
use thiserror::Error;

pub type SweepResult<T> = Result<T, SweepError>;

/// Broad class of a failure, used for logging and status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Enumeration,
    Assembly,
    Submission,
    Configuration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Input => "INPUT",
            ErrorKind::Enumeration => "ENUMERATION",
            ErrorKind::Assembly => "ASSEMBLY",
            ErrorKind::Submission => "SUBMISSION",
            ErrorKind::Configuration => "CONFIGURATION",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    // =========================================================================
    // INPUT ERRORS
    // =========================================================================
    #[error("{}", MSG_WALLET_NOT_CONNECTED)]
    WalletNotConnected,

    #[error("{}", MSG_MISSING_RECIPIENT)]
    MissingRecipient,

    #[error("{}", MSG_INVALID_RECIPIENT)]
    InvalidRecipient { input: String },

    // =========================================================================
    // ENUMERATION ERRORS
    // =========================================================================
    #[error("Malformed token account {account}: {reason}")]
    MalformedAccount { account: String, reason: String },

    // =========================================================================
    // ASSEMBLY ERRORS
    // =========================================================================
    #[error("{}", MSG_NOTHING_TO_TRANSFER)]
    NothingToTransfer,

    #[error("Failed to build {instruction} instruction: {reason}")]
    Instruction { instruction: String, reason: String },

    // =========================================================================
    // SUBMISSION ERRORS
    // =========================================================================
    #[error("{}", MSG_USER_REJECTED)]
    Rejected,

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Transaction {signature} failed: {reason}")]
    TransactionFailed { signature: String, reason: String },

    #[error("Transaction {signature} not confirmed after {timeout_secs} seconds")]
    ConfirmationTimeout { signature: String, timeout_secs: u64 },

    // =========================================================================
    // CONFIGURATION ERRORS
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SweepError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SweepError::WalletNotConnected
            | SweepError::MissingRecipient
            | SweepError::InvalidRecipient { .. } => ErrorKind::Input,
            SweepError::MalformedAccount { .. } => ErrorKind::Enumeration,
            SweepError::NothingToTransfer | SweepError::Instruction { .. } => ErrorKind::Assembly,
            SweepError::Rejected
            | SweepError::Signing(_)
            | SweepError::Rpc(_)
            | SweepError::TransactionFailed { .. }
            | SweepError::ConfirmationTimeout { .. } => ErrorKind::Submission,
            SweepError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Create an RPC error from any displayable transport error
    pub fn rpc(err: impl std::fmt::Display) -> Self {
        SweepError::Rpc(err.to_string())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        SweepError::Configuration(message.into())
    }

    /// Create an instruction builder error
    pub fn instruction(instruction: &str, reason: impl std::fmt::Display) -> Self {
        SweepError::Instruction {
            instruction: instruction.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Text shown in the form's status region
    ///
    /// Input and assembly errors are shown verbatim, everything raised after
    /// the sweep started is prefixed the same way for every failure.
    pub fn status_message(&self) -> String {
        match self.kind() {
            ErrorKind::Input | ErrorKind::Assembly => self.to_string(),
            _ => format!("Failed to transfer: {}", self),
        }
    }
}

impl From<solana_client::client_error::ClientError> for SweepError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        SweepError::Rpc(err.to_string())
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        SweepError::MalformedAccount {
            account: "unknown".to_string(),
            reason: format!("JSON parsing error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_shown_verbatim() {
        assert_eq!(
            SweepError::WalletNotConnected.status_message(),
            "Wallet not connected"
        );
        assert_eq!(
            SweepError::InvalidRecipient { input: "abc".to_string() }.status_message(),
            "Invalid recipient address"
        );
        assert_eq!(
            SweepError::NothingToTransfer.status_message(),
            "No tokens or SOL available to transfer."
        );
    }

    #[test]
    fn test_submission_errors_are_prefixed() {
        assert_eq!(
            SweepError::Rejected.status_message(),
            "Failed to transfer: User rejected the request"
        );
        assert_eq!(
            SweepError::Rpc("connection refused".to_string()).status_message(),
            "Failed to transfer: RPC error: connection refused"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(SweepError::MissingRecipient.kind(), ErrorKind::Input);
        assert_eq!(SweepError::NothingToTransfer.kind(), ErrorKind::Assembly);
        assert_eq!(
            SweepError::ConfirmationTimeout {
                signature: "sig".to_string(),
                timeout_secs: 60
            }
            .kind(),
            ErrorKind::Submission
        );
        assert_eq!(SweepError::configuration("bad").kind(), ErrorKind::Configuration);
    }
}
