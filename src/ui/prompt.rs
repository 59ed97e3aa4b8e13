//! Blocking terminal input, moved off the async runtime

use crate::errors::{SweepError, SweepResult};
use solana_sdk::transaction::Transaction;
use std::io::{self, Write};

/// Read one line after printing `prompt`
///
/// `Ok(None)` on end of input.
pub async fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let prompt = prompt.to_string();
    tokio::task::spawn_blocking(move || -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    })
    .await
    .map_err(io::Error::other)?
}

/// Answers that approve a request
pub fn is_approval(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask the operator to approve signing `transaction`
///
/// End of input counts as a rejection.
pub async fn prompt_signature_approval(transaction: &Transaction) -> SweepResult<bool> {
    let message = &transaction.message;
    println!(
        "{}",
        super::render::approval_summary(
            message.account_keys.first(),
            message.instructions.len()
        )
    );

    let answer = read_line("Sign and send? (y/N): ")
        .await
        .map_err(|e| SweepError::Signing(format!("Failed to read approval: {}", e)))?;

    Ok(answer.as_deref().map(is_approval).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_approval() {
        assert!(is_approval("y"));
        assert!(is_approval(" YES "));
        assert!(!is_approval(""));
        assert!(!is_approval("n"));
        assert!(!is_approval("yep"));
    }
}
