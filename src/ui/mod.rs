//! Terminal surface of the sweeper
//!
//! One input (the recipient), one action (sweep) and one status region,
//! redrawn after every command.

mod prompt;
mod render;

pub use prompt::{is_approval, prompt_signature_approval, read_line};
pub use render::{
    button_label, disabled_reason, print_form, print_progress, progress_line, render_form,
};

use crate::config::parse_wallet_keypair;
use crate::errors::{SweepError, SweepResult};
use crate::logger::{self, LogTag};
use crate::rpc::LedgerClient;
use crate::sweep::{transfer_all_with_progress, SweepForm, SweepSettings};
use crate::wallet::{KeypairWallet, WalletAdapter};

/// One line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty line: press the sweep button
    Sweep,
    SetRecipient(String),
    ClearRecipient,
    Connect,
    Disconnect,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Command {
    match line.trim() {
        "" => Command::Sweep,
        ":q" | "quit" | "exit" => Command::Quit,
        "connect" => Command::Connect,
        "disconnect" => Command::Disconnect,
        "clear" => Command::ClearRecipient,
        "help" | "?" => Command::Help,
        other => Command::SetRecipient(other.to_string()),
    }
}

fn print_commands() {
    println!("Type a recipient address to fill the form, press Enter to transfer.");
    println!("Other commands: clear, connect, disconnect, help, quit");
}

/// Interactive form loop, until `quit` or end of input
///
/// `private_key` is the configured key, used again on `connect`.
pub async fn run_interactive<L: LedgerClient>(
    form: &mut SweepForm,
    wallet: &mut KeypairWallet,
    ledger: &L,
    settings: &SweepSettings,
    private_key: &str,
) -> SweepResult<()> {
    print_commands();

    loop {
        print_form(form, wallet.session());

        let line = read_line("> ")
            .await
            .map_err(|e| SweepError::configuration(format!("Failed to read input: {}", e)))?;
        let Some(line) = line else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => print_commands(),
            Command::SetRecipient(recipient) => form.recipient = recipient,
            Command::ClearRecipient => form.recipient.clear(),
            Command::Disconnect => wallet.disconnect(),
            Command::Connect => match parse_wallet_keypair(private_key) {
                Ok(Some(keypair)) => wallet.connect(keypair),
                Ok(None) => logger::warning(
                    LogTag::Ui,
                    "No wallet key configured (main_wallet_private is empty)",
                ),
                Err(e) => logger::error(LogTag::Ui, &format!("Cannot connect wallet: {}", e)),
            },
            Command::Sweep => {
                if let Some(reason) = disabled_reason(form, wallet.session()) {
                    logger::info(LogTag::Ui, &format!("Transfer unavailable: {}", reason));
                    continue;
                }
                transfer_all_with_progress(form, &*wallet, ledger, settings, print_progress)
                    .await;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(""), Command::Sweep);
        assert_eq!(parse_command("   "), Command::Sweep);
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command("disconnect"), Command::Disconnect);
        assert_eq!(
            parse_command(" 3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX "),
            Command::SetRecipient("3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX".to_string())
        );
    }
}
