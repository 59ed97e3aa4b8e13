//! Terminal rendering of the sweep form

use crate::rpc::short_address;
use crate::sweep::SweepForm;
use crate::wallet::WalletSession;
use colored::Colorize;

pub const TITLE: &str = "Transfer All Tokens & SOL";
pub const BUTTON_IDLE: &str = "Transfer All Tokens & SOL";
pub const BUTTON_BUSY: &str = "Transferring...";

/// Label of the sweep action for the current state
pub fn button_label(form: &SweepForm) -> &'static str {
    if form.is_loading {
        BUTTON_BUSY
    } else {
        BUTTON_IDLE
    }
}

/// Why the sweep action is disabled, `None` when it is enabled
pub fn disabled_reason(form: &SweepForm, session: &WalletSession) -> Option<&'static str> {
    if !session.is_connected() {
        Some("connect a wallet first")
    } else if form.is_loading {
        Some("a transfer is already in progress")
    } else if form.recipient.trim().is_empty() {
        Some("enter a recipient address")
    } else {
        None
    }
}

/// The whole form as printable lines
pub fn render_form(form: &SweepForm, session: &WalletSession) -> Vec<String> {
    let mut lines = vec![TITLE.bold().to_string(), String::new()];

    match session.address() {
        Some(address) => lines.push(format!("Connected wallet: {}", address)),
        None => lines.push("Please connect your wallet.".yellow().to_string()),
    }

    let recipient = if form.recipient.trim().is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        form.recipient.clone()
    };
    lines.push(format!("Recipient address: {}", recipient));

    let button = format!("[ {} ]", button_label(form));
    match disabled_reason(form, session) {
        None => lines.push(button.cyan().bold().to_string()),
        Some(reason) => lines.push(format!("{} {}", button.dimmed(), format!("({})", reason).dimmed())),
    }

    if form.phase.is_busy() {
        lines.push(form.phase.label().cyan().to_string());
    }
    if let Some(error) = &form.error {
        lines.push(error.red().to_string());
    }
    if let Some(notice) = &form.notice {
        lines.push(notice.yellow().to_string());
    }
    if let Some(success) = &form.success {
        lines.push(success.green().to_string());
    }

    lines
}

/// Loading line drawn while a sweep is in flight, `None` when idle
pub fn progress_line(form: &SweepForm) -> Option<String> {
    if !form.is_loading {
        return None;
    }
    Some(format!(
        "{} {}",
        format!("[ {} ]", button_label(form)).dimmed(),
        form.phase.label().cyan()
    ))
}

/// Progress hook for `transfer_all_with_progress`
pub fn print_progress(form: &SweepForm) {
    if let Some(line) = progress_line(form) {
        println!("{}", line);
    }
}

pub fn print_form(form: &SweepForm, session: &WalletSession) {
    println!();
    for line in render_form(form, session) {
        println!("{}", line);
    }
}

/// Header printed above the approval prompt
pub fn approval_summary(payer: Option<&solana_sdk::pubkey::Pubkey>, instructions: usize) -> String {
    match payer {
        Some(payer) => format!(
            "Approve transaction from {} with {} instruction(s)?",
            short_address(payer),
            instructions
        ),
        None => format!("Approve transaction with {} instruction(s)?", instructions),
    }
}
