//! Sweep orchestrator: validates the form, runs one sweep attempt and maps
//! the result back onto the form's status region.

use super::assemble::assemble_sweep;
use super::enumerate::{enumerate_holdings, token_programs};
use super::submit::submit_and_confirm;
use super::types::{AssembledSweep, PlannedTransfer, SweepPhase, SweepRequest, TransactionOutcome};
use crate::config::SweepConfig;
use crate::constants::{lamports_to_sol, MSG_SWEEP_SUCCESS};
use crate::errors::{ErrorKind, SweepError, SweepResult};
use crate::logger::{self, LogTag};
use crate::rpc::{parse_pubkey_string, short_address, LedgerClient};
use crate::wallet::WalletAdapter;
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey, signature::Signature};

/// Settings one sweep attempt runs with
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSettings {
    pub reserve_lamports: u64,
    pub commitment: CommitmentLevel,
    pub include_token_2022: bool,
    pub dry_run: bool,
}

impl SweepSettings {
    /// `dry_run_flag` comes from the command line and can only switch dry-run on
    pub fn from_config(config: &SweepConfig, dry_run_flag: bool) -> Self {
        Self {
            reserve_lamports: config.reserve_lamports,
            commitment: config.commitment_level(),
            include_token_2022: config.include_token_2022,
            dry_run: config.dry_run || dry_run_flag,
        }
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self::from_config(&SweepConfig::default(), false)
    }
}

/// State of the sweep form: one input, one action, one status region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepForm {
    pub recipient: String,
    /// Busy flag, set while a sweep is in flight
    pub is_loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Informational line (dry-run results)
    pub notice: Option<String>,
    pub phase: SweepPhase,
}

impl SweepForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            ..Self::default()
        }
    }

    /// Whether the sweep action is enabled
    pub fn can_submit(&self, connected: bool) -> bool {
        connected && !self.is_loading && !self.recipient.trim().is_empty()
    }

    fn enter(&mut self, phase: SweepPhase) {
        if !self.phase.can_transition_to(phase) {
            logger::debug(
                LogTag::Sweep,
                &format!("Unexpected phase change {:?} -> {:?}", self.phase, phase),
            );
        }
        self.phase = phase;
    }

    fn clear_status(&mut self) {
        self.error = None;
        self.success = None;
        self.notice = None;
    }

    fn fail(&mut self, err: &SweepError) {
        self.is_loading = false;
        self.enter(SweepPhase::Failed);
        self.error = Some(err.status_message());
    }
}

fn validate_form<W: WalletAdapter>(form: &SweepForm, wallet: &W) -> SweepResult<(Pubkey, Pubkey)> {
    let owner = wallet.address().ok_or(SweepError::WalletNotConnected)?;

    if form.recipient.trim().is_empty() {
        return Err(SweepError::MissingRecipient);
    }

    let recipient = parse_pubkey_string(&form.recipient)?;
    Ok((owner, recipient))
}

/// Run one sweep attempt for the form's recipient
///
/// Returns the submission outcome, or `None` when nothing was submitted
/// (ignored while busy, rejected input, nothing to transfer, dry run).
/// The recipient is never cleared.
pub async fn transfer_all<W, L>(
    form: &mut SweepForm,
    wallet: &W,
    ledger: &L,
    settings: &SweepSettings,
) -> Option<TransactionOutcome>
where
    W: WalletAdapter,
    L: LedgerClient,
{
    transfer_all_with_progress(form, wallet, ledger, settings, |_| {}).await
}

/// `transfer_all`, calling `on_change` with the form after every phase change
///
/// The form is busy (`is_loading`) for every call made between validation
/// and the terminal phase, so a renderer can draw the loading state there.
pub async fn transfer_all_with_progress<W, L>(
    form: &mut SweepForm,
    wallet: &W,
    ledger: &L,
    settings: &SweepSettings,
    mut on_change: impl FnMut(&SweepForm),
) -> Option<TransactionOutcome>
where
    W: WalletAdapter,
    L: LedgerClient,
{
    if form.is_loading {
        logger::debug(LogTag::Sweep, "Sweep already in progress, ignoring trigger");
        return None;
    }

    form.enter(SweepPhase::Validating);
    form.clear_status();
    on_change(form);

    let (owner, recipient) = match validate_form(form, wallet) {
        Ok(keys) => keys,
        Err(e) => {
            logger::warning(LogTag::Sweep, &e.to_string());
            form.fail(&e);
            on_change(form);
            return None;
        }
    };

    form.is_loading = true;
    logger::info(
        LogTag::Sweep,
        &format!(
            "Sweeping {} to {}",
            short_address(&owner),
            short_address(&recipient)
        ),
    );

    let assembled = match prepare(form, ledger, owner, recipient, settings, &mut on_change).await {
        Ok(assembled) => assembled,
        Err(e) => {
            report_failure(&e);
            form.fail(&e);
            on_change(form);
            return None;
        }
    };

    if settings.dry_run {
        let notice = describe_plan(&assembled);
        logger::info(LogTag::Sweep, &format!("Dry run: {}", notice));
        form.is_loading = false;
        form.enter(SweepPhase::Idle);
        form.notice = Some(format!("Dry run: {}. Nothing was signed.", notice));
        on_change(form);
        return None;
    }

    let result: SweepResult<Signature> = submit_and_confirm(
        wallet,
        ledger,
        assembled.to_transaction(),
        settings.commitment,
        |phase| {
            form.enter(phase);
            on_change(&*form);
        },
    )
    .await;

    let outcome = match result {
        Ok(signature) => {
            form.is_loading = false;
            form.enter(SweepPhase::Succeeded);
            form.success = Some(MSG_SWEEP_SUCCESS.to_string());
            TransactionOutcome::Confirmed(signature)
        }
        Err(e) => {
            report_failure(&e);
            form.fail(&e);
            TransactionOutcome::Failed(e.to_string())
        }
    };
    on_change(form);
    Some(outcome)
}

/// Balance read, enumeration and assembly
async fn prepare<L: LedgerClient>(
    form: &mut SweepForm,
    ledger: &L,
    owner: Pubkey,
    recipient: Pubkey,
    settings: &SweepSettings,
    on_change: &mut impl FnMut(&SweepForm),
) -> SweepResult<AssembledSweep> {
    form.enter(SweepPhase::Enumerating);
    on_change(form);
    let native_balance = ledger.get_native_balance(&owner).await?;
    let holdings = enumerate_holdings(
        ledger,
        Some(owner),
        &token_programs(settings.include_token_2022),
    )
    .await;

    logger::info(
        LogTag::Sweep,
        &format!(
            "Wallet holds {:.9} SOL and {} token accounts",
            lamports_to_sol(native_balance),
            holdings.len()
        ),
    );

    form.enter(SweepPhase::Assembling);
    on_change(form);
    let request = SweepRequest {
        recipient,
        reserve_lamports: settings.reserve_lamports,
        holdings,
    };
    assemble_sweep(ledger, &owner, &request, native_balance).await
}

fn report_failure(err: &SweepError) {
    match err.kind() {
        ErrorKind::Assembly => logger::warning(LogTag::Sweep, &err.to_string()),
        kind => logger::error(
            LogTag::Sweep,
            &format!("Sweep failed [{}]: {}", kind.as_str(), err),
        ),
    }
}

/// One-line summary of an assembled sweep
pub fn describe_plan(assembled: &AssembledSweep) -> String {
    let mut parts = Vec::new();
    for transfer in &assembled.transfers {
        match transfer {
            PlannedTransfer::Native { lamports } => {
                parts.push(format!("{:.9} SOL", lamports_to_sol(*lamports)));
            }
            PlannedTransfer::Token { mint, amount, .. } => {
                parts.push(format!("{} raw units of {}", amount, short_address(mint)));
            }
        }
    }

    let mut summary = format!(
        "{} instruction(s) to {}: {}",
        assembled.instruction_count(),
        short_address(&assembled.recipient),
        parts.join(", ")
    );
    if !assembled.skipped.is_empty() {
        summary.push_str(&format!(
            " ({} holding(s) skipped, recipient token account missing)",
            assembled.skipped.len()
        ));
    }
    summary
}
