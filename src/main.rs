use anyhow::Context;
use wallet_sweeper::{
    arguments::{
        get_config_path, get_enabled_debug_modes, get_recipient_arg, is_any_debug_enabled,
        is_auto_approve_enabled, is_dry_run_enabled, is_help_requested, print_help,
    },
    config::{self, CONFIG_FILE_PATH},
    logger::{self, LogTag},
    rpc::RpcLedger,
    sweep::{transfer_all_with_progress, SweepForm, SweepSettings, TransactionOutcome},
    ui,
    wallet::{ApprovalMode, KeypairWallet, WalletAdapter},
};

/// Entry point
///
/// - `--recipient <addr>`: one sweep attempt, exit code reflects the outcome
/// - otherwise: interactive form until `quit`
#[tokio::main]
async fn main() {
    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::init();

    if is_any_debug_enabled() {
        logger::info(
            LogTag::System,
            &format!("Debug logs enabled for: {}", get_enabled_debug_modes().join(", ")),
        );
    }

    let exit_code = match run().await {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            logger::error(LogTag::System, &format!("{:#}", e));
            1
        }
    };

    logger::flush();
    std::process::exit(exit_code);
}

/// Returns whether the session ended without a failed sweep
async fn run() -> anyhow::Result<bool> {
    let config_path = get_config_path().unwrap_or_else(|| CONFIG_FILE_PATH.to_string());
    config::load_config_from_path(&config_path)
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;
    let config = config::get_config_clone();

    let settings = SweepSettings::from_config(&config.sweep, is_dry_run_enabled());
    let ledger = RpcLedger::new(&config.rpc, config.sweep.commitment_config());
    logger::info(
        LogTag::System,
        &format!(
            "Using RPC {} (commitment {}){}",
            ledger.url(),
            config.sweep.commitment,
            if settings.dry_run { ", dry run" } else { "" }
        ),
    );

    let approval = if is_auto_approve_enabled() {
        ApprovalMode::AutoApprove
    } else {
        ApprovalMode::Prompt
    };
    let mut wallet =
        KeypairWallet::from_private_key(&config.main_wallet_private, ledger.client(), approval)
            .context("Failed to load wallet")?;

    if let Some(recipient) = get_recipient_arg() {
        let mut form = SweepForm::new(recipient);
        let outcome =
            transfer_all_with_progress(&mut form, &wallet, &ledger, &settings, ui::print_progress)
                .await;
        ui::print_form(&form, wallet.session());

        if let Some(TransactionOutcome::Confirmed(signature)) = &outcome {
            println!("Signature: {}", signature);
        }
        return Ok(form.error.is_none());
    }

    let mut form = SweepForm::new(config.sweep.default_recipient.clone());
    ui::run_interactive(
        &mut form,
        &mut wallet,
        &ledger,
        &settings,
        &config.main_wallet_private,
    )
    .await
    .context("Interactive session failed")?;

    Ok(true)
}
