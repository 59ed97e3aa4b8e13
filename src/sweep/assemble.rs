//! Transaction assembly
//!
//! Turns the wallet's native balance and token holdings into one ordered
//! list of transfer instructions: the native transfer first, then one token
//! transfer per non-empty holding whose destination account exists.

use super::types::{AssembledSweep, PlannedTransfer, SkippedHolding, SweepRequest};
use crate::errors::{SweepError, SweepResult};
use crate::logger::{self, LogTag};
use crate::rpc::{short_address, LedgerClient, TokenHolding};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::get_associated_token_address_with_program_id;

/// Lamports to send after keeping `reserve_lamports` behind
///
/// `None` when the balance does not exceed the reserve.
pub fn native_sweep_amount(balance: u64, reserve_lamports: u64) -> Option<u64> {
    balance
        .checked_sub(reserve_lamports)
        .filter(|lamports| *lamports > 0)
}

/// Recipient's associated token account for the holding's mint
pub fn destination_account(recipient: &Pubkey, holding: &TokenHolding) -> Pubkey {
    get_associated_token_address_with_program_id(recipient, &holding.mint, &holding.token_program)
}

#[allow(deprecated)]
fn native_transfer_instruction(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
    solana_sdk::system_instruction::transfer(from, to, lamports)
}

/// Full-balance transfer from the holding's account to `destination`
///
/// Token-2022 accounts use `transfer_checked`, which that program requires
/// for mints with extensions.
pub fn token_transfer_instruction(
    owner: &Pubkey,
    holding: &TokenHolding,
    destination: &Pubkey,
) -> SweepResult<Instruction> {
    if holding.is_token_2022() {
        spl_token_2022::instruction::transfer_checked(
            &spl_token_2022::id(),
            &holding.account,
            &holding.mint,
            destination,
            owner,
            &[],
            holding.amount,
            holding.decimals,
        )
        .map_err(|e| SweepError::instruction("transfer_checked", e))
    } else {
        spl_token::instruction::transfer(
            &spl_token::id(),
            &holding.account,
            destination,
            owner,
            &[],
            holding.amount,
        )
        .map_err(|e| SweepError::instruction("transfer", e))
    }
}

/// Assemble the sweep for `owner`
///
/// Fails with `NothingToTransfer` when no instruction survives. Any error
/// while probing a destination account counts as "missing" and skips that
/// holding.
pub async fn assemble_sweep<L: LedgerClient>(
    ledger: &L,
    owner: &Pubkey,
    request: &SweepRequest,
    native_balance: u64,
) -> SweepResult<AssembledSweep> {
    let mut assembled = AssembledSweep {
        payer: *owner,
        recipient: request.recipient,
        instructions: Vec::new(),
        transfers: Vec::new(),
        skipped: Vec::new(),
    };

    match native_sweep_amount(native_balance, request.reserve_lamports) {
        Some(lamports) => {
            assembled.instructions.push(native_transfer_instruction(
                owner,
                &request.recipient,
                lamports,
            ));
            assembled.transfers.push(PlannedTransfer::Native { lamports });
        }
        None => logger::debug(
            LogTag::Sweep,
            &format!(
                "Native balance {} does not exceed reserve {}, no SOL transfer",
                native_balance, request.reserve_lamports
            ),
        ),
    }

    for holding in &request.holdings {
        if holding.is_empty() {
            continue;
        }

        let destination = destination_account(&request.recipient, holding);
        let exists = match ledger.account_exists(&destination).await {
            Ok(exists) => exists,
            Err(e) => {
                logger::debug(
                    LogTag::Sweep,
                    &format!("Probe of {} failed: {}", destination, e),
                );
                false
            }
        };

        if !exists {
            logger::warning(
                LogTag::Sweep,
                &format!(
                    "Recipient token account {} for mint {} does not exist, skipping {} tokens",
                    short_address(&destination),
                    holding.mint,
                    holding.ui_balance()
                ),
            );
            assembled.skipped.push(SkippedHolding {
                holding: holding.clone(),
                destination,
                reason: "recipient token account does not exist".to_string(),
            });
            continue;
        }

        assembled
            .instructions
            .push(token_transfer_instruction(owner, holding, &destination)?);
        assembled.transfers.push(PlannedTransfer::Token {
            mint: holding.mint,
            source: holding.account,
            destination,
            amount: holding.amount,
            decimals: holding.decimals,
            token_program: holding.token_program,
        });
    }

    if assembled.instructions.is_empty() {
        return Err(SweepError::NothingToTransfer);
    }

    logger::debug(
        LogTag::Sweep,
        &format!(
            "Assembled {} instructions ({} token transfers, {} skipped)",
            assembled.instruction_count(),
            assembled.token_transfer_count(),
            assembled.skipped.len()
        ),
    );

    Ok(assembled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_sweep_amount() {
        assert_eq!(native_sweep_amount(1_000_000_000, 2_000_000), Some(998_000_000));
        assert_eq!(native_sweep_amount(2_000_000, 2_000_000), None);
        assert_eq!(native_sweep_amount(1_000_000, 2_000_000), None);
        assert_eq!(native_sweep_amount(0, 0), None);
    }

    #[test]
    fn test_destination_follows_token_program() {
        let recipient = Pubkey::new_unique();
        let mut holding = TokenHolding {
            mint: Pubkey::new_unique(),
            account: Pubkey::new_unique(),
            amount: 1,
            decimals: 0,
            ui_amount: Some(1.0),
            token_program: spl_token::id(),
        };
        let classic = destination_account(&recipient, &holding);
        holding.token_program = spl_token_2022::id();
        let extended = destination_account(&recipient, &holding);
        assert_ne!(classic, extended);
    }

    #[test]
    fn test_token_2022_uses_transfer_checked() {
        let owner = Pubkey::new_unique();
        let holding = TokenHolding {
            mint: Pubkey::new_unique(),
            account: Pubkey::new_unique(),
            amount: 42,
            decimals: 2,
            ui_amount: Some(0.42),
            token_program: spl_token_2022::id(),
        };
        let destination = Pubkey::new_unique();

        let ix = token_transfer_instruction(&owner, &holding, &destination).expect("instruction");
        assert_eq!(ix.program_id, spl_token_2022::id());
        // source, mint, destination, authority
        assert_eq!(ix.accounts.len(), 4);
        assert_eq!(ix.accounts[1].pubkey, holding.mint);

        match spl_token_2022::instruction::TokenInstruction::unpack(&ix.data).expect("unpack") {
            spl_token_2022::instruction::TokenInstruction::TransferChecked { amount, decimals } => {
                assert_eq!(amount, 42);
                assert_eq!(decimals, 2);
            }
            other => panic!("unexpected instruction {:?}", other),
        }
    }
}
