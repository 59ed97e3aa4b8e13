//! The sweep: enumerate holdings, assemble one transaction, submit it.

pub mod assemble;
pub mod enumerate;
pub mod orchestrator;
pub mod submit;
pub mod types;


pub use assemble::{assemble_sweep, destination_account, native_sweep_amount};
pub use enumerate::{enumerate_holdings, token_programs};
pub use orchestrator::{
    describe_plan, transfer_all, transfer_all_with_progress, SweepForm, SweepSettings,
};
pub use submit::submit_and_confirm;
pub use types::{
    AssembledSweep, PlannedTransfer, SkippedHolding, SweepPhase, SweepRequest, TransactionOutcome,
};
