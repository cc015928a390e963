//! Protocol primitives for the L1 deposit feed.
//!
//! The deposit feed is the only channel by which the L2 learns about
//! L1-initiated transactions. This crate holds the pure, deterministic half
//! of that boundary:
//! - Request and record types (`DepositRequest`, `DepositRecord`)
//! - L1→L2 sender aliasing for contract-originated deposits
//! - The intrinsic-gas schedule backing the admission gas floor
//! - The `TransactionDeposited` event codec (emission and parsing)
//! - L2 deposit transaction synthesis (type 0x7E envelope)
//!
//! Everything here is side-effect free; the stateful admission engine lives
//! in `depfeed-engine`.

pub mod alias;
pub mod gas;
pub mod record;

mod l2tx;
pub use l2tx::{user_deposit_source_hash, DepositTx, DEPOSIT_TX_TYPE};

#[cfg(test)]
mod tests;

pub use alias::{apply_l1_to_l2_alias, undo_l1_to_l2_alias, L1_TO_L2_ALIAS_OFFSET};
pub use gas::IntrinsicGasSchedule;
pub use record::{
    DepositRecord, DepositRequest, LogEntry, RecordError, TRANSACTION_DEPOSITED_TOPIC,
};
