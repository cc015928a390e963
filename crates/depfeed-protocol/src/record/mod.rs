//! Deposit requests, records, and the emitted log artifact.
//!
//! A `DepositRequest` lives for the duration of one admission call. A
//! `DepositRecord` is the durable result: appended to the feed's log exactly
//! once per admitted deposit, never mutated, and interpreted only by the
//! out-of-process derivation pipeline.

pub mod event;

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::l2tx::DepositTx;

pub use event::TRANSACTION_DEPOSITED_TOPIC;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to decode log: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("gas limit does not fit in 64 bits: {0}")]
    GasLimitOverflow(U256),
}

/// A deposit as submitted by the L1 caller, before admission.
///
/// `value` is the amount declared to be minted on L2; the native value
/// actually attached to the L1 call travels separately (they coincide for
/// simple deposits but are independently settable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositRequest {
    /// Target address on L2. Must be zero when `is_creation` is set.
    pub to: Address,
    /// Amount of the base asset to mint into the L2 transaction context.
    pub value: U256,
    /// Execution gas ceiling granted to the resulting L2 transaction.
    pub gas_limit: u64,
    /// Whether the L2 transaction is a contract creation.
    pub is_creation: bool,
    /// Calldata or init code, depending on `is_creation`.
    pub data: Bytes,
}

/// An admitted deposit as recorded in the feed's log.
///
/// `from` is the L2-visible sender: the aliased caller address when the L1
/// caller is a contract, the unmodified caller otherwise. `mint` is the
/// request's declared `value`; `value` is the native value that was attached
/// to the L1 call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositRecord {
    pub from: Address,
    pub to: Address,
    pub mint: U256,
    pub value: U256,
    pub gas_limit: u64,
    pub is_creation: bool,
    pub data: Bytes,
}

/// One emitted log entry: the wire artifact the derivation pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Event topics (signature hash plus indexed fields).
    pub topics: Vec<B256>,
    /// ABI-encoded non-indexed fields.
    pub data: Bytes,
}

impl DepositRecord {
    /// ABI-encode this record as a `TransactionDeposited` log entry.
    #[inline]
    pub fn to_log(&self) -> LogEntry {
        event::encode_log(self)
    }

    /// Parse a `TransactionDeposited` log entry back into a record.
    ///
    /// Inverse of [`to_log`](Self::to_log): rejects entries whose topic0 is
    /// not the deposit event signature, whose payload is malformed, or whose
    /// gas limit does not fit in 64 bits.
    #[inline]
    pub fn from_log(topics: &[B256], data: &[u8]) -> Result<Self, RecordError> {
        event::from_log(topics, data)
    }

    /// Synthesize the L2 transaction this record stands for.
    ///
    /// `source_hash` ties the transaction back to its position in L1 history;
    /// see [`user_deposit_source_hash`](crate::user_deposit_source_hash).
    #[inline]
    pub fn into_l2_tx(self, source_hash: B256) -> DepositTx {
        DepositTx::from_record(self, source_hash)
    }
}
