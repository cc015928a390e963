//! ABI codec for the `TransactionDeposited` event.
//!
//! The event is the entire cross-layer protocol surface: field names, field
//! order, and the ABI encoding are all normative. The emission side widens
//! `gas_limit` to `uint256` on the wire (matching the feed's call surface);
//! the parse side narrows it back and rejects values that do not fit.

use alloy_primitives::{B256, U256};
use alloy_sol_types::{sol, SolEvent};

use super::{DepositRecord, LogEntry, RecordError};

sol! {
    /// The record emitted once per admitted deposit, consumed by the L2
    /// derivation pipeline.
    #[derive(Debug)]
    event TransactionDeposited(
        address indexed from,
        address indexed to,
        uint256 mint,
        uint256 value,
        uint256 gasLimit,
        bool isCreation,
        bytes data
    );
}

/// Keccak256 hash of
/// `TransactionDeposited(address,address,uint256,uint256,uint256,bool,bytes)`.
pub const TRANSACTION_DEPOSITED_TOPIC: B256 = TransactionDeposited::SIGNATURE_HASH;

/// Encode a record as a `TransactionDeposited` log entry.
pub(crate) fn encode_log(record: &DepositRecord) -> LogEntry {
    let event = TransactionDeposited {
        from: record.from,
        to: record.to,
        mint: record.mint,
        value: record.value,
        gasLimit: U256::from(record.gas_limit),
        isCreation: record.is_creation,
        data: record.data.clone(),
    };

    let log = event.encode_log_data();
    let topics = log.topics().to_vec();
    LogEntry { topics, data: log.data }
}

/// Parse a `TransactionDeposited` log entry into a `DepositRecord`.
pub(crate) fn from_log(topics: &[B256], data: &[u8]) -> Result<DepositRecord, RecordError> {
    let log = TransactionDeposited::decode_raw_log(topics.iter().copied(), data)?;

    let gas_limit =
        u64::try_from(log.gasLimit).map_err(|_| RecordError::GasLimitOverflow(log.gasLimit))?;

    Ok(DepositRecord {
        from: log.from,
        to: log.to,
        mint: log.mint,
        value: log.value,
        gas_limit,
        is_creation: log.isCreation,
        data: log.data,
    })
}
