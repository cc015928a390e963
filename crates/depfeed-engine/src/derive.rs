//! Ordered derivation reader.
//!
//! Replays the deposit log into L2 transactions in exact append order — the
//! order is authoritative and the reader never reorders, skips, or
//! deduplicates. An entry that fails to decode is fatal for that record
//! only: it is surfaced at its position and derivation continues behind it.

use alloy_primitives::B256;
use depfeed_protocol::{user_deposit_source_hash, DepositRecord, DepositTx, RecordError};
use thiserror::Error;

use crate::log::DepositLog;

/// A log entry that could not be decoded into a deposit record.
#[derive(Debug, Error)]
#[error("undecodable deposit record at index {index}: {source}")]
pub struct DeriveError {
    /// Sequence index of the offending entry.
    pub index: u64,
    #[source]
    pub source: RecordError,
}

/// Cursor-based reader over a deposit log.
///
/// The cursor is the next sequence index to derive; persist it to resume
/// where a previous pass stopped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deriver {
    cursor: u64,
}

impl Deriver {
    /// Start deriving from the beginning of the log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume deriving from a saved cursor position.
    pub fn with_cursor(cursor: u64) -> Self {
        Self { cursor }
    }

    /// Next sequence index to derive.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Derive every record appended since the last pass, in order.
    ///
    /// `l1_block_hash` anchors the source hashes of the drained records;
    /// each transaction's source hash commits to `(l1_block_hash, index)`.
    pub fn drain<L: DepositLog>(
        &mut self,
        log: &L,
        l1_block_hash: B256,
    ) -> Vec<Result<DepositTx, DeriveError>> {
        let entries = log.entries();
        let start = self.cursor as usize;
        let mut derived = Vec::with_capacity(entries.len().saturating_sub(start));

        for (offset, entry) in entries.iter().enumerate().skip(start) {
            let index = offset as u64;
            let result = DepositRecord::from_log(&entry.topics, &entry.data)
                .map(|record| record.into_l2_tx(user_deposit_source_hash(l1_block_hash, index)))
                .map_err(|source| {
                    tracing::warn!(
                        target: "depfeed::derive",
                        index,
                        error = %source,
                        "undecodable deposit record"
                    );
                    DeriveError { index, source }
                });
            derived.push(result);
        }

        // A cursor saved past the current end (e.g. restored against a
        // shorter snapshot) must not move backwards.
        self.cursor = self.cursor.max(entries.len() as u64);
        derived
    }
}
