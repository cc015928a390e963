//! The deposit admission engine.
//!
//! `submit_deposit` is the feed's single entry point: permissionless,
//! payable, and atomic per call. A call either passes every admission check
//! and appends exactly one record to the log, or it is rejected with no
//! state change at all. All protocol information flows through the emitted
//! record; the returned sequence index is host-side convenience only.

use alloy_primitives::{Address, U256};
use depfeed_protocol::{apply_l1_to_l2_alias, DepositRecord, DepositRequest};
use thiserror::Error;

use crate::{config::FeedConfig, log::DepositLog, oracle::CodeOracle};

/// Reasons an admission call is rejected.
///
/// All are detected synchronously; the submitter is responsible for
/// resubmitting with corrected parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    /// A creation deposit must target the zero address.
    #[error("creation deposit targets non-zero address {0}")]
    InvalidCreationTarget(Address),

    /// Gas limit below the intrinsic floor implied by the payload.
    #[error("gas limit {gas_limit} below intrinsic floor {minimum}")]
    GasLimitTooLow { gas_limit: u64, minimum: u64 },

    /// Gas limit above the protocol ceiling.
    #[error("gas limit {gas_limit} above ceiling {maximum}")]
    GasLimitTooHigh { gas_limit: u64, maximum: u64 },
}

/// The deposit feed: validates requests, derives the L2 sender, and emits
/// `TransactionDeposited` records to the injected log.
#[derive(Debug)]
pub struct DepositFeed<O, L> {
    config: FeedConfig,
    oracle: O,
    log: L,
    /// Native value retained across successful deposits. Accumulates
    /// monotonically; there is no engine-side withdrawal path.
    retained: U256,
}

impl<O: CodeOracle, L: DepositLog> DepositFeed<O, L> {
    pub fn new(config: FeedConfig, oracle: O, log: L) -> Self {
        Self { config, oracle, log, retained: U256::ZERO }
    }

    /// Admit a deposit request from `caller` with `sent_value` attached.
    ///
    /// On success, exactly one record is appended and its sequence index
    /// returned. On rejection, nothing is appended and no balance changes.
    pub fn submit_deposit(
        &mut self,
        caller: Address,
        sent_value: U256,
        request: DepositRequest,
    ) -> Result<u64, AdmissionError> {
        // Contract callers get an aliased L2 identity so they can never
        // collide with an address reachable by a native L2 signature.
        let from =
            if self.oracle.has_code(caller) { apply_l1_to_l2_alias(caller) } else { caller };

        if request.is_creation && request.to != Address::ZERO {
            return Err(AdmissionError::InvalidCreationTarget(request.to));
        }

        let minimum = self.config.intrinsic_gas.intrinsic_gas(&request.data);
        if request.gas_limit < minimum {
            return Err(AdmissionError::GasLimitTooLow { gas_limit: request.gas_limit, minimum });
        }

        let maximum = self.config.max_gas_limit;
        if request.gas_limit > maximum {
            return Err(AdmissionError::GasLimitTooHigh { gas_limit: request.gas_limit, maximum });
        }

        let record = DepositRecord {
            from,
            to: request.to,
            mint: request.value,
            value: sent_value,
            gas_limit: request.gas_limit,
            is_creation: request.is_creation,
            data: request.data,
        };

        let index = self.log.append(record.to_log());
        self.retained += sent_value;

        tracing::debug!(
            target: "depfeed::feed",
            index,
            from = %record.from,
            to = %record.to,
            mint = %record.mint,
            value = %record.value,
            gas_limit = record.gas_limit,
            is_creation = record.is_creation,
            "deposit admitted"
        );

        Ok(index)
    }

    /// Native value retained by the feed so far.
    pub fn retained_value(&self) -> U256 {
        self.retained
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Read access to the emitted record log.
    pub fn log(&self) -> &L {
        &self.log
    }
}
