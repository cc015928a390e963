//! Shared fixtures for engine tests.

mod derive;
mod harness;

use alloy_primitives::{address, Address, Bytes, U256};
use depfeed_protocol::{DepositRecord, DepositRequest};

use crate::{DepositFeed, DepositLog, FeedConfig, MemoryLog, StaticCodeOracle};

pub(crate) const EOA_CALLER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub(crate) const CONTRACT_CALLER: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
pub(crate) const NON_ZERO_TARGET: Address = address!("1111111111111111111111111111111111111111");

/// A feed that classifies `CONTRACT_CALLER` (and only it) as a contract.
pub(crate) fn test_feed() -> DepositFeed<StaticCodeOracle, MemoryLog> {
    DepositFeed::new(
        FeedConfig::default(),
        StaticCodeOracle::new([CONTRACT_CALLER]),
        MemoryLog::new(),
    )
}

pub(crate) fn call_request() -> DepositRequest {
    DepositRequest {
        to: NON_ZERO_TARGET,
        value: U256::from(100),
        gas_limit: 50_000,
        is_creation: false,
        data: Bytes::new(),
    }
}

/// Decode the most recently emitted record, the way the derivation side
/// would read it.
pub(crate) fn decode_last_record(log: &impl DepositLog) -> DepositRecord {
    let entry = log.entries().last().expect("no record emitted");
    DepositRecord::from_log(&entry.topics, &entry.data).expect("emitted record must decode")
}
