//! Deposit admission engine for the L1 deposit feed.
//!
//! This crate is the stateful half of the deposit boundary:
//! - Host ports: caller classification ([`CodeOracle`]) and the append-only
//!   record log ([`DepositLog`])
//! - The admission engine itself ([`DepositFeed`]): validate, alias, emit
//! - An ordered derivation reader ([`Deriver`]) that replays the log into
//!   L2 transactions
//! - The gas-measurement harness port ([`GasMeasurer`])
//!
//! # Quick Start
//!
//! ```ignore
//! use alloy_primitives::{Address, U256};
//! use depfeed_engine::{DepositFeed, FeedConfig, MemoryLog, StaticCodeOracle};
//! use depfeed_protocol::DepositRequest;
//!
//! let mut feed =
//!     DepositFeed::new(FeedConfig::default(), StaticCodeOracle::default(), MemoryLog::new());
//!
//! let index = feed.submit_deposit(
//!     caller,
//!     U256::ZERO,
//!     DepositRequest {
//!         to: target,
//!         value: U256::from(100),
//!         gas_limit: 50_000,
//!         is_creation: false,
//!         data: Default::default(),
//!     },
//! )?;
//! ```

mod config;
pub use config::{FeedConfig, DEFAULT_MAX_GAS_LIMIT};

mod derive;
pub use derive::{DeriveError, Deriver};

mod feed;
pub use feed::{AdmissionError, DepositFeed};

mod harness;
pub use harness::{CostModelMeasurer, GasMeasurementError, GasMeasurer};

mod log;
pub use log::{DepositLog, MemoryLog};

mod oracle;
pub use oracle::{CodeOracle, StaticCodeOracle};

#[cfg(test)]
mod tests;
