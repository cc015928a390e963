//! Caller classification port.

use std::collections::HashSet;

use alloy_primitives::Address;

/// Decides whether an address carries code at call time.
///
/// The answer classifies the caller as a contract (aliased L2 sender) or an
/// externally-owned account (pass-through sender). It is a point-in-time
/// check against the host's account metadata; the engine takes it as
/// authoritative for the duration of one admission call.
pub trait CodeOracle {
    /// Returns true if `address` currently has code.
    fn has_code(&self, address: Address) -> bool;
}

/// Oracle backed by a fixed set of known contract addresses.
///
/// Useful for tests and for hosts where the contract set is known up front.
#[derive(Debug, Clone, Default)]
pub struct StaticCodeOracle {
    contracts: HashSet<Address>,
}

impl StaticCodeOracle {
    /// Create an oracle that classifies the given addresses as contracts.
    pub fn new(contracts: impl IntoIterator<Item = Address>) -> Self {
        Self { contracts: contracts.into_iter().collect() }
    }

    /// Mark an address as having code.
    pub fn insert(&mut self, address: Address) {
        self.contracts.insert(address);
    }
}

impl CodeOracle for StaticCodeOracle {
    fn has_code(&self, address: Address) -> bool {
        self.contracts.contains(&address)
    }
}
