//! Gas measurement harness port.
//!
//! External tool interface: issues a single call against a target in an
//! isolated, state-reverting context and reports gas consumed. Used only to
//! characterize the cost of different request shapes; the admission engine
//! never depends on it.

use alloy_primitives::{Address, U256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GasMeasurementError {
    /// The measured call reverted inside the isolated context.
    #[error("measured call reverted: {0}")]
    CallReverted(String),

    /// The measurement host itself failed.
    #[error("measurement host failure: {0}")]
    Host(String),
}

/// Measures gas consumed by one call, without persistent side effects.
pub trait GasMeasurer {
    /// Perform `encoded_call` against `target` with `attached_value` in a
    /// state-reverting context and return the gas consumed.
    fn measure_call_gas(
        &mut self,
        target: Address,
        encoded_call: &[u8],
        attached_value: U256,
    ) -> Result<u64, GasMeasurementError>;
}

/// Deterministic cost-model double for characterization tests.
///
/// Prices a call as a flat base plus a per-byte charge, with a surcharge
/// when value is attached. Not a real measurement — just a stable stand-in
/// with the same monotonic shape.
#[derive(Debug, Clone, Copy)]
pub struct CostModelMeasurer {
    pub base: u64,
    pub per_byte: u64,
    pub value_transfer_surcharge: u64,
}

impl Default for CostModelMeasurer {
    fn default() -> Self {
        Self { base: 21_000, per_byte: 16, value_transfer_surcharge: 9_000 }
    }
}

impl GasMeasurer for CostModelMeasurer {
    fn measure_call_gas(
        &mut self,
        _target: Address,
        encoded_call: &[u8],
        attached_value: U256,
    ) -> Result<u64, GasMeasurementError> {
        let surcharge =
            if attached_value.is_zero() { 0 } else { self.value_transfer_surcharge };

        Ok(self
            .base
            .saturating_add(self.per_byte.saturating_mul(encoded_call.len() as u64))
            .saturating_add(surcharge))
    }
}
