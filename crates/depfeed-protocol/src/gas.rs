//! Intrinsic gas accounting for deposit payloads.
//!
//! The admission floor: a deposit's gas limit must cover at least the cost
//! implied by its payload size, independent of execution. The schedule is a
//! configuration input rather than a constant so hosts can track their own
//! fee rules; the floor is monotonically non-decreasing in payload length
//! for any parameter choice.

use serde::{Deserialize, Serialize};

/// Default flat cost charged to every deposit.
pub const DEFAULT_BASE_INTRINSIC_GAS: u64 = 21_000;

/// Default cost per zero byte of payload.
pub const DEFAULT_ZERO_BYTE_COST: u64 = 4;

/// Default cost per non-zero byte of payload.
pub const DEFAULT_NONZERO_BYTE_COST: u64 = 16;

/// Parameters of the intrinsic-gas floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrinsicGasSchedule {
    /// Flat cost charged regardless of payload.
    pub base: u64,
    /// Cost per zero byte of payload.
    pub zero_byte_cost: u64,
    /// Cost per non-zero byte of payload.
    pub nonzero_byte_cost: u64,
}

impl Default for IntrinsicGasSchedule {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_INTRINSIC_GAS,
            zero_byte_cost: DEFAULT_ZERO_BYTE_COST,
            nonzero_byte_cost: DEFAULT_NONZERO_BYTE_COST,
        }
    }
}

impl IntrinsicGasSchedule {
    /// Minimum gas limit admissible for a deposit carrying `data`.
    pub fn intrinsic_gas(&self, data: &[u8]) -> u64 {
        let zero_bytes = data.iter().filter(|&&byte| byte == 0).count() as u64;
        let nonzero_bytes = data.len() as u64 - zero_bytes;

        self.base
            .saturating_add(zero_bytes.saturating_mul(self.zero_byte_cost))
            .saturating_add(nonzero_bytes.saturating_mul(self.nonzero_byte_cost))
    }
}
