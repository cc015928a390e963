//! Engine configuration.
//!
//! The gas-limit ceiling and the intrinsic-gas schedule are injected rather
//! than hard-coded: hosts parameterize them per deployment, and the engine
//! treats both as opaque.

use bon::Builder;
use depfeed_protocol::IntrinsicGasSchedule;

/// Default protocol-wide ceiling on a single deposit's gas limit.
///
/// Caps the L2 execution an L1 caller can force through one deposit.
pub const DEFAULT_MAX_GAS_LIMIT: u64 = 30_000_000;

/// Configuration for a [`DepositFeed`](crate::DepositFeed).
#[derive(Debug, Clone, Builder)]
pub struct FeedConfig {
    /// Upper bound on a deposit's gas limit.
    #[builder(default = DEFAULT_MAX_GAS_LIMIT)]
    pub max_gas_limit: u64,

    /// Schedule backing the intrinsic-gas admission floor.
    #[builder(default)]
    pub intrinsic_gas: IntrinsicGasSchedule,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
