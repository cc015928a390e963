//! L1→L2 sender aliasing.
//!
//! When the immediate L1 caller of the deposit feed is a contract, its L2
//! identity is the caller address shifted by a fixed offset. The shift keeps
//! contract-originated senders out of the address space reachable by native
//! L2 signatures, so an L1 contract can never impersonate (or be
//! impersonated by) an L2 account at the same address. Externally-owned
//! callers pass through unmodified.
//!
//! The transform is modular addition over the 160-bit address space, so it
//! is invertible by construction: subtracting the same offset recovers the
//! original address exactly.

use alloy_primitives::{address, aliases::U160, Address};

/// Offset added to contract-originated L1 senders to form their L2 identity.
pub const L1_TO_L2_ALIAS_OFFSET: Address = address!("1111000000000000000000000000000000001111");

/// Apply the aliasing transform: `(address + OFFSET) mod 2^160`.
pub fn apply_l1_to_l2_alias(l1_address: Address) -> Address {
    from_u160(as_u160(l1_address).wrapping_add(as_u160(L1_TO_L2_ALIAS_OFFSET)))
}

/// Invert the aliasing transform: `(address - OFFSET) mod 2^160`.
///
/// Recovers the original L1 caller from an aliased record `from` field.
pub fn undo_l1_to_l2_alias(l2_address: Address) -> Address {
    from_u160(as_u160(l2_address).wrapping_sub(as_u160(L1_TO_L2_ALIAS_OFFSET)))
}

#[inline]
fn as_u160(address: Address) -> U160 {
    U160::from_be_bytes(address.0 .0)
}

#[inline]
fn from_u160(value: U160) -> Address {
    Address::from(value)
}
