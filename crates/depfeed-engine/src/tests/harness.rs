//! Cost characterization for the canonical request shapes: zero data, a
//! creation payload, and a simulated ERC-20 deposit payload.

use alloy_primitives::{bytes, Address, Bytes, U256};

use crate::{CostModelMeasurer, GasMeasurer};

/// Calldata of a representative ERC-20 bridge deposit.
const ERC20_DEPOSIT_DATA: Bytes = bytes!(
    "CBD4ECE9000000000000000000000000420000000000000000000000000000000000001000000000000000000000000099C9FC46F92E8A1C0DEC1B1747D010903E884BE10000000000000000000000000000000000000000000000000000000000000080000000000000000000000000000000000000000000000000000000000000A32A00000000000000000000000000000000000000000000000000000000000000E4662A633A0000000000000000000000002260FAC5E5542A773AA44FBCFEDF7C193BC2C59900000000000000000000000068F180FCCE6836688E9084F035309E29BF0A2095000000000000000000000000A2490947B30258B522B7D6FD8FABEC2D21C42D57000000000000000000000000A2490947B30258B522B7D6FD8FABEC2D21C42D570000000000000000000000000000000000000000000000000000000003E344EF00000000000000000000000000000000000000000000000000000000000000C0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"
);

#[test]
fn test_measurement_is_deterministic() {
    let mut meter = CostModelMeasurer::default();

    let first = meter.measure_call_gas(Address::ZERO, &ERC20_DEPOSIT_DATA, U256::ZERO).unwrap();
    let second = meter.measure_call_gas(Address::ZERO, &ERC20_DEPOSIT_DATA, U256::ZERO).unwrap();
    // The measurement context reverts all state, so repeating it must not
    // drift.
    assert_eq!(first, second);
}

#[test]
fn test_larger_payloads_cost_more() {
    let mut meter = CostModelMeasurer::default();

    let empty = meter.measure_call_gas(Address::ZERO, &[], U256::ZERO).unwrap();
    let creation =
        meter.measure_call_gas(Address::ZERO, &[0x11; 42], U256::ZERO).unwrap();
    let erc20 =
        meter.measure_call_gas(Address::ZERO, &ERC20_DEPOSIT_DATA, U256::ZERO).unwrap();

    assert!(empty < creation);
    assert!(creation < erc20);
}

#[test]
fn test_attached_value_adds_surcharge() {
    let mut meter = CostModelMeasurer::default();

    let plain = meter.measure_call_gas(Address::ZERO, &[], U256::ZERO).unwrap();
    let with_value = meter.measure_call_gas(Address::ZERO, &[], U256::from(100)).unwrap();

    assert!(plain < with_value);
}
