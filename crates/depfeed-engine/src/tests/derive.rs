use alloy_primitives::{Bytes, TxKind, B256, U256};
use depfeed_protocol::{user_deposit_source_hash, DepositRequest, LogEntry};

use super::{call_request, test_feed, EOA_CALLER, NON_ZERO_TARGET};
use crate::{DepositLog, Deriver};

const L1_BLOCK_HASH: B256 = B256::repeat_byte(0x01);

#[test]
fn test_drain_preserves_append_order() {
    let mut feed = test_feed();
    for mint in 0..3u64 {
        let request = DepositRequest { value: U256::from(mint), ..call_request() };
        feed.submit_deposit(EOA_CALLER, U256::ZERO, request).unwrap();
    }

    let mut deriver = Deriver::new();
    let derived = deriver.drain(feed.log(), L1_BLOCK_HASH);

    assert_eq!(derived.len(), 3);
    for (index, item) in derived.iter().enumerate() {
        let tx = item.as_ref().unwrap();
        // Order is positional: the record admitted first derives first.
        assert_eq!(tx.mint, U256::from(index as u64));
        assert_eq!(tx.source_hash, user_deposit_source_hash(L1_BLOCK_HASH, index as u64));
        assert_eq!(tx.to, TxKind::Call(NON_ZERO_TARGET));
    }
}

#[test]
fn test_drain_advances_cursor() {
    let mut feed = test_feed();
    feed.submit_deposit(EOA_CALLER, U256::ZERO, call_request()).unwrap();

    let mut deriver = Deriver::new();
    assert_eq!(deriver.drain(feed.log(), L1_BLOCK_HASH).len(), 1);
    assert_eq!(deriver.cursor(), 1);

    // Nothing new: a second pass yields nothing and does not re-derive.
    assert!(deriver.drain(feed.log(), L1_BLOCK_HASH).is_empty());

    feed.submit_deposit(EOA_CALLER, U256::ZERO, call_request()).unwrap();
    let derived = deriver.drain(feed.log(), L1_BLOCK_HASH);
    assert_eq!(derived.len(), 1);
    assert_eq!(
        derived[0].as_ref().unwrap().source_hash,
        user_deposit_source_hash(L1_BLOCK_HASH, 1),
    );
}

#[test]
fn test_resume_from_saved_cursor() {
    let mut feed = test_feed();
    for _ in 0..4 {
        feed.submit_deposit(EOA_CALLER, U256::ZERO, call_request()).unwrap();
    }

    let mut deriver = Deriver::with_cursor(2);
    let derived = deriver.drain(feed.log(), L1_BLOCK_HASH);

    assert_eq!(derived.len(), 2);
    assert_eq!(
        derived[0].as_ref().unwrap().source_hash,
        user_deposit_source_hash(L1_BLOCK_HASH, 2),
    );
}

#[test]
fn test_malformed_entry_is_fatal_for_that_record_only() {
    let mut feed = test_feed();
    feed.submit_deposit(EOA_CALLER, U256::ZERO, call_request()).unwrap();

    // Inject garbage the way a foreign engine version might, then admit a
    // well-formed deposit behind it.
    let mut log = feed.log().clone();
    log.append(LogEntry { topics: vec![B256::repeat_byte(0xaa)], data: Bytes::new() });

    let mut tail_feed = test_feed();
    tail_feed.submit_deposit(EOA_CALLER, U256::ZERO, call_request()).unwrap();
    log.append(tail_feed.log().entries()[0].clone());

    let mut deriver = Deriver::new();
    let derived = deriver.drain(&log, L1_BLOCK_HASH);

    assert_eq!(derived.len(), 3);
    assert!(derived[0].is_ok());
    assert_eq!(derived[1].as_ref().unwrap_err().index, 1);
    assert!(derived[2].is_ok());
    assert_eq!(
        derived[2].as_ref().unwrap().source_hash,
        user_deposit_source_hash(L1_BLOCK_HASH, 2),
    );
}
