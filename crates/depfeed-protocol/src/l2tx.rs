//! Synthesized L2 deposit transactions (type 0x7E).
//!
//! The derivation pipeline turns each admitted record into an L2 transaction
//! with a custom EIP-2718 envelope:
//! `0x7E || rlp([source_hash, from, to, mint, value, gas_limit, is_system_tx, data])`
//!
//! The source hash binds the transaction to the record's position in L1
//! history, so two otherwise-identical deposits never collide.

use alloy_primitives::{keccak256, Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Header};
use serde::Serialize;

use crate::record::DepositRecord;

/// EIP-2718 transaction type byte for deposit transactions.
pub const DEPOSIT_TX_TYPE: u8 = 0x7E;

/// Domain separator byte for user-deposit source hashes.
const USER_DEPOSIT_SOURCE_DOMAIN: u8 = 0;

/// An L2 transaction synthesized from a deposit record.
///
/// Deposit transactions carry no signature: the sender was authenticated on
/// L1 and gas was paid for there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositTx {
    /// Hash binding this transaction to its L1 origin.
    pub source_hash: B256,
    /// L2-visible sender (already aliased where applicable).
    pub from: Address,
    /// Call target, or `TxKind::Create` for contract creations.
    pub to: TxKind,
    /// Base asset minted into the L2 execution context.
    pub mint: U256,
    /// Native value attached on the L1 call.
    pub value: U256,
    /// Execution gas ceiling.
    pub gas_limit: u64,
    /// Whether this is a protocol-internal system transaction.
    pub is_system_tx: bool,
    /// Calldata or init code.
    pub data: Bytes,
}

impl DepositTx {
    /// Build the L2 transaction for an admitted record.
    pub fn from_record(record: DepositRecord, source_hash: B256) -> Self {
        let to = if record.is_creation { TxKind::Create } else { TxKind::Call(record.to) };

        Self {
            source_hash,
            from: record.from,
            to,
            mint: record.mint,
            value: record.value,
            gas_limit: record.gas_limit,
            is_system_tx: false,
            data: record.data,
        }
    }

    fn fields_len(&self) -> usize {
        self.source_hash.length() +
            self.from.length() +
            self.to.length() +
            self.mint.length() +
            self.value.length() +
            self.gas_limit.length() +
            self.is_system_tx.length() +
            self.data.length()
    }

    /// Encode the typed envelope into the provided buffer.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        out.put_u8(DEPOSIT_TX_TYPE);
        Header { list: true, payload_length: self.fields_len() }.encode(out);
        self.source_hash.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        self.mint.encode(out);
        self.value.encode(out);
        self.gas_limit.encode(out);
        self.is_system_tx.encode(out);
        self.data.encode(out);
    }

    /// Length of the encoded envelope in bytes.
    pub fn encode_2718_len(&self) -> usize {
        1 + Header { list: true, payload_length: self.fields_len() }.length_with_payload()
    }

    /// Decode a typed envelope produced by [`encode_2718`](Self::encode_2718).
    pub fn decode_2718(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        if buf.first() != Some(&DEPOSIT_TX_TYPE) {
            return Err(alloy_rlp::Error::Custom("not a deposit transaction envelope"));
        }
        *buf = &buf[1..];

        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let remaining = buf.len();

        let this = Self {
            source_hash: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            mint: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            is_system_tx: Decodable::decode(buf)?,
            data: Decodable::decode(buf)?,
        };

        if buf.len() + header.payload_length != remaining {
            return Err(alloy_rlp::Error::ListLengthMismatch {
                expected: header.payload_length,
                got: remaining - buf.len(),
            });
        }

        Ok(this)
    }

    /// Encode and return as `Bytes`.
    ///
    /// Prefer [`encode_2718`](Self::encode_2718) with a reusable buffer when
    /// encoding many transactions.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = Vec::with_capacity(self.encode_2718_len());
        self.encode_2718(&mut buf);
        Bytes::from(buf)
    }

    /// Compute the L2 transaction hash.
    pub fn tx_hash(&self) -> B256 {
        keccak256(self.to_bytes())
    }
}

/// Compute the source hash for a user-deposited transaction.
///
/// Formula: `keccak256(bytes32(0) || keccak256(l1_block_hash || bytes32(log_index)))`
///
/// The leading domain byte distinguishes user deposits from other
/// protocol-internal deposit kinds.
pub fn user_deposit_source_hash(l1_block_hash: B256, log_index: u64) -> B256 {
    let mut deposit_id_input = [0u8; 64];
    deposit_id_input[..32].copy_from_slice(l1_block_hash.as_slice());
    deposit_id_input[56..64].copy_from_slice(&log_index.to_be_bytes());
    let deposit_id = keccak256(deposit_id_input);

    let mut source_hash_input = [0u8; 64];
    source_hash_input[31] = USER_DEPOSIT_SOURCE_DOMAIN;
    source_hash_input[32..64].copy_from_slice(deposit_id.as_slice());
    keccak256(source_hash_input)
}
