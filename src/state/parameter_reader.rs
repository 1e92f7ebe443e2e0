use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};

/// Read-only view of contract storage holding the L1 fee parameters.
///
/// Slots that were never written must read as the zero word.
pub trait ParameterReader {
    fn read(&self, address: Address, slot: B256) -> B256;

    // storage word decoded as a big-endian unsigned integer
    fn read_u256(&self, address: Address, slot: B256) -> U256 {
        word_to_u256(self.read(address, slot))
    }
}

impl<T: ParameterReader + ?Sized> ParameterReader for &T {
    fn read(&self, address: Address, slot: B256) -> B256 {
        (**self).read(address, slot)
    }
}

impl<T: ParameterReader + ?Sized> ParameterReader for Arc<T> {
    fn read(&self, address: Address, slot: B256) -> B256 {
        (**self).read(address, slot)
    }
}

pub fn word_to_u256(word: B256) -> U256 {
    U256::from_be_bytes(word.0)
}

pub fn u256_to_word(value: U256) -> B256 {
    B256::from(value.to_be_bytes::<32>())
}
