use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ParameterReader, u256_to_word};

/// Storage words keyed by contract address and slot.
///
/// Stands in for the state database wherever no real one is wired in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryParameterStore {
    pub slots: HashMap<Address, HashMap<B256, B256>>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Set a raw storage word, writing zero clears the slot
    pub fn set(&mut self, address: Address, slot: B256, value: B256) {
        if value == B256::ZERO {
            if let Some(storage) = self.slots.get_mut(&address) {
                storage.remove(&slot);
                if storage.is_empty() {
                    self.slots.remove(&address);
                }
            }
            return;
        }

        self.slots.entry(address).or_default().insert(slot, value);
        tracing::trace!(%address, %slot, value = %hex::encode(value), "parameter slot written");
    }

    pub fn set_u256(&mut self, address: Address, slot: B256, value: U256) {
        self.set(address, slot, u256_to_word(value));
    }

    /// Builder form of [`Self::set_u256`].
    pub fn with_u256(mut self, address: Address, slot: B256, value: U256) -> Self {
        self.set_u256(address, slot, value);
        self
    }

    /// Number of non-zero slots across all contracts
    pub fn slot_count(&self) -> usize {
        self.slots.values().map(HashMap::len).sum()
    }
}

impl ParameterReader for InMemoryParameterStore {
    fn read(&self, address: Address, slot: B256) -> B256 {
        self.slots
            .get(&address)
            .and_then(|storage| storage.get(&slot))
            .copied()
            .unwrap_or_default()
    }
}
