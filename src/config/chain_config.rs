use alloy::primitives::Address;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::common::{GAS_PRICE_ORACLE_ADDRESS, L1_BLOCK_ADDRESS};

/// Where the L1 fee parameters live and whether the fee is charged at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1FeeConfig {
    pub enabled: bool,
    pub l1_block: Address,        // holds the L1 base fee
    pub gas_price_oracle: Address, // holds overhead, scalar and decimals
}

impl Default for L1FeeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            l1_block: L1_BLOCK_ADDRESS,
            gas_price_oracle: GAS_PRICE_ORACLE_ADDRESS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    #[serde(default)]
    pub chain_id: u64,
    // absent section means the fee mechanism is off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l1_fee: Option<L1FeeConfig>,
}

impl ChainConfig {
    pub fn with_l1_fee(chain_id: u64, l1_fee: L1FeeConfig) -> Self {
        Self {
            chain_id,
            l1_fee: Some(l1_fee),
        }
    }

    /// The active fee configuration, `None` when the mechanism is disabled.
    pub fn enabled_l1_fee(&self) -> Option<&L1FeeConfig> {
        self.l1_fee.as_ref().filter(|fee| fee.enabled)
    }

    pub fn is_l1_fee_enabled(&self) -> bool {
        self.enabled_l1_fee().is_some()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse chain config JSON")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chain config: {}", path.display()))?;

        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid chain config: {}", path.display()))
    }
}
