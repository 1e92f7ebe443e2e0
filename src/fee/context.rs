use alloy::primitives::U256;

use super::{FeeError, Scalar, scale_decimals};
use crate::common::{DECIMALS_SLOT, L1_BASE_FEE_SLOT, OVERHEAD_SLOT, SCALAR_SLOT};
use crate::config::ChainConfig;
use crate::state::ParameterReader;

/// Everything needed to price a transaction's L1 data.
///
/// Built once per execution context (block or call) and never mutated; build a
/// new one when the parameters change. The disabled context is all zero, so
/// every cost computed from it is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeContext {
    pub base_fee: U256,
    pub overhead: U256,
    pub scalar: Scalar,
}

impl FeeContext {
    pub fn zero() -> Self {
        Self {
            base_fee: U256::ZERO,
            overhead: U256::ZERO,
            scalar: Scalar::ZERO,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.base_fee.is_zero() && self.overhead.is_zero() && self.scalar.is_zero()
    }

    /// Read the fee parameters for the active configuration.
    ///
    /// When the mechanism is disabled no storage is touched. Otherwise the base
    /// fee comes from the L1 block contract and overhead, scalar and decimals
    /// from the gas price oracle; the four reads form one logical snapshot.
    pub fn build<R: ParameterReader + ?Sized>(
        config: &ChainConfig,
        reader: &R,
    ) -> Result<Self, FeeError> {
        let Some(fee_config) = config.enabled_l1_fee() else {
            tracing::debug!(chain_id = config.chain_id, "L1 fee disabled, using zero context");
            return Ok(Self::zero());
        };

        let base_fee = reader.read_u256(fee_config.l1_block, L1_BASE_FEE_SLOT);
        let overhead = reader.read_u256(fee_config.gas_price_oracle, OVERHEAD_SLOT);
        let raw_scalar = reader.read_u256(fee_config.gas_price_oracle, SCALAR_SLOT);
        let decimals = reader.read_u256(fee_config.gas_price_oracle, DECIMALS_SLOT);

        let scalar = scale_decimals(raw_scalar, decimals).inspect_err(|e| {
            tracing::warn!(%raw_scalar, %decimals, "invalid L1 fee scalar: {}", e);
        })?;

        tracing::debug!(
            chain_id = config.chain_id,
            %base_fee,
            %overhead,
            %scalar,
            "built L1 fee context"
        );

        Ok(Self {
            base_fee,
            overhead,
            scalar,
        })
    }
}

pub fn build_context<R: ParameterReader + ?Sized>(
    config: &ChainConfig,
    reader: &R,
) -> Result<FeeContext, FeeError> {
    FeeContext::build(config, reader)
}
