use alloy::primitives::U256;

use crate::common::{SIGNATURE_OVERHEAD_BYTES, TX_DATA_NON_ZERO_GAS, TX_DATA_ZERO_GAS};
use crate::fee::FeeError;

/// Zero and non-zero byte counts of a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCounts {
    pub zero: u64,
    pub non_zero: u64,
}

impl ByteCounts {
    pub fn of(data: &[u8]) -> Self {
        data.iter().fold(Self::default(), |mut counts, byte| {
            if *byte == 0 {
                counts.zero += 1;
            } else {
                counts.non_zero += 1;
            }
            counts
        })
    }
}

pub struct GasCalculator;

impl GasCalculator {
    // gas the payload would use as calldata on L1, without the overhead
    pub fn calculate_calldata_gas(counts: ByteCounts) -> U256 {
        let zeroes_gas = U256::from(counts.zero) * U256::from(TX_DATA_ZERO_GAS);
        let ones_gas = (U256::from(counts.non_zero) + U256::from(SIGNATURE_OVERHEAD_BYTES))
            * U256::from(TX_DATA_NON_ZERO_GAS);

        zeroes_gas + ones_gas
    }

    // calldata gas plus the fixed per-transaction overhead
    pub fn calculate_l1_gas(data: &[u8], overhead: U256) -> Result<U256, FeeError> {
        let counts = ByteCounts::of(data);
        let calldata_gas = Self::calculate_calldata_gas(counts);

        tracing::trace!(
            zero_bytes = counts.zero,
            non_zero_bytes = counts.non_zero,
            %calldata_gas,
            %overhead,
            "estimated L1 calldata gas"
        );

        calldata_gas.checked_add(overhead).ok_or_else(|| {
            tracing::warn!(%overhead, "L1 gas overflowed adding overhead");
            FeeError::Overflow
        })
    }
}

/// Estimate the L1 gas used to publish `payload` as calldata:
/// `zero * 4 + (non_zero + 68) * 16 + overhead`.
///
/// Only the byte counts matter, so the result does not depend on byte order.
pub fn estimate_gas(payload: &[u8], overhead: U256) -> Result<U256, FeeError> {
    GasCalculator::calculate_l1_gas(payload, overhead)
}
