use core::cmp::Ordering;
use core::fmt;

use alloy::primitives::{U256, U512};

use super::FeeError;
use crate::common::MAX_SCALAR_DECIMALS;

/// Multiplicative correction applied to the L1 cost.
///
/// Kept as the exact fraction `raw / 10^decimals` so that no precision is lost
/// before the final upward rounding in [`Scalar::mul_ceil`]. Two scalars are
/// equal when they denote the same rational value, e.g. `15000 / 10^4 == 15 / 10`.
#[derive(Debug, Clone, Copy)]
pub struct Scalar {
    raw: U256,
    decimals: u8,
}

impl Scalar {
    pub const ZERO: Self = Self {
        raw: U256::ZERO,
        decimals: 0,
    };

    pub fn new(raw: U256, decimals: u8) -> Result<Self, FeeError> {
        if decimals > MAX_SCALAR_DECIMALS {
            return Err(FeeError::ParameterOverflow {
                decimals: U256::from(decimals),
            });
        }
        Ok(Self { raw, decimals })
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    // 10^decimals, bounded by MAX_SCALAR_DECIMALS so it always fits
    pub fn divisor(&self) -> U256 {
        U256::from(10u64).pow(U256::from(self.decimals))
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Multiply `value` by this scalar and round the product up to the next
    /// integer. The product is formed in 512 bits, so the only failure is a
    /// result that does not fit back into 256 bits.
    pub fn mul_ceil(&self, value: U256) -> Result<U256, FeeError> {
        let product = widen(value) * widen(self.raw);
        let divisor = widen(self.divisor());

        let mut quotient = product / divisor;
        if !(product % divisor).is_zero() {
            quotient += U512::from(1u64);
        }

        narrow(quotient).ok_or(FeeError::Overflow)
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    // a/b vs c/d  <=>  a*d vs c*b, all factors below 2^256
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = widen(self.raw) * widen(other.divisor());
        let rhs = widen(other.raw) * widen(self.divisor());
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = self.divisor();
        let integer = self.raw / divisor;
        let fraction = self.raw % divisor;

        if fraction.is_zero() {
            return write!(f, "{}", integer);
        }

        let digits = format!(
            "{:0>width$}",
            fraction.to_string(),
            width = self.decimals as usize
        );
        write!(f, "{}.{}", integer, digits.trim_end_matches('0'))
    }
}

/// Derive the fee scalar from its raw storage value: `raw_scalar / 10^decimals`.
///
/// The divisor is computed by exact integer exponentiation; a `decimals` whose
/// power does not fit in 256 bits is rejected instead of wrapping.
pub fn scale_decimals(raw_scalar: U256, decimals: U256) -> Result<Scalar, FeeError> {
    let overflow = FeeError::ParameterOverflow { decimals };

    if U256::from(10u64).checked_pow(decimals).is_none() {
        return Err(overflow);
    }
    let exponent = u8::try_from(decimals).map_err(|_| overflow)?;

    Scalar::new(raw_scalar, exponent)
}

fn widen(value: U256) -> U512 {
    U512::from_be_slice(&value.to_be_bytes::<32>())
}

// None when any of the upper 256 bits is set
fn narrow(value: U512) -> Option<U256> {
    let bytes = value.to_be_bytes::<64>();
    let (high, low) = bytes.split_at(32);
    high.iter()
        .all(|byte| *byte == 0)
        .then(|| U256::from_be_slice(low))
}
