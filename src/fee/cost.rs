use alloy::primitives::U256;
use alloy::rlp::Encodable;

use super::{FeeContext, FeeError, Scalar};
use crate::gas::estimate_gas;

/// Intermediate values of one L1 cost computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub l1_gas: U256,
    pub raw_cost: U256, // l1_gas * base_fee, before the scalar
    pub cost: U256,
}

/// Turn L1 gas into a fee: `ceil(gas * base_fee * scalar)`.
///
/// `gas * base_fee` is exact and the scalar is applied as an exact fraction,
/// so the result is never below the true product. Overflow is an error rather
/// than a wrapped (and undercharged) value.
pub fn convert(gas: U256, base_fee: U256, scalar: &Scalar) -> Result<U256, FeeError> {
    // nothing is charged, whatever the size of the product
    if scalar.is_zero() {
        return Ok(U256::ZERO);
    }

    convert_with_raw(gas, base_fee, scalar).map(|(_, cost)| cost)
}

fn convert_with_raw(
    gas: U256,
    base_fee: U256,
    scalar: &Scalar,
) -> Result<(U256, U256), FeeError> {
    let raw_cost = gas.checked_mul(base_fee).ok_or_else(|| {
        tracing::warn!(%gas, %base_fee, "L1 cost overflowed multiplying by base fee");
        FeeError::Overflow
    })?;

    let cost = scalar.mul_ceil(raw_cost).inspect_err(|_| {
        tracing::warn!(%raw_cost, %scalar, "L1 cost overflowed applying scalar");
    })?;

    Ok((raw_cost, cost))
}

/// Like [`l1_cost`], but also returns the intermediate values.
///
/// `raw_cost` is always the exact `l1_gas * base_fee`; when that product does
/// not fit in 256 bits this fails with `Overflow` even for a zero scalar.
pub fn l1_cost_breakdown(payload: &[u8], ctx: &FeeContext) -> Result<FeeBreakdown, FeeError> {
    let l1_gas = estimate_gas(payload, ctx.overhead)?;
    let (raw_cost, cost) = convert_with_raw(l1_gas, ctx.base_fee, &ctx.scalar)?;

    tracing::trace!(
        payload_len = payload.len(),
        %l1_gas,
        %raw_cost,
        %cost,
        "computed L1 data fee"
    );

    Ok(FeeBreakdown {
        l1_gas,
        raw_cost,
        cost,
    })
}

/// L1 data fee of an already serialized transaction.
pub fn l1_cost(payload: &[u8], ctx: &FeeContext) -> Result<U256, FeeError> {
    let l1_gas = estimate_gas(payload, ctx.overhead)?;
    convert(l1_gas, ctx.base_fee, &ctx.scalar)
}

/// L1 data fee of a transaction, priced on its full RLP encoding.
///
/// The whole encoded transaction is what gets published to L1, so it is the
/// payload here rather than the data field alone.
pub fn l1_cost_encodable<T: Encodable + ?Sized>(
    tx: &T,
    ctx: &FeeContext,
) -> Result<U256, FeeError> {
    let mut encoded = Vec::with_capacity(tx.length());
    tx.encode(&mut encoded);
    l1_cost(&encoded, ctx)
}

impl FeeContext {
    pub fn l1_cost(&self, payload: &[u8]) -> Result<U256, FeeError> {
        l1_cost(payload, self)
    }

    pub fn l1_cost_breakdown(&self, payload: &[u8]) -> Result<FeeBreakdown, FeeError> {
        l1_cost_breakdown(payload, self)
    }
}
