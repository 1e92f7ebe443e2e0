use alloy::primitives::U256;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeeError {
    #[error("Scalar decimals out of range: 10^{decimals} does not fit in 256 bits")]
    ParameterOverflow { decimals: U256 },
    #[error("L1 fee arithmetic overflowed 256 bits")]
    Overflow,
}
