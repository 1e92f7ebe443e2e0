use alloy::primitives::{Address, B256, address, b256};

// Calldata gas schedule of the settlement layer (EIP-2028)
pub const TX_DATA_ZERO_GAS: u64 = 4;
pub const TX_DATA_NON_ZERO_GAS: u64 = 16;
// Extra non-zero bytes charged for the signature every transaction carries
pub const SIGNATURE_OVERHEAD_BYTES: u64 = 68;

// Storage slots of the fee parameters
pub const L1_BASE_FEE_SLOT: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000002");
pub const OVERHEAD_SLOT: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000003");
pub const SCALAR_SLOT: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000004");
pub const DECIMALS_SLOT: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000005");

// Predeployed contracts holding the parameters
pub const L1_BLOCK_ADDRESS: Address = address!("4200000000000000000000000000000000000015");
pub const GAS_PRICE_ORACLE_ADDRESS: Address = address!("420000000000000000000000000000000000000f");

/// Largest `decimals` for which `10^decimals` still fits in 256 bits.
pub const MAX_SCALAR_DECIMALS: u8 = 77;
